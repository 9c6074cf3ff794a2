//! Stash UI: drop zone, file picker, filter controls, and the
//! stored-file table.

use std::rc::Rc;

use leptos::*;
use stash_core::{FileStore, FilterCriteria, StoredFile, TYPE_FILTER_ALL};
use stash_host_web::{
    files_from_drop, files_from_input, ingest_files, load_filter_prefs, save_filter_prefs,
    WebFileStore,
};

use crate::rows::{
    build_rows, size_input_text, summary_label, type_label, FileRow, EMPTY_LIST_LABEL,
};

const TYPE_CHOICES: [(&str, &str); 6] = [
    (TYPE_FILTER_ALL, "All types"),
    ("image", "Images"),
    ("video", "Video"),
    ("audio", "Audio"),
    ("text", "Text"),
    ("application", "Applications"),
];

#[component]
/// Root stash application component.
pub fn StashApp() -> impl IntoView {
    let store: Rc<dyn FileStore> = Rc::new(WebFileStore);

    let records = create_rw_signal(Vec::<StoredFile>::new());
    let criteria = create_rw_signal(load_filter_prefs().unwrap_or_default());
    let drag_active = create_rw_signal(false);
    let selected_row = create_rw_signal::<Option<usize>>(None);
    let show_details = create_rw_signal(true);

    let initial = criteria.get_untracked();
    let type_choice = create_rw_signal(initial.type_prefix.clone());
    let size_input = create_rw_signal(size_input_text(initial.max_size_kb));

    let refresh = {
        let store = store.clone();
        move || {
            let store = store.clone();
            spawn_local(async move {
                records.set(store.load_all().await);
            });
        }
    };
    refresh();

    let on_stored: Rc<dyn Fn()> = Rc::new({
        let refresh = refresh.clone();
        move || refresh()
    });
    let on_dropped: Rc<dyn Fn(String)> =
        Rc::new(|reason: String| logging::warn!("file ingest dropped: {reason}"));
    let ingest = {
        let store = store.clone();
        move |files: Vec<web_sys::File>| {
            ingest_files(store.clone(), files, on_stored.clone(), on_dropped.clone());
        }
    };

    let on_pick = {
        let ingest = ingest.clone();
        move |ev: ev::Event| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            ingest(files_from_input(&input));
            // Reset so selecting the same file again re-fires the event.
            input.set_value("");
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        ingest(files_from_drop(&ev));
    };

    let apply_filters = move |_| {
        let next = FilterCriteria::from_controls(&type_choice.get(), &size_input.get());
        if let Err(err) = save_filter_prefs(&next) {
            logging::warn!("filter prefs save failed: {err}");
        }
        criteria.set(next);
    };

    let delete_at = {
        let store = store.clone();
        Callback::new(move |storage_index: usize| {
            selected_row.set(None);
            let store = store.clone();
            spawn_local(async move {
                if let Err(err) = store.delete_at(storage_index).await {
                    logging::warn!("delete at index {storage_index} failed: {err}");
                }
                records.set(store.load_all().await);
            });
        })
    };

    let clear_all = {
        let store = store.clone();
        move |_| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Remove every stored file?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            selected_row.set(None);
            let store = store.clone();
            spawn_local(async move {
                if let Err(err) = store.clear().await {
                    logging::warn!("clear failed: {err}");
                }
                records.set(store.load_all().await);
            });
        }
    };

    let rows = Signal::derive(move || build_rows(&records.get(), &criteria.get()));
    let selected = Signal::derive(move || {
        selected_row
            .get()
            .and_then(|idx| records.get().get(idx).cloned())
    });

    view! {
        <div class="stash-shell">
            <header class="stash-header">
                <h1>"Local File Stash"</h1>
            </header>

            <section
                class=move || if drag_active.get() { "drop-zone dragover" } else { "drop-zone" }
                aria-label="Upload surface"
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                <p>"Drag files here, or pick them below."</p>
                <input type="file" multiple=true on:change=on_pick />
            </section>

            <div class="filter-bar">
                <label for="type-filter">"Type"</label>
                <select
                    id="type-filter"
                    prop:value=move || type_choice.get()
                    on:change=move |ev| type_choice.set(event_target_value(&ev))
                >
                    {TYPE_CHOICES
                        .iter()
                        .copied()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <label for="size-filter">"Max size (KB)"</label>
                <input
                    id="size-filter"
                    type="number"
                    min="0"
                    placeholder="no limit"
                    prop:value=move || size_input.get()
                    on:input=move |ev| size_input.set(event_target_value(&ev))
                />
                <button type="button" on:click=apply_filters>"Apply filters"</button>
                <button type="button" on:click=move |_| show_details.update(|v| *v = !*v)>
                    {move || if show_details.get() { "Details On" } else { "Details Off" }}
                </button>
                <button type="button" class="danger" on:click=clear_all>"Clear all"</button>
            </div>

            <div class="stash-listwrap">
                <table class="stash-list" aria-label="Stored files">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Size (KB)"</th>
                            <th>"Stored"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let current = rows.get();
                            if current.is_empty() {
                                view! {
                                    <tr class="placeholder-row">
                                        <td colspan="5">{EMPTY_LIST_LABEL}</td>
                                    </tr>
                                }
                                .into_view()
                            } else {
                                current
                                    .into_iter()
                                    .map(|row| view! {
                                        <StashRow
                                            row=row
                                            selected_row=selected_row
                                            delete_at=delete_at
                                        />
                                    })
                                    .collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get() fallback=|| ()>
                <div class="stash-details">
                    {move || match selected.get() {
                        Some(record) => view! {
                            <div class="details-grid">
                                <div>"Name"</div><div>{record.name.clone()}</div>
                                <div>"Type"</div><div>{type_label(&record.mime_type)}</div>
                                <div>"Size"</div><div>{format!("{} KB", record.size_kb_label())}</div>
                                <div>"Stored"</div><div>{record.stored_at.clone()}</div>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="details-empty">"Select a row to view details."</div>
                        }
                        .into_view(),
                    }}
                </div>
            </Show>

            <footer class="stash-statusbar">
                <span>{move || summary_label(records.get().len(), rows.get().len())}</span>
                <span>{move || {
                    selected
                        .get()
                        .map(|record| format!("Selected: {}", record.name))
                        .unwrap_or_else(|| "Ready".to_string())
                }}</span>
            </footer>
        </div>
    }
}

#[component]
fn StashRow(
    row: FileRow,
    selected_row: RwSignal<Option<usize>>,
    delete_at: Callback<usize>,
) -> impl IntoView {
    let storage_index = row.storage_index;
    let is_selected = Signal::derive(move || selected_row.get() == Some(storage_index));
    view! {
        <tr
            class=move || if is_selected.get() { "selected" } else { "" }
            on:mousedown=move |_| selected_row.set(Some(storage_index))
        >
            <td>{row.name}</td>
            <td>{row.type_label}</td>
            <td>{row.size_kb_label}</td>
            <td>{row.stored_at}</td>
            <td>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| delete_at.call(storage_index)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
