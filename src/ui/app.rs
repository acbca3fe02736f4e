use dioxus::prelude::*;
use std::sync::Arc;

use crate::domain::task::{Filter, Priority, Task};
use crate::repository::TaskStore;
use crate::services::TaskList;
use crate::ui::components::TaskRow;

/// The task list view. Owns all state (collection, draft form fields,
/// active filter) and persists the collection after every mutation.
#[component]
pub fn App() -> Element {
    let store = use_context::<Arc<TaskStore>>();

    // Loaded once at mount; the store is not re-read on later renders.
    let mut list = use_signal({
        let store = store.clone();
        move || TaskList::with_tasks(store.load())
    });

    let add_task = {
        let store = store.clone();
        move |_| {
            let (text, priority) = {
                let list = list.read();
                (list.draft_text.clone(), list.draft_priority)
            };
            if list.write().add_task(&text, priority).is_some() {
                store.save(list.read().tasks());
            }
        }
    };

    let toggle_task = {
        let store = store.clone();
        move |id: i64| {
            if list.write().toggle_completion(id) {
                store.save(list.read().tasks());
            }
        }
    };

    let delete_task = {
        let store = store.clone();
        move |id: i64| {
            if list.write().delete_task(id) {
                store.save(list.read().tasks());
            }
        }
    };

    let draft_text = list.read().draft_text.clone();
    let draft_priority = list.read().draft_priority;
    let filter = list.read().filter;
    let total = list.read().tasks().len();
    let open = list.read().tasks().iter().filter(|t| !t.completed).count();
    let visible: Vec<Task> = list.read().visible_tasks().cloned().collect();

    rsx! {
        div {
            class: "app-container",

            h1 { class: "app-title", "Taskpad" }

            // Add form
            div {
                class: "add-form",

                input {
                    r#type: "text",
                    class: "task-input",
                    placeholder: "What needs to be done?",
                    value: "{draft_text}",
                    oninput: move |e| list.write().draft_text = e.value(),
                }

                select {
                    class: "priority-select",
                    value: "{draft_priority:?}",
                    onchange: move |e| {
                        let priority = match e.value().as_str() {
                            "Low" => Priority::Low,
                            "Medium" => Priority::Medium,
                            "High" => Priority::High,
                            _ => return,
                        };
                        list.write().draft_priority = priority;
                    },
                    option { value: "Low", "Low" }
                    option { value: "Medium", "Medium" }
                    option { value: "High", "High" }
                }

                button {
                    class: "add-button",
                    onclick: add_task,
                    "Add Task"
                }
            }

            // Filter bar
            div {
                class: "filter-bar",

                button {
                    class: if filter == Filter::All { "filter-btn active" } else { "filter-btn" },
                    onclick: move |_| list.write().set_filter(Filter::All),
                    "All"
                }

                button {
                    class: if filter == Filter::Active { "filter-btn active" } else { "filter-btn" },
                    onclick: move |_| list.write().set_filter(Filter::Active),
                    "Active"
                }

                button {
                    class: if filter == Filter::Completed { "filter-btn active" } else { "filter-btn" },
                    onclick: move |_| list.write().set_filter(Filter::Completed),
                    "Completed"
                }
            }

            // Task list
            if visible.is_empty() {
                div {
                    class: "empty-state",
                    if total == 0 {
                        "No tasks yet. Add your first task above."
                    } else {
                        "Nothing matches this filter."
                    }
                }
            } else {
                ul {
                    class: "task-list",
                    for task in visible {
                        TaskRow {
                            key: "{task.id}",
                            task: task.clone(),
                            on_toggle: toggle_task.clone(),
                            on_delete: delete_task.clone(),
                        }
                    }
                }
            }

            // Status bar
            div {
                class: "status-bar",
                "{open} open · {total} total"
            }
        }
    }
}
