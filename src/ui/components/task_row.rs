use dioxus::prelude::*;

use crate::domain::task::{Priority, Task};

#[component]
pub fn TaskRow(task: Task, on_toggle: EventHandler<i64>, on_delete: EventHandler<i64>) -> Element {
    let badge_class = match task.priority {
        Priority::High => "priority-badge high",
        Priority::Medium => "priority-badge medium",
        Priority::Low => "priority-badge low",
    };

    rsx! {
        li {
            class: if task.completed { "task-row completed" } else { "task-row" },

            // Clicking the label toggles completion
            span {
                class: if task.completed { "task-text done" } else { "task-text" },
                onclick: move |_| on_toggle.call(task.id),
                "{task.text}"
            }

            span { class: "{badge_class}", "{task.priority:?}" }

            button {
                class: "delete-btn",
                onclick: move |_| on_delete.call(task.id),
                "Delete"
            }
        }
    }
}
