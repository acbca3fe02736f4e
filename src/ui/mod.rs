mod app;
pub mod components;

pub use app::App;

/// Base styles injected into the webview head by `main`.
pub const STYLESHEET: &str = r#"
body {
    margin: 0;
    background: #f9fafb;
    font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
    color: #111827;
}

.app-container {
    max-width: 640px;
    margin: 0 auto;
    padding: 40px 20px;
}

.app-title {
    font-size: 1.8rem;
    font-weight: 700;
    text-align: center;
    margin: 0 0 24px 0;
}

.add-form {
    display: flex;
    gap: 8px;
    margin-bottom: 16px;
}

.task-input {
    flex: 1;
    padding: 8px 12px;
    border: 1px solid #e5e7eb;
    border-radius: 6px;
    font-size: 14px;
}

.priority-select {
    padding: 8px 12px;
    border: 1px solid #e5e7eb;
    border-radius: 6px;
    font-size: 14px;
    background: white;
}

.add-button {
    padding: 8px 16px;
    background: #3b82f6;
    color: white;
    border: none;
    border-radius: 6px;
    font-size: 14px;
    cursor: pointer;
}

.add-button:hover {
    background: #2563eb;
}

.filter-bar {
    display: flex;
    gap: 8px;
    margin-bottom: 20px;
}

.filter-btn {
    padding: 6px 14px;
    background: #e5e7eb;
    color: #374151;
    border: none;
    border-radius: 6px;
    font-size: 13px;
    cursor: pointer;
}

.filter-btn.active {
    background: #3b82f6;
    color: white;
}

.task-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.task-row {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 14px 16px;
    background: white;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    margin-bottom: 10px;
}

.task-row.completed {
    background: #f3f4f6;
}

.task-text {
    flex: 1;
    cursor: pointer;
}

.task-text.done {
    text-decoration: line-through;
    color: #6b7280;
}

.priority-badge {
    padding: 3px 10px;
    border-radius: 9999px;
    font-size: 11px;
    font-weight: 600;
    color: white;
}

.priority-badge.high {
    background: #ef4444;
}

.priority-badge.medium {
    background: #f59e0b;
}

.priority-badge.low {
    background: #10b981;
}

.delete-btn {
    background: none;
    border: none;
    color: #ef4444;
    font-size: 13px;
    cursor: pointer;
}

.delete-btn:hover {
    color: #b91c1c;
}

.empty-state {
    text-align: center;
    padding: 40px 20px;
    background: white;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    color: #6b7280;
}

.status-bar {
    margin-top: 16px;
    text-align: center;
    font-size: 13px;
    color: #6b7280;
}
"#;
