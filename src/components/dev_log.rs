//! Developer Log Component
//!
//! Collapsed panel showing the most recent lines of the rolling log.
//! Renders nothing when logging was not initialized.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

/// Lines shown in the panel
const SHOWN_LINES: usize = 50;

/// Formatted lines, newest first, at most `limit`
pub fn recent_lines(buffer: &LogBuffer, limit: usize) -> Vec<String> {
    if buffer.is_empty() {
        return Vec::new();
    }
    buffer
        .lines()
        .iter()
        .rev()
        .take(limit)
        .map(ToString::to_string)
        .collect()
}

#[component]
pub fn DevLog() -> impl IntoView {
    use_context::<LogBuffer>().map(|buffer| {
        let buffer = StoredValue::new(buffer);
        let (open, set_open) = signal(false);
        let (lines, set_lines) = signal(Vec::<String>::new());
        let (total, set_total) = signal(0usize);

        // The buffer is not reactive; snapshot it on demand
        let refresh = move || {
            buffer.with_value(|b| {
                set_lines.set(recent_lines(b, SHOWN_LINES));
                set_total.set(b.len());
            });
        };

        view! {
            <section class="dev-log">
                <button
                    type="button"
                    class="dev-log-toggle"
                    on:click=move |_| {
                        if !open.get_untracked() {
                            refresh();
                        }
                        set_open.update(|o| *o = !*o);
                    }
                >
                    {move || if open.get() { "Hide developer log" } else { "Show developer log" }}
                </button>

                <Show when=move || open.get()>
                    <div class="dev-log-actions">
                        <span class="dev-log-count">{move || format!("{} lines", total.get())}</span>
                        <button type="button" on:click=move |_| refresh()>"Refresh"</button>
                        <button
                            type="button"
                            on:click=move |_| {
                                buffer.with_value(LogBuffer::clear);
                                refresh();
                            }
                        >
                            "Clear"
                        </button>
                    </div>
                    {move || if lines.with(Vec::is_empty) {
                        view! { <p class="dev-log-empty">"No log lines"</p> }.into_any()
                    } else {
                        view! { <pre class="dev-log-lines">{lines.get().join("\n")}</pre> }.into_any()
                    }}
                </Show>
            </section>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rolling_logger::LogLine;
    use tracing::Level;

    fn push(buffer: &LogBuffer, message: &str) {
        buffer.push(LogLine {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "todo_list_ui::storage".to_string(),
            message: message.to_string(),
        });
    }

    #[test]
    fn test_recent_lines_newest_first() {
        let buffer = LogBuffer::new(10);
        push(&buffer, "loaded todo list");
        push(&buffer, "discarding persisted list");
        push(&buffer, "failed to persist todo list");

        let lines = recent_lines(&buffer, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("failed to persist todo list"));
        assert!(lines[1].ends_with("discarding persisted list"));
    }

    #[test]
    fn test_recent_lines_after_clear() {
        let buffer = LogBuffer::new(10);
        push(&buffer, "one");
        buffer.clear();
        assert!(recent_lines(&buffer, SHOWN_LINES).is_empty());
    }
}
