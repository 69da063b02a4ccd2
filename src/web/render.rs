//! HTML rendering for the task page.
//!
//! The page shell comes from the embedded template; the task table and
//! edit modal are rendered as fragments from the current [`ViewState`].
//! All user-supplied text passes through `html_escape`.

use crate::types::Task;
use crate::view::ViewState;

use super::templates;

/// Render the full page for the given state.
pub fn render_page(state: &ViewState) -> String {
    templates::INDEX_TEMPLATE
        .replace("{{draft_title}}", &html_escape(&state.draft.title))
        .replace(
            "{{draft_description}}",
            &html_escape(&state.draft.description),
        )
        .replace("{{table}}", &render_table(&state.tasks))
        .replace("{{modal}}", &render_modal(state))
}

/// Render the task table. Hidden entirely while the list is empty.
fn render_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"<div class="table-wrap"><table>
        <thead>
            <tr>
                <th>ID</th>
                <th>Created At</th>
                <th>Title</th>
                <th>Description</th>
                <th>Tools</th>
            </tr>
        </thead>
        <tbody>"#,
    );

    for task in tasks {
        html.push_str(&format!(
            r#"<tr>
                <td>{id}</td>
                <td>{created_at}</td>
                <td>{title}</td>
                <td>{description}</td>
                <td><div class="tools">
                    <form method="post" action="/tasks/{id}/delete">
                        <button type="submit" title="Delete">&#128465;</button>
                    </form>
                    <a href="/tasks/{id}/edit" title="Edit">&#9998;</a>
                </div></td>
            </tr>"#,
            id = task.id,
            created_at = task.created_at.format("%Y-%m-%d %H:%M:%S"),
            title = html_escape(&task.title),
            description = html_escape(&task.description),
        ));
    }

    html.push_str("</tbody></table></div>");
    html
}

/// Render the edit modal. Empty unless a task is being edited.
fn render_modal(state: &ViewState) -> String {
    let Some(task) = &state.editing else {
        return String::new();
    };

    format!(
        r#"<div class="modal-backdrop"><div class="modal">
            <h2>Update Task: {title}</h2>
            <form method="post" action="/edit/save">
                <textarea name="description">{description}</textarea>
                <div class="modal-actions">
                    <button type="submit" class="btn-cancel"
                            formaction="/edit/cancel" formnovalidate>Cancel</button>
                    <button type="submit" class="btn-save">Save</button>
                </div>
            </form>
        </div></div>"#,
        title = html_escape(&task.title),
        description = html_escape(&state.edited_description),
    )
}

/// Minimal HTML escaping for text interpolated into fragments.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewTask;
    use chrono::{TimeZone, Utc};

    fn task(id: i64, title: &str, description: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
        }
    }

    #[test]
    fn empty_list_renders_no_table() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn table_renders_rows_with_controls() {
        let html = render_table(&[task(3, "Write docs", "for the release")]);
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("Write docs"));
        assert!(html.contains("2026-03-04 05:06:07"));
        assert!(html.contains(r#"action="/tasks/3/delete""#));
        assert!(html.contains(r#"href="/tasks/3/edit""#));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render_table(&[task(1, "<script>", "a & b")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn modal_hidden_unless_editing() {
        let mut state = ViewState::default();
        assert_eq!(render_modal(&state), "");

        state.tasks = vec![task(2, "T", "old")];
        state.apply(crate::view::Event::BeginEdit(2));
        let html = render_modal(&state);
        assert!(html.contains("Update Task: T"));
        assert!(html.contains(">old</textarea>"));
        assert!(html.contains(r#"action="/edit/save""#));
        assert!(html.contains(r#"formaction="/edit/cancel""#));
    }

    #[test]
    fn page_seeds_form_from_draft() {
        let state = ViewState {
            draft: NewTask::new("pending \"title\"", "desc"),
            ..Default::default()
        };
        let html = render_page(&state);
        assert!(html.contains(r#"value="pending &quot;title&quot;""#));
        assert!(html.contains(r#"value="desc""#));
        // Both creation inputs stay required; that is the only
        // creation-time validation.
        assert_eq!(html.matches("required>").count(), 2);
        // No tasks and no modal: neither fragment appears.
        assert!(!html.contains("<table>"));
        assert!(!html.contains("modal-backdrop"));
    }

    #[test]
    fn escape_covers_all_specials() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
