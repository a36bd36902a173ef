//! Plain-text rendering of the client state.

use std::fmt::Write;

use blog_core::domain::PostDraft;

use crate::state::ClientState;

/// Render the whole screen: header, error alert, forms, then one card per post.
///
/// Cards are numbered from 1 so a terminal user can refer to them.
pub fn render(state: &ClientState) -> String {
    let mut out = String::new();

    out.push_str("==== My Blog ====\n");
    if let Some(error) = &state.error {
        let _ = writeln!(out, "[error] {error}");
    }

    out.push_str("\n-- Enter Your Blog --\n");
    render_form(&mut out, &state.new_post);

    if let Some(editing) = &state.editing {
        out.push_str("\n-- Editing --\n");
        render_form(&mut out, &editing.draft);
    }

    out.push('\n');
    if state.posts.is_empty() {
        out.push_str("(no posts)\n");
    }
    for (n, post) in state.posts.iter().enumerate() {
        let marker = match &state.editing {
            Some(e) if e.id == post.id => " *",
            _ => "",
        };
        let _ = writeln!(out, "[{}]{} {}", n + 1, marker, post.title);
        for line in post.content.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }

    out
}

fn render_form(out: &mut String, draft: &PostDraft) {
    let _ = writeln!(out, "Title:   {}", draft.title);
    let _ = writeln!(out, "Content: {}", draft.content);
}

#[cfg(test)]
mod tests {
    use blog_core::domain::Post;

    use super::*;
    use crate::state::EditState;

    #[test]
    fn empty_state_shows_forms_and_placeholder() {
        let screen = render(&ClientState::default());
        assert!(screen.starts_with("==== My Blog ===="));
        assert!(screen.contains("Enter Your Blog"));
        assert!(screen.contains("(no posts)"));
        assert!(!screen.contains("Editing"));
        assert!(!screen.contains("[error]"));
    }

    #[test]
    fn cards_error_and_edit_marker_are_rendered() {
        let first = Post::new("A".to_string(), "line one\nline two".to_string());
        let second = Post::new("C".to_string(), "D".to_string());
        let state = ClientState {
            editing: Some(EditState {
                id: second.id,
                draft: PostDraft::from(&second),
            }),
            posts: vec![first, second],
            error: Some("boom".to_string()),
            ..Default::default()
        };

        let screen = render(&state);
        assert!(screen.contains("[error] boom"));
        assert!(screen.contains("-- Editing --"));
        assert!(screen.contains("[1] A\n    line one\n    line two\n"));
        assert!(screen.contains("[2] * C\n    D\n"));
    }
}
