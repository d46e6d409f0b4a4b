//! Derives the list view model from the notebook.
//!
//! The view model is recomputed from scratch after every mutation; nothing
//! here caches or patches incrementally. Rendering is someone else's job.

use crate::model::{ordered, Note};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};

/// Label shown for a note with no title and no content.
pub const UNTITLED_LABEL: &str = "untitled";

/// Labels derived from content are cut at this many characters.
pub const LABEL_MAX_CHARS: usize = 30;

const LABEL_ELLIPSIS: char = '…';

/// One selectable row of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

/// The full list view model, in display order. Exactly one entry is active
/// as long as the notebook upholds its selection invariant.
pub fn view_model<S: KeyValueStore>(notebook: &Notebook<S>) -> Vec<ListEntry> {
    ordered(notebook.notes())
        .into_iter()
        .map(|note| ListEntry {
            id: note.id.clone(),
            label: display_label(note),
            created_at: note.created_at,
            active: notebook.current_id() == Some(note.id.as_str()),
        })
        .collect()
}

/// The label for one note: the title verbatim when there is one, otherwise
/// derived from the content's first line.
pub fn display_label(note: &Note) -> String {
    if !note.title.is_empty() {
        return note.title.clone();
    }
    content_label(&note.content)
}

fn content_label(content: &str) -> String {
    if content.is_empty() {
        return UNTITLED_LABEL.to_string();
    }

    let first_line = content.split('\n').next().unwrap_or_default();
    if first_line.chars().count() > LABEL_MAX_CHARS {
        let mut label: String = first_line.chars().take(LABEL_MAX_CHARS).collect();
        label.push(LABEL_ELLIPSIS);
        label
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    fn untitled_note(content: &str) -> Note {
        let mut note = Note::new("1722945600000".to_string(), String::new());
        note.content = content.to_string();
        note
    }

    #[test]
    fn explicit_title_wins_over_content() {
        let mut note = untitled_note("First line\nSecond line");
        note.title = "My Title".to_string();
        assert_eq!(display_label(&note), "My Title");
    }

    #[test]
    fn label_is_first_line_of_content() {
        let note = untitled_note("Hello\nWorld");
        assert_eq!(display_label(&note), "Hello");
    }

    #[test]
    fn long_first_line_truncates_to_thirty_chars_plus_ellipsis() {
        let note = untitled_note(&"x".repeat(40));
        let label = display_label(&note);
        assert_eq!(label.chars().count(), LABEL_MAX_CHARS + 1);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn thirty_char_line_is_kept_whole() {
        let note = untitled_note(&"y".repeat(30));
        assert_eq!(display_label(&note), "y".repeat(30));
    }

    #[test]
    fn empty_content_uses_placeholder() {
        let note = untitled_note("");
        assert_eq!(display_label(&note), UNTITLED_LABEL);
    }

    #[test]
    fn view_model_marks_exactly_one_entry_active() {
        let nb = fixtures::notebook_with_notes(3);
        let entries = view_model(&nb);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn view_model_follows_selection() {
        let mut nb = fixtures::notebook_with_notes(3);
        let oldest = view_model(&nb)[0].id.clone();
        nb.select(&oldest);

        let entries = view_model(&nb);
        assert!(entries[0].active);
        assert!(entries[1..].iter().all(|e| !e.active));
    }

    #[test]
    fn view_model_is_in_creation_order() {
        let nb = fixtures::notebook_with_notes(3);
        let entries = view_model(&nb);
        assert!(entries.windows(2).all(|w| {
            (w[0].created_at, w[0].id.as_str()) <= (w[1].created_at, w[1].id.as_str())
        }));
    }
}
