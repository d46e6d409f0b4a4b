use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemopadError, Result};
use crate::notebook::Notebook;
use crate::presenter::display_label;
use crate::store::KeyValueStore;

/// Replace the current note's content, as the editor surface would on input.
pub fn run<S: KeyValueStore>(notebook: &mut Notebook<S>, content: &str) -> Result<CmdResult> {
    let id = notebook
        .current_id()
        .map(str::to_string)
        .ok_or_else(|| MemopadError::Api("No note is selected".to_string()))?;

    let updated = notebook.update_content(&id, content)?;

    let mut result = CmdResult::default();
    match notebook.get(&id) {
        Some(note) if updated => {
            result.add_message(CmdMessage::success(format!(
                "Saved: {}",
                display_label(note)
            )));
            result.affected_notes.push(note.clone());
        }
        _ => result.add_message(CmdMessage::info("Nothing saved; selection changed.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn writes_content_into_the_current_note() {
        let mut nb = fixtures::notebook();
        run(&mut nb, "shopping: eggs, milk").unwrap();
        assert_eq!(nb.current().unwrap().content, "shopping: eggs, milk");
    }

    #[test]
    fn keeps_created_at_untouched() {
        let mut nb = fixtures::notebook();
        let created = nb.current().unwrap().created_at;
        run(&mut nb, "body").unwrap();
        assert_eq!(nb.current().unwrap().created_at, created);
    }
}
