use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemopadError, Result};
use crate::notebook::{DeleteOutcome, Notebook};
use crate::presenter::display_label;
use crate::store::KeyValueStore;

/// Delete the current note and report where the selection landed. The last
/// remaining note is protected; the warning is surfaced here.
pub fn run<S: KeyValueStore>(notebook: &mut Notebook<S>) -> Result<CmdResult> {
    let target = notebook
        .current()
        .cloned()
        .ok_or_else(|| MemopadError::Api("No note is selected".to_string()))?;

    let mut result = CmdResult::default();
    match notebook.delete(&target.id)? {
        DeleteOutcome::Deleted => {
            result.add_message(CmdMessage::success(format!(
                "Deleted: {}",
                display_label(&target)
            )));
            if let Some(next) = notebook.current() {
                result.add_message(CmdMessage::info(format!(
                    "Now on: {}",
                    display_label(next)
                )));
                result.affected_notes.push(next.clone());
            }
        }
        DeleteOutcome::LastNoteKept => {
            result.add_message(CmdMessage::warning("The last note cannot be deleted."));
        }
        DeleteOutcome::NotFound => {
            result.add_message(CmdMessage::info("That note no longer exists."));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures;

    #[test]
    fn deletes_the_current_note_and_moves_on() {
        let mut nb = fixtures::notebook_with_notes(2);
        let doomed = nb.current_id().unwrap().to_string();

        run(&mut nb).unwrap();
        assert_eq!(nb.notes().len(), 1);
        assert!(!nb.notes().contains_key(&doomed));
        assert!(nb.current_id().is_some());
    }

    #[test]
    fn warns_when_only_one_note_remains() {
        let mut nb = fixtures::notebook();
        let result = run(&mut nb).unwrap();

        assert_eq!(nb.notes().len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }
}
