use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemopadError, Result};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

/// Retitle the current note. Blank titles are replaced by the timestamp
/// default inside the notebook.
pub fn run<S: KeyValueStore>(notebook: &mut Notebook<S>, title: &str) -> Result<CmdResult> {
    let id = notebook
        .current_id()
        .map(str::to_string)
        .ok_or_else(|| MemopadError::Api("No note is selected".to_string()))?;

    let renamed = notebook.rename(&id, title)?;

    let mut result = CmdResult::default();
    match notebook.get(&id) {
        Some(note) if renamed => {
            result.add_message(CmdMessage::success(format!("Renamed to: {}", note.title)));
            result.affected_notes.push(note.clone());
        }
        _ => result.add_message(CmdMessage::info("That note no longer exists.")),
    }
    Ok(result)
}
