use crate::commands::CmdResult;
use crate::error::{MemopadError, Result};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

/// The read side of the editor surface: hand the current note to the view.
pub fn run<S: KeyValueStore>(notebook: &Notebook<S>) -> Result<CmdResult> {
    let note = notebook
        .current()
        .cloned()
        .ok_or_else(|| MemopadError::Api("No note is selected".to_string()))?;
    Ok(CmdResult::default().with_affected_notes(vec![note]))
}
