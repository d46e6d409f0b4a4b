use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(notebook: &mut Notebook<S>) -> Result<CmdResult> {
    let id = notebook.create()?;

    let mut result = CmdResult::default();
    if let Some(note) = notebook.get(&id).cloned() {
        result.add_message(CmdMessage::success(format!("Created: {}", note.title)));
        result.affected_notes.push(note);
    }
    Ok(result)
}
