use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::presenter::display_label;
use crate::store::KeyValueStore;

/// Switch the current note. A stale id (note deleted under the view) is a
/// benign no-op, not an error.
pub fn run<S: KeyValueStore>(notebook: &mut Notebook<S>, id: &str) -> Result<CmdResult> {
    let selected = notebook.select(id);

    let mut result = CmdResult::default();
    match notebook.current() {
        Some(note) if selected => {
            result.add_message(CmdMessage::success(format!(
                "Switched to: {}",
                display_label(note)
            )));
            result.affected_notes.push(note.clone());
        }
        _ => result.add_message(CmdMessage::info(
            "That note no longer exists; selection unchanged.",
        )),
    }

    Ok(result)
}
