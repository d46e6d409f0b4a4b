use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemopadError, Result};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;
use std::io::{self, Write};

/// Drop every note after an explicit confirmation, then reseed. Declining
/// leaves the collection untouched.
pub fn run<S: KeyValueStore>(notebook: &mut Notebook<S>, skip_confirm: bool) -> Result<CmdResult> {
    if !skip_confirm {
        print!(
            "This will permanently remove all {} notes. [Y] to clear: ",
            notebook.notes().len()
        );
        io::stdout().flush().map_err(MemopadError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(MemopadError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    let seeded = notebook.clear()?;

    let mut result = CmdResult::default();
    if let Some(note) = notebook.get(&seeded).cloned() {
        result.add_message(CmdMessage::success(format!(
            "All notes cleared. Started fresh with: {}",
            note.title
        )));
        result.affected_notes.push(note);
    }
    Ok(result)
}
