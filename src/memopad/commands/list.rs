use crate::commands::CmdResult;
use crate::error::Result;
use crate::notebook::Notebook;
use crate::presenter;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(notebook: &Notebook<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(presenter::view_model(notebook)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn lists_every_note_once() {
        let nb = fixtures::notebook_with_notes(3);
        let result = run(&nb).unwrap();
        assert_eq!(result.listed_entries.len(), 3);
    }

    #[test]
    fn marks_the_current_note_active() {
        let nb = fixtures::notebook_with_notes(2);
        let result = run(&nb).unwrap();
        let active: Vec<_> = result.listed_entries.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, nb.current_id().unwrap());
    }
}
