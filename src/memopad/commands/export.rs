use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemopadError, Result};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;
use std::fs;
use std::path::Path;

pub const EXPORT_FILE_NAME: &str = "notes-export.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// The export artifact: the whole collection, pretty-printed, ready to be
/// offered to the user as a download.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Serialize the full collection. Pure read: selection and store are
/// untouched, and every note is included regardless of what is current.
pub fn document<S: KeyValueStore>(notebook: &Notebook<S>) -> Result<ExportDocument> {
    let contents =
        serde_json::to_string_pretty(notebook.notes()).map_err(MemopadError::Serialization)?;
    Ok(ExportDocument {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        contents,
    })
}

/// Write the export document into `dir`.
pub fn run<S: KeyValueStore>(notebook: &Notebook<S>, dir: &Path) -> Result<CmdResult> {
    let doc = document(notebook)?;
    let path = dir.join(doc.file_name);
    fs::write(&path, &doc.contents).map_err(MemopadError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} notes to {}",
        notebook.notes().len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Collection;
    use crate::store::memory::fixtures;

    #[test]
    fn document_parses_back_to_the_live_collection() {
        let mut nb = fixtures::notebook_with_notes(3);
        let id = nb.current_id().unwrap().to_string();
        nb.update_content(&id, "exported body").unwrap();

        let doc = document(&nb).unwrap();
        let parsed: Collection = serde_json::from_str(&doc.contents).unwrap();
        assert_eq!(&parsed, nb.notes());
    }

    #[test]
    fn document_is_pretty_printed() {
        let nb = fixtures::notebook();
        let doc = document(&nb).unwrap();
        assert!(doc.contents.contains("\n  "));
        assert_eq!(doc.mime_type, "application/json");
        assert_eq!(doc.file_name, "notes-export.json");
    }

    #[test]
    fn document_includes_unselected_notes() {
        let nb = fixtures::notebook_with_notes(4);
        let doc = document(&nb).unwrap();
        let parsed: Collection = serde_json::from_str(&doc.contents).unwrap();
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn run_writes_the_file() {
        let nb = fixtures::notebook();
        let dir = tempfile::tempdir().unwrap();

        let result = run(&nb, dir.path()).unwrap();
        let path = result.export_path.unwrap();
        assert!(path.ends_with("notes-export.json"));
        assert!(path.exists());
    }
}
