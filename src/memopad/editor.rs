use crate::error::{MemopadError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// A note as it appears in an editor buffer.
/// Format: title on the first line, a blank separator, then the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    /// Formats the note for the editor buffer.
    pub fn to_buffer(&self) -> String {
        if self.content.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.content)
        }
    }

    /// Parses an editor buffer back: first line is the title, an optional
    /// blank separator is skipped, the rest is content. A single trailing
    /// newline (most editors append one) is dropped.
    pub fn from_buffer(buffer: &str) -> Self {
        let (title, rest) = match buffer.split_once('\n') {
            Some((title, rest)) => (title.to_string(), rest),
            None => (buffer.to_string(), ""),
        };
        let rest = rest.strip_prefix('\n').unwrap_or(rest);
        let content = rest.strip_suffix('\n').unwrap_or(rest).to_string();
        Self { title, content }
    }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(MemopadError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| MemopadError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(MemopadError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(MemopadError::Io)
}

/// Opens an editor seeded with the note and returns the edited note.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join("memopad_edit.txt");

    fs::write(&temp_file, initial.to_buffer()).map_err(MemopadError::Io)?;

    let result = open_in_editor(&temp_file)?;

    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_buffer_with_content() {
        let ec = EditorContent::new("My Title".to_string(), "Some content here.".to_string());
        assert_eq!(ec.to_buffer(), "My Title\n\nSome content here.");
    }

    #[test]
    fn test_to_buffer_empty_content() {
        let ec = EditorContent::new("My Title".to_string(), String::new());
        assert_eq!(ec.to_buffer(), "My Title\n\n");
    }

    #[test]
    fn test_from_buffer_normal() {
        let ec = EditorContent::from_buffer("My Title\n\nThis is content.\nMore content.");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "This is content.\nMore content.");
    }

    #[test]
    fn test_from_buffer_empty_content() {
        let ec = EditorContent::from_buffer("My Title\n\n");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "");
    }

    #[test]
    fn test_from_buffer_title_only() {
        let ec = EditorContent::from_buffer("My Title");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "");
    }

    #[test]
    fn test_from_buffer_no_blank_separator() {
        let ec = EditorContent::from_buffer("Title\nContent without blank");
        assert_eq!(ec.title, "Title");
        assert_eq!(ec.content, "Content without blank");
    }

    #[test]
    fn test_from_buffer_drops_single_trailing_newline() {
        let ec = EditorContent::from_buffer("Title\n\nbody\n");
        assert_eq!(ec.content, "body");
    }

    #[test]
    fn test_roundtrip() {
        let original = EditorContent::new(
            "Test Title".to_string(),
            "Test content\nwith lines".to_string(),
        );
        let parsed = EditorContent::from_buffer(&original.to_buffer());
        assert_eq!(original, parsed);
    }
}
