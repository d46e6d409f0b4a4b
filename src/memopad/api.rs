//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer — the single
//! entry point for every memopad operation, whichever UI is driving it.
//!
//! It dispatches to command functions, normalizes inputs (list positions →
//! note ids), and returns structured `Result<CmdResult>` values. Business
//! logic lives in `commands/*.rs`; presentation lives with the caller.

use crate::commands;
use crate::config::TitlePolicy;
use crate::error::Result;
use crate::notebook::Notebook;
use crate::presenter;
use crate::store::KeyValueStore;
use std::path::Path;

/// The main API facade for memopad operations.
///
/// Generic over `KeyValueStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct MemopadApi<S: KeyValueStore> {
    notebook: Notebook<S>,
}

impl<S: KeyValueStore> MemopadApi<S> {
    /// Load (or seed) the notebook from the given store.
    pub fn open(store: S, title_policy: TitlePolicy) -> Result<Self> {
        Ok(Self {
            notebook: Notebook::load(store, title_policy)?,
        })
    }

    pub fn create(&mut self) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.notebook)
    }

    pub fn write(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::write::run(&mut self.notebook, content)
    }

    pub fn rename(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.notebook, title)
    }

    pub fn select(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let id = self.resolve_selector(selector);
        commands::select::run(&mut self.notebook, &id)
    }

    pub fn delete(&mut self) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.notebook)
    }

    pub fn clear(&mut self, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.notebook, skip_confirm)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.notebook)
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.notebook)
    }

    pub fn export(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.notebook, dir)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.notebook.current_id()
    }

    /// Quietly re-apply a remembered selection. Stale ids are ignored and
    /// the load-time default (first note) stays in place.
    pub fn restore_selection(&mut self, id: &str) -> bool {
        self.notebook.select(id)
    }

    /// Resolve user input to a note id: a 1-based list position when it
    /// parses as one and is in range, otherwise the input is taken to be an
    /// id already.
    fn resolve_selector(&self, input: &str) -> String {
        if let Ok(position) = input.parse::<usize>() {
            let entries = presenter::view_model(&self.notebook);
            if position >= 1 && position <= entries.len() {
                return entries[position - 1].id.clone();
            }
        }
        input.to_string()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
