use crate::config::TitlePolicy;
use crate::error::{MemopadError, Result};
use crate::model::{ordered, timestamp_title, Collection, Note};
use crate::store::KeyValueStore;
use chrono::{Local, Utc};

/// Fixed key the whole collection is persisted under.
pub const STORAGE_KEY: &str = "memo-data";

/// What `delete` did. The last remaining note is protected; callers surface
/// the warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    LastNoteKept,
    NotFound,
}

/// The note collection and its selection, bound to a storage backend.
///
/// Invariants held between public calls:
/// - the collection is never empty,
/// - `current` always names a key of the collection,
/// - every mutation rewrites the persisted snapshot before returning.
pub struct Notebook<S: KeyValueStore> {
    store: S,
    notes: Collection,
    current: Option<String>,
    title_policy: TitlePolicy,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Hydrate from the persisted snapshot, or seed a fresh collection with
    /// one note when the snapshot is missing, unparsable, or empty.
    ///
    /// Hydration is also the migration point: legacy records without a title
    /// get one derived from their own `createdAt`, embedded ids are
    /// normalized to the map key, and a migrated snapshot is written back.
    pub fn load(store: S, title_policy: TitlePolicy) -> Result<Self> {
        let mut notebook = Self {
            store,
            notes: Collection::new(),
            current: None,
            title_policy,
        };

        let hydrated = notebook
            .store
            .read(STORAGE_KEY)?
            .and_then(|blob| serde_json::from_str::<Collection>(&blob).ok());

        match hydrated {
            Some(notes) if !notes.is_empty() => {
                notebook.notes = notes;
                let migrated = notebook.migrate();
                notebook.current = notebook.first_id();
                if migrated {
                    notebook.persist()?;
                }
            }
            _ => {
                notebook.create()?;
            }
        }

        Ok(notebook)
    }

    /// Create a note titled per the active policy, make it current, persist.
    /// Returns the new id.
    pub fn create(&mut self) -> Result<String> {
        let id = self.next_id();
        let note = Note::new(id.clone(), self.default_title());
        self.notes.insert(id.clone(), note);
        self.current = Some(id.clone());
        self.persist()?;
        Ok(id)
    }

    /// Replace the content of the *current* note. Returns false without
    /// touching anything when `id` is not the current note — stale editor
    /// events referencing a switched-away or deleted note are benign.
    pub fn update_content(&mut self, id: &str, content: &str) -> Result<bool> {
        if self.current.as_deref() != Some(id) {
            return Ok(false);
        }
        let Some(note) = self.notes.get_mut(id) else {
            return Ok(false);
        };
        note.content = content.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Retitle a note. A blank title gets the timestamp default instead of
    /// being stored empty. Returns false for ids no longer in the collection.
    pub fn rename(&mut self, id: &str, title: &str) -> Result<bool> {
        let Some(note) = self.notes.get_mut(id) else {
            return Ok(false);
        };
        note.title = if title.trim().is_empty() {
            timestamp_title(Local::now())
        } else {
            title.to_string()
        };
        self.persist()?;
        Ok(true)
    }

    /// Make `id` the current note. Returns false (selection unchanged) for
    /// ids not in the collection.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.notes.contains_key(id) {
            return false;
        }
        self.current = Some(id.to_string());
        true
    }

    /// Remove a note. The last remaining note is never removed. When the
    /// removed note was current, selection moves to the first note in
    /// display order.
    pub fn delete(&mut self, id: &str) -> Result<DeleteOutcome> {
        if !self.notes.contains_key(id) {
            return Ok(DeleteOutcome::NotFound);
        }
        if self.notes.len() == 1 {
            return Ok(DeleteOutcome::LastNoteKept);
        }

        let was_current = self.current.as_deref() == Some(id);
        self.notes.remove(id);
        if was_current {
            self.current = self.first_id();
        }
        self.persist()?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Drop every note and reseed with a single fresh one, which becomes
    /// current. The collection is non-empty again before this returns.
    /// Confirmation is the caller's responsibility.
    pub fn clear(&mut self) -> Result<String> {
        self.notes.clear();
        self.current = None;
        self.create()
    }

    pub fn notes(&self) -> &Collection {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&Note> {
        self.current.as_deref().and_then(|id| self.notes.get(id))
    }

    /// Tear down the notebook and hand back the storage backend.
    pub fn into_store(self) -> S {
        self.store
    }

    fn first_id(&self) -> Option<String> {
        ordered(&self.notes).first().map(|note| note.id.clone())
    }

    fn persist(&mut self) -> Result<()> {
        let blob =
            serde_json::to_string_pretty(&self.notes).map_err(MemopadError::Serialization)?;
        self.store.write(STORAGE_KEY, &blob)
    }

    /// Epoch millis as a decimal string, bumped past occupied ids so a burst
    /// of creations inside one millisecond still mints distinct ids.
    fn next_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        while self.notes.contains_key(&millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }

    fn default_title(&self) -> String {
        match self.title_policy {
            TitlePolicy::Sequential => {
                // Pre-insert size + 1, bumped past titles that already exist
                // so deletions cannot mint a duplicate "Note {n}".
                let mut n = self.notes.len() + 1;
                loop {
                    let candidate = format!("Note {}", n);
                    if !self.notes.values().any(|note| note.title == candidate) {
                        return candidate;
                    }
                    n += 1;
                }
            }
            TitlePolicy::Timestamp => timestamp_title(Local::now()),
        }
    }

    fn migrate(&mut self) -> bool {
        let mut changed = false;
        for (id, note) in self.notes.iter_mut() {
            if note.id != *id {
                note.id = id.clone();
                changed = true;
            }
            if note.title.is_empty() {
                note.title = timestamp_title(note.created_at.with_timezone(&Local));
                changed = true;
            }
        }
        changed
    }
}
