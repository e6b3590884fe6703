// src/application/note_book.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use tracing::{debug, info, instrument};

/// The note list held in memory, written back in full after every change.
///
/// Notes are addressed by position. Removing a note shifts every later note
/// down by one, so an index taken before a removal may point at a different
/// note afterwards.
pub struct NoteBook<R: NoteRepository> {
    repository: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteBook<R> {
    pub fn open(mut repository: R) -> Self {
        let notes = repository.load_notes();
        debug!(count = notes.len(), "Loaded notes");
        Self { repository, notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Notes of the note type, with their store index, optionally narrowed to
    /// those whose title or body contains `search`.
    pub fn list_notes<'a>(
        &'a self,
        search: Option<&'a str>,
    ) -> impl Iterator<Item = (usize, &'a Note)> + 'a {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.is_note())
            .filter(move |(_, note)| search.map_or(true, |query| note.matches(query)))
    }

    #[instrument(level = "debug", skip(self, note))]
    pub fn append(&mut self, note: Note) -> Result<usize, DomainError> {
        self.notes.push(note);
        self.persist()?;
        let index = self.notes.len() - 1;
        info!(index, "Created note");
        Ok(index)
    }

    #[instrument(level = "debug", skip(self, note))]
    pub fn replace(&mut self, index: usize, note: Note) -> Result<(), DomainError> {
        let slot = self
            .notes
            .get_mut(index)
            .ok_or(DomainError::NoteNotFound(index))?;
        *slot = note;
        self.persist()?;
        info!(index, "Updated note");
        Ok(())
    }

    /// Remove the note at `index` and return it.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, index: usize) -> Result<Note, DomainError> {
        if index >= self.notes.len() {
            debug!(index, len = self.notes.len(), "Delete index out of range");
            return Err(DomainError::NoteNotFound(index));
        }
        let removed = self.notes.remove(index);
        self.persist()?;
        info!(index, "Deleted note");
        Ok(removed)
    }

    fn persist(&mut self) -> Result<(), DomainError> {
        self.repository.save_notes(&self.notes)
    }
}
