//! In-memory record store of one screen with its CRUD mutators.

use super::error::TableError;
use contracts::shared::table::{Numbering, RecordForm, RecordId, TableRecord};
use std::collections::HashSet;

/// Result of the first delete step; the confirmation dialog shows `summary`.
///
/// Only [`RecordStore::request_delete`] creates one and confirming consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a deletion only happens once it is confirmed"]
pub struct PendingDeletion<Id> {
    id: Id,
    summary: Option<String>,
    generation: u64,
}

impl<Id: RecordId> PendingDeletion<Id> {
    pub fn id(&self) -> Id {
        self.id
    }

    /// `None` when nothing matches the identity; confirming is then a no-op
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn target_exists(&self) -> bool {
        self.summary.is_some()
    }
}

/// Insertion-ordered records with unique identities
#[derive(Debug, Clone)]
pub struct RecordStore<R: TableRecord> {
    records: Vec<R>,
    /// Bumped on every mutation
    generation: u64,
}

impl<R: TableRecord> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
        }
    }
}

impl<R: TableRecord> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Sequentially numbered screens are renumbered 1..n, so
    /// only stable identities are checked for duplicates.
    pub fn from_records(records: Vec<R>) -> Result<Self, TableError> {
        let mut store = Self {
            records,
            generation: 0,
        };
        if matches!(R::numbering(), Numbering::Sequential { .. }) {
            store.renumber();
            return Ok(store);
        }

        let mut seen = HashSet::with_capacity(store.records.len());
        for record in &store.records {
            if !seen.insert(record.id()) {
                return Err(TableError::DuplicateId(record.id().as_string()));
            }
        }
        Ok(store)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.get(id).is_some()
    }

    /// `max(existing) + 1`, or the first identity of an empty store
    pub fn next_id(&self) -> R::Id {
        self.records
            .iter()
            .map(|r| r.id())
            .max()
            .map_or_else(R::Id::first, |max| max.next())
    }

    /// Validate the form, then insert the record it builds
    pub fn add<F: RecordForm<R>>(&mut self, form: F) -> Result<R::Id, TableError> {
        form.validate().map_err(TableError::Validation)?;
        Ok(self.insert_with(|id| form.into_record(id)))
    }

    /// Insert a record built around the identity the store assigns
    pub fn insert_with(&mut self, build: impl FnOnce(R::Id) -> R) -> R::Id {
        let id = match R::numbering() {
            Numbering::Stable => {
                let id = self.next_id();
                let mut record = build(id);
                record.set_id(id);
                self.records.push(record);
                id
            }
            Numbering::Sequential { prepend } => {
                let position = if prepend { 0 } else { self.records.len() };
                let id = R::Id::from_position(position + 1);
                self.records.insert(position, build(id));
                self.renumber();
                id
            }
        };
        self.generation += 1;
        tracing::debug!("Inserted record {} ({} total)", id.as_string(), self.records.len());
        id
    }

    /// Merge the form into the record with `id`. A missing identity is a
    /// no-op returning `Ok(false)`.
    pub fn update<F: RecordForm<R>>(&mut self, id: R::Id, form: F) -> Result<bool, TableError> {
        form.validate().map_err(TableError::Validation)?;

        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!("Update skipped, no record {}", id.as_string());
            return Ok(false);
        };
        form.apply_to(record);
        record.set_id(id);
        self.generation += 1;
        Ok(true)
    }

    /// First step of a delete: snapshot what the confirmation dialog shows
    pub fn request_delete(&self, id: R::Id) -> PendingDeletion<R::Id> {
        PendingDeletion {
            id,
            summary: self.get(id).map(|r| r.summary()),
            generation: self.generation,
        }
    }

    /// Second step: remove the record. Missing identities are a no-op.
    ///
    /// Confirmations issued before the store's last mutation are ignored:
    /// positional numbers shift on insert and delete, and a stable `max + 1`
    /// id is reused once the highest record is gone, so the identity may now
    /// name a different record than the dialog showed.
    pub fn confirm_delete(&mut self, pending: PendingDeletion<R::Id>) -> Option<R> {
        if pending.generation != self.generation {
            tracing::warn!(
                "Stale delete confirmation for no {} ignored",
                pending.id.as_string()
            );
            return None;
        }
        let sequential = matches!(R::numbering(), Numbering::Sequential { .. });

        let position = self.records.iter().position(|r| r.id() == pending.id)?;
        let removed = self.records.remove(position);
        if sequential {
            self.renumber();
        }
        self.generation += 1;
        tracing::debug!("Deleted record {}", pending.id.as_string());
        Some(removed)
    }

    /// Dismiss the confirmation dialog
    pub fn cancel_delete(&self, pending: PendingDeletion<R::Id>) {
        tracing::debug!("Delete of {} cancelled", pending.id.as_string());
    }

    fn renumber(&mut self) {
        for (index, record) in self.records.iter_mut().enumerate() {
            record.set_id(R::Id::from_position(index + 1));
        }
    }
}
