//! Docshelf Catalog — in-memory ordered store of document metadata records.
//!
//! Process-lifetime state: empty at startup, discarded at exit. Iteration
//! order is insertion order. Append and remove take the write lock, so they
//! are atomic with respect to each other; a concurrent list may or may not
//! observe an in-flight append.

use docshelf_core::DocumentRecord;
use parking_lot::RwLock;

/// Ordered collection of document records. Injected into the server state,
/// not ambient global state, so a persistence-backed store could replace it
/// without touching the pipeline.
#[derive(Default)]
pub struct Catalog {
    records: RwLock<Vec<DocumentRecord>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the end. Never fails, never deduplicates; id
    /// uniqueness is the caller's responsibility since the caller mints it.
    pub fn append(&self, record: DocumentRecord) {
        self.records.write().push(record);
    }

    /// The full collection in insertion order.
    pub fn list(&self) -> Vec<DocumentRecord> {
        self.records.read().clone()
    }

    /// Remove every record with a matching id. A silent no-op when nothing
    /// matches.
    pub fn remove_by_id(&self, id: &str) {
        self.records.write().retain(|r| r.id != id);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
