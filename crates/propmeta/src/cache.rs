//! Caller-owned cache of extraction results.
//!
//! Extraction is cheap and pure, so nothing in the crate caches on its own.
//! An inspector that re-renders often can keep a [`MetadataCache`] next to
//! its widgets. Entries are keyed by [`PropertyId`]; if a property's
//! annotations change, the owner calls [`MetadataCache::invalidate`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{PropmetaError, Result};
use crate::metadata::{Extractor, MetadataRecord};
use crate::reflect::{PropertyId, PropertyRef};

#[derive(Debug, Default)]
pub struct MetadataCache {
    extractor: Extractor,
    entries: HashMap<PropertyId, MetadataRecord>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose misses are filled by `extractor`.
    pub fn with_extractor(extractor: Extractor) -> Self {
        Self {
            extractor,
            entries: HashMap::new(),
        }
    }

    /// Cached record for `property`, extracting it on first access.
    pub fn get_or_extract(&mut self, property: PropertyRef<'_>) -> Result<&MetadataRecord> {
        let info = property.get().ok_or(PropmetaError::NullProperty)?;

        match self.entries.entry(info.id().clone()) {
            Entry::Occupied(entry) => {
                tracing::debug!(property = %info.id(), "metadata cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                tracing::debug!(property = %info.id(), "metadata cache miss");
                let record = self.extractor.try_extract(property)?;
                Ok(entry.insert(record))
            }
        }
    }

    /// Drop the cached record for `id`. Returns whether one was present.
    pub fn invalidate(&mut self, id: &PropertyId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
