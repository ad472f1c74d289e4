use crate::error::CollectionError;
use organiser_core::domain::{EntityId, Record};
use tracing::{debug, warn};

/// Hard ceiling on the number of entries in one collection.
pub const MAX_ENTRIES: usize = 1000;

/// Who is adding. Both modes enforce the same limit; only interactive adds
/// report hitting it, bulk loads raise a truncation flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMode {
    Interactive,
    Import,
}

/// Insertion-ordered, id-unique, bounded set of entities.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    entries: Vec<T>,
    selected: Option<EntityId>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ENTRIES
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn add(&mut self, entity: T, mode: AddMode) -> Result<(), CollectionError> {
        let id = entity.id();
        if !id.is_well_formed() {
            return Err(CollectionError::InvalidId(id.to_string()));
        }
        if self.find_index(id).is_some() {
            return Err(CollectionError::DuplicateId(id.to_string()));
        }
        if self.is_full() {
            match mode {
                AddMode::Interactive => warn!(
                    entity = T::ENTITY,
                    limit = MAX_ENTRIES,
                    "collection is full, entry not added"
                ),
                AddMode::Import => debug!(entity = T::ENTITY, id = %id, "limit reached"),
            }
            return Err(CollectionError::LimitReached(MAX_ENTRIES));
        }
        self.entries.push(entity);
        Ok(())
    }

    pub fn find_index(&self, id: &EntityId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_by_id(&self, id: &EntityId) -> Option<&T> {
        self.find_index(id).and_then(|index| self.get(index))
    }

    /// Replaces the entry at `index` in place; every other entry keeps its
    /// position.
    pub fn edit(&mut self, index: usize, entity: T) -> Result<(), CollectionError> {
        if index >= self.entries.len() {
            return Err(CollectionError::NotFound(format!("index {index}")));
        }
        let id = entity.id();
        if !id.is_well_formed() {
            return Err(CollectionError::InvalidId(id.to_string()));
        }
        if let Some(existing) = self.find_index(id) {
            if existing != index {
                return Err(CollectionError::DuplicateId(id.to_string()));
            }
        }

        let previous = self.entries[index].id().clone();
        if self.selected.as_ref() == Some(&previous) {
            self.selected = Some(id.clone());
        }
        self.entries[index] = entity;
        Ok(())
    }

    pub fn edit_by_id(&mut self, id: &EntityId, entity: T) -> Result<(), CollectionError> {
        let index = self
            .find_index(id)
            .ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
        self.edit(index, entity)
    }

    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.entries.len() {
            return Err(CollectionError::NotFound(format!("index {index}")));
        }
        let removed = self.entries.remove(index);
        if self.selected.as_ref() == Some(removed.id()) {
            self.selected = None;
        }
        Ok(removed)
    }

    pub fn remove_by_id(&mut self, id: &EntityId) -> Result<T, CollectionError> {
        let index = self
            .find_index(id)
            .ok_or_else(|| CollectionError::NotFound(id.to_string()))?;
        self.remove(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
    }

    /// Moves the cursor to `id`. Unknown ids leave the cursor untouched.
    pub fn select(&mut self, id: &EntityId) -> bool {
        if self.find_index(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref().and_then(|id| self.get_by_id(id))
    }

    /// A new collection holding clones of the matching entries, in order.
    pub fn filtered<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| predicate(entry))
                .cloned()
                .collect(),
            selected: None,
        }
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
