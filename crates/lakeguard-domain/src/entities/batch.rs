//! Discovery batches
//!
//! Discovery hands entities over as an explicit batch value; there is no
//! process-wide collection of discovered tables.

use crate::entities::Entity;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;

/// An ordered batch of entities with unique qualified names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityBatch {
    entities: Vec<Entity>,
}

impl EntityBatch {
    /// Build a batch, rejecting repeated qualified names
    ///
    /// Entities with incomplete names are kept; they are rejected individually
    /// during evaluation rather than failing the whole batch.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in entities.iter().filter(|e| e.name.is_complete()) {
            if !seen.insert(&entity.name) {
                return Err(Error::DuplicateEntity {
                    name: entity.name.to_string(),
                });
            }
        }
        Ok(Self { entities })
    }

    /// Entities in discovery order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterate over entities
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Take ownership of the entities
    pub fn into_inner(self) -> Vec<Entity> {
        self.entities
    }
}

impl<'a> IntoIterator for &'a EntityBatch {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
