//! Priority ordering over a team's configured model list.
//!
//! Invariant after any reorder operation: the priorities across the list are
//! exactly 1..N, no gaps, no duplicates. The invariant is enforced by always
//! renumbering the whole list from its current order instead of adjusting
//! individual priorities in place.

use std::collections::{BTreeMap, HashSet};

use uuid::Uuid;

use crate::error::{ModelRegistryError, ModelRegistryResult};
use crate::models::LlmModelRef;

/// True when the stored ranking is inconsistent: a missing priority, or the
/// same priority on two models.
pub fn needs_repair(models: &[LlmModelRef]) -> bool {
    let mut seen = HashSet::with_capacity(models.len());
    models.iter().any(|model| match model.priority {
        None => true,
        Some(priority) => !seen.insert(priority),
    })
}

/// In-memory working copy of a team's model list, sorted by priority.
///
/// All effects are provisional until the patch from [`commit`] is persisted;
/// the caller can discard the reorderer to abandon its edits.
///
/// [`commit`]: PriorityReorderer::commit
#[derive(Debug, Clone)]
pub struct PriorityReorderer {
    models: Vec<LlmModelRef>,
}

impl PriorityReorderer {
    /// Sort the list priority-ascending. Unranked models go last, ties keep
    /// their stored order (the sort is stable).
    pub fn new(mut models: Vec<LlmModelRef>) -> Self {
        models.sort_by_key(|m| (m.priority.is_none(), m.priority));
        Self { models }
    }

    /// Current view, sorted by priority.
    pub fn models(&self) -> &[LlmModelRef] {
        &self.models
    }

    pub fn needs_repair(&self) -> bool {
        needs_repair(&self.models)
    }

    /// Move a model one position toward priority 1. No-op at the top.
    ///
    /// Returns whether the list changed.
    pub fn move_up(&mut self, id: Uuid) -> ModelRegistryResult<bool> {
        let position = self.position_of(id)?;
        if position == 0 {
            return Ok(false);
        }
        self.models.swap(position, position - 1);
        self.renumber();
        Ok(true)
    }

    /// Move a model one position away from priority 1. No-op at the bottom.
    pub fn move_down(&mut self, id: Uuid) -> ModelRegistryResult<bool> {
        let position = self.position_of(id)?;
        if position + 1 == self.models.len() {
            return Ok(false);
        }
        self.models.swap(position, position + 1);
        self.renumber();
        Ok(true)
    }

    /// Rebuild a consistent 1..N ranking from the current order.
    pub fn auto_repair(&mut self) {
        self.renumber();
    }

    /// Patch for the external persistence call: id → priority for every
    /// ranked model. Run a move or [`auto_repair`] first so the whole list
    /// is ranked.
    ///
    /// [`auto_repair`]: PriorityReorderer::auto_repair
    pub fn commit(&self) -> BTreeMap<Uuid, u32> {
        self.models
            .iter()
            .filter_map(|m| m.priority.map(|p| (m.id, p)))
            .collect()
    }

    fn position_of(&self, id: Uuid) -> ModelRegistryResult<usize> {
        self.models
            .iter()
            .position(|m| m.id == id)
            .ok_or(ModelRegistryError::ModelNotFound(id))
    }

    fn renumber(&mut self) {
        for (index, model) in self.models.iter_mut().enumerate() {
            model.priority = Some(index as u32 + 1);
        }
    }
}
