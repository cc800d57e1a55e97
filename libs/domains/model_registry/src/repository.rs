use std::collections::BTreeMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ModelRegistryResult;
use crate::models::LlmModelRef;

/// Boundary to the external model-configuration store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelRegistryRepository: Send + Sync {
    /// All models configured for a team, in stored order.
    async fn list_models(&self, team_id: Uuid) -> ModelRegistryResult<Vec<LlmModelRef>>;

    /// Persist a batched id → priority patch.
    async fn save_priorities(
        &self,
        team_id: Uuid,
        priorities: BTreeMap<Uuid, u32>,
    ) -> ModelRegistryResult<()>;
}
