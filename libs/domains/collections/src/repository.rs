use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CollectionResult;
use crate::models::{CreateCollectionRequest, MetadataPatch};

/// Boundary to the external collection-management service.
///
/// Implementations own transport, authentication, and retries; this crate
/// only shapes the requests and validates them up front.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Submit a fully validated collection for creation.
    async fn create_collection(&self, request: CreateCollectionRequest) -> CollectionResult<()>;

    /// Apply a partial metadata write. Never a full-map replacement.
    async fn patch_metadata(&self, patch: MetadataPatch) -> CollectionResult<()>;

    /// Drop a single property key (used when a custom key is renamed).
    async fn drop_property(
        &self,
        team_id: Uuid,
        collection_name: &str,
        key: &str,
    ) -> CollectionResult<()>;

    /// Stored property map of one collection.
    async fn get_properties(
        &self,
        team_id: Uuid,
        collection_name: &str,
    ) -> CollectionResult<BTreeMap<String, String>>;

    /// Names already taken within a team, for uniqueness checks.
    async fn list_collection_names(&self, team_id: Uuid) -> CollectionResult<HashSet<String>>;
}
