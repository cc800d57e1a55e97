use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::error::{CollectionError, CollectionResult};
use crate::guard::{AliasEdit, MetadataGuard};
use crate::models::{
    CollectionType, CreateCollectionRequest, EmbeddingModelDescriptor, MetadataPatch,
    RawSchemaField,
};
use crate::properties::{self, PropertyEntry, PropertyPatch};
use crate::repository::CollectionRepository;
use crate::schema;

/// Service layer for collection configuration.
///
/// Every mutation validates locally first; the repository is only called
/// with requests that already satisfy the schema and metadata invariants.
#[derive(Clone)]
pub struct CollectionService<R: CollectionRepository> {
    repository: Arc<R>,
}

impl<R: CollectionRepository> CollectionService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a collection from an operator-authored field list.
    pub async fn create_custom_collection(
        &self,
        team_id: Uuid,
        collection_name: &str,
        description: &str,
        raw_fields: &[RawSchemaField],
        extra_properties: BTreeMap<String, String>,
    ) -> CollectionResult<CreateCollectionRequest> {
        let collection_name = collection_name.trim();
        if collection_name.is_empty() {
            return Err(CollectionError::Validation(
                "collection name must not be empty".to_string(),
            ));
        }
        let schema_fields = schema::build_from_user_fields(raw_fields)?;
        self.ensure_name_available(team_id, collection_name).await?;

        let request = CreateCollectionRequest {
            collection_name: collection_name.to_string(),
            description: description.to_string(),
            schema_fields,
            team_id,
            collection_type: CollectionType::Custom,
            properties: extra_properties,
        };
        self.repository.create_collection(request.clone()).await?;
        tracing::info!(
            team_id = %team_id,
            collection = %request.collection_name,
            fields = request.schema_fields.len(),
            "Created custom collection"
        );
        Ok(request)
    }

    /// Create a knowledge-hub collection from an embedding model.
    ///
    /// The schema is the fixed template sized to the model's dimension; the
    /// model identity is recorded in the reserved properties.
    pub async fn create_knowledge_collection(
        &self,
        team_id: Uuid,
        descriptor: &EmbeddingModelDescriptor,
        collection_name: Option<String>,
        description: &str,
    ) -> CollectionResult<CreateCollectionRequest> {
        descriptor
            .validate()
            .map_err(|e| CollectionError::Validation(e.to_string()))?;

        let schema_fields = schema::build_from_embedding_model(descriptor.dimension)?;
        let collection_name = collection_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| schema::suggest_collection_name(team_id, descriptor));
        self.ensure_name_available(team_id, &collection_name).await?;

        let properties = BTreeMap::from([
            ("embedding_model".to_string(), descriptor.model_name.clone()),
            ("embedding_provider".to_string(), descriptor.provider.clone()),
            (
                "embedding_dimension".to_string(),
                descriptor.dimension.to_string(),
            ),
        ]);
        let request = CreateCollectionRequest {
            collection_name,
            description: description.to_string(),
            schema_fields,
            team_id,
            collection_type: CollectionType::KnowledgeHub,
            properties,
        };
        self.repository.create_collection(request.clone()).await?;
        tracing::info!(
            team_id = %team_id,
            collection = %request.collection_name,
            model = %descriptor.model_name,
            dimension = descriptor.dimension,
            "Created knowledge-hub collection"
        );
        Ok(request)
    }

    /// Change or clear a collection's alias.
    pub async fn update_alias(
        &self,
        team_id: Uuid,
        guard: &MetadataGuard,
        proposed: &str,
    ) -> CollectionResult<()> {
        let name = guard.metadata().name.clone();
        let value = match guard.validate_alias_edit(proposed)? {
            AliasEdit::Clear => String::new(),
            AliasEdit::Set(alias) => alias,
        };
        self.repository
            .patch_metadata(MetadataPatch::single(team_id, &name, "alias", &value))
            .await?;
        tracing::info!(team_id = %team_id, collection = %name, alias = %value, "Updated alias");
        Ok(())
    }

    /// Change a collection's type. Only collections created as CUSTOM accept this.
    pub async fn update_collection_type(
        &self,
        team_id: Uuid,
        guard: &MetadataGuard,
        proposed: CollectionType,
    ) -> CollectionResult<()> {
        let accepted = guard.validate_type_edit(proposed)?;
        let name = guard.metadata().name.clone();
        self.repository
            .patch_metadata(MetadataPatch::single(
                team_id,
                &name,
                "collection_type",
                &accepted.to_string(),
            ))
            .await?;
        tracing::info!(team_id = %team_id, collection = %name, collection_type = %accepted, "Updated collection type");
        Ok(())
    }

    /// Stored properties reconciled against the platform catalogs.
    pub async fn load_properties(
        &self,
        team_id: Uuid,
        collection_name: &str,
    ) -> CollectionResult<Vec<PropertyEntry>> {
        let stored = self
            .repository
            .get_properties(team_id, collection_name)
            .await?;
        Ok(properties::reconcile(&stored))
    }

    /// Set the value of an existing property key.
    pub async fn update_property(
        &self,
        team_id: Uuid,
        collection_name: &str,
        entries: &[PropertyEntry],
        key: &str,
        value: &str,
    ) -> CollectionResult<()> {
        let patch = properties::set_value(entries, key, value)?;
        self.apply_patch(team_id, collection_name, patch).await
    }

    /// Add a new custom property key.
    pub async fn add_property(
        &self,
        team_id: Uuid,
        collection_name: &str,
        entries: &[PropertyEntry],
        key: &str,
        value: &str,
    ) -> CollectionResult<()> {
        let patch = properties::add_custom(entries, key, value)?;
        self.apply_patch(team_id, collection_name, patch).await
    }

    /// Rename a custom property key, carrying its value over.
    pub async fn rename_property(
        &self,
        team_id: Uuid,
        collection_name: &str,
        entries: &[PropertyEntry],
        from: &str,
        to: &str,
        value: &str,
    ) -> CollectionResult<()> {
        let patch = properties::rename_custom(entries, from, to, value)?;
        self.apply_patch(team_id, collection_name, patch).await
    }

    async fn apply_patch(
        &self,
        team_id: Uuid,
        collection_name: &str,
        patch: PropertyPatch,
    ) -> CollectionResult<()> {
        self.repository
            .patch_metadata(MetadataPatch::single(
                team_id,
                collection_name,
                &patch.key,
                &patch.value,
            ))
            .await?;
        if let Some(removed) = &patch.remove {
            self.repository
                .drop_property(team_id, collection_name, removed)
                .await?;
        }
        tracing::info!(
            team_id = %team_id,
            collection = %collection_name,
            key = %patch.key,
            removed = ?patch.remove,
            "Patched collection property"
        );
        Ok(())
    }

    async fn ensure_name_available(&self, team_id: Uuid, name: &str) -> CollectionResult<()> {
        let existing = self.repository.list_collection_names(team_id).await?;
        if existing.contains(name) {
            return Err(CollectionError::DuplicateCollectionName(name.to_string()));
        }
        Ok(())
    }
}
