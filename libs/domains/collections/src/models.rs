use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::field_types::FieldType;

/// How a collection came to exist on the platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionType {
    /// Created from an embedding model through the knowledge-hub flow.
    KnowledgeHub,
    /// Created field-by-field by an operator.
    Custom,
}

/// One validated column definition within a collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchemaField {
    pub name: String,
    pub data_type: FieldType,
    #[serde(default)]
    pub is_primary_key: bool,
    /// Present exactly when `data_type.requires_max_length()`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Present exactly when `data_type.requires_dimension()`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<u32>,
}

/// Operator-authored column input, before validation.
///
/// The type is a raw string here so that an unknown name surfaces as a
/// validation failure instead of a deserialization error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RawSchemaField {
    pub name: String,
    pub data_type: String,
    #[serde(default)]
    pub is_primary_key: bool,
    #[validate(range(min = 1))]
    pub max_length: Option<u32>,
    #[validate(range(min = 1))]
    pub dimension: Option<u32>,
}

/// Embedding model selected for a knowledge-hub collection.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EmbeddingModelDescriptor {
    #[validate(length(min = 1))]
    pub provider: String,
    #[validate(length(min = 1))]
    pub model_name: String,
    pub model_category: String,
    #[validate(range(min = 1))]
    pub dimension: u32,
}

/// Request handed to the external collection-management service.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub collection_name: String,
    pub description: String,
    pub schema_fields: Vec<SchemaField>,
    pub team_id: Uuid,
    pub collection_type: CollectionType,
    pub properties: BTreeMap<String, String>,
}

/// Partial metadata write: always a single key or a small handful, never the
/// full property map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetadataPatch {
    pub team_id: Uuid,
    pub collection_name: String,
    pub metadata: BTreeMap<String, String>,
}

impl MetadataPatch {
    pub fn single(team_id: Uuid, collection_name: &str, key: &str, value: &str) -> Self {
        Self {
            team_id,
            collection_name: collection_name.to_string(),
            metadata: BTreeMap::from([(key.to_string(), value.to_string())]),
        }
    }
}
