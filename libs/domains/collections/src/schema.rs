//! Schema construction for vector collections.
//!
//! Two paths produce a schema: the knowledge-hub path generates a fixed
//! column template from an embedding model, and the custom path validates an
//! operator-authored field list. A field list is accepted in full or
//! rejected in full with the first violated rule.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::{CollectionError, CollectionResult};
use crate::field_types::FieldType;
use crate::models::{EmbeddingModelDescriptor, RawSchemaField, SchemaField};

/// Version of the knowledge-hub column template.
///
/// The template is a compatibility contract with the vector store: every
/// knowledge-hub collection ever created carries exactly these columns, so
/// any change here must bump the version and ship a migration check against
/// existing collections.
pub const KNOWLEDGE_HUB_SCHEMA_VERSION: u16 = 1;

/// Primary-key column of every knowledge-hub collection.
pub const ID_FIELD: &str = "id";
/// Vector column of every knowledge-hub collection.
pub const EMBEDDING_FIELD: &str = "embedding";

const CHUNK_TEXT_MAX_LENGTH: u32 = 65_535;

struct TemplateColumn {
    name: &'static str,
    data_type: FieldType,
    max_length: Option<u32>,
}

const fn varchar(name: &'static str, max_length: u32) -> TemplateColumn {
    TemplateColumn {
        name,
        data_type: FieldType::VarChar,
        max_length: Some(max_length),
    }
}

const fn scalar(name: &'static str, data_type: FieldType) -> TemplateColumn {
    TemplateColumn {
        name,
        data_type,
        max_length: None,
    }
}

/// Metadata columns 3..25 of the knowledge-hub template, in storage order.
const METADATA_COLUMNS: [TemplateColumn; 23] = [
    varchar("chunk_text", CHUNK_TEXT_MAX_LENGTH),
    scalar("chunk_index", FieldType::Int32),
    varchar("document_id", 256),
    varchar("knowledge_collection_id", 256),
    varchar("file_name", 1024),
    varchar("original_file_name", 1024),
    varchar("source_url", 2048),
    scalar("token_count", FieldType::Int32),
    scalar("document_token_count", FieldType::Int32),
    varchar("language", 32),
    scalar("created_at", FieldType::Int64),
    scalar("updated_at", FieldType::Int64),
    varchar("author", 256),
    scalar("quality_score", FieldType::Double),
    scalar("start_offset", FieldType::Int64),
    scalar("end_offset", FieldType::Int64),
    scalar("page_number", FieldType::Int32),
    varchar("category", 128),
    varchar("mime_type", 128),
    varchar("document_type", 64),
    varchar("team_id", 64),
    varchar("embedding_model", 256),
    scalar("encryption_key_version", FieldType::Int32),
];

/// Build the fixed knowledge-hub schema for an embedding model with the
/// given vector dimension.
///
/// Deterministic: the same dimension always yields the identical field list.
pub fn build_from_embedding_model(dimension: u32) -> CollectionResult<Vec<SchemaField>> {
    if dimension == 0 {
        return Err(CollectionError::Validation(
            "embedding dimension must be positive".to_string(),
        ));
    }

    let mut fields = Vec::with_capacity(2 + METADATA_COLUMNS.len());
    fields.push(SchemaField {
        name: ID_FIELD.to_string(),
        data_type: FieldType::Int64,
        is_primary_key: true,
        max_length: None,
        dimension: None,
    });
    fields.push(SchemaField {
        name: EMBEDDING_FIELD.to_string(),
        data_type: FieldType::FloatVector,
        is_primary_key: false,
        max_length: None,
        dimension: Some(dimension),
    });
    for column in &METADATA_COLUMNS {
        fields.push(SchemaField {
            name: column.name.to_string(),
            data_type: column.data_type,
            is_primary_key: false,
            max_length: column.max_length,
            dimension: None,
        });
    }
    Ok(fields)
}

/// Validate an operator-authored field list into a schema.
///
/// Rules are checked in a fixed order and the first violation is returned:
/// field names (non-empty, unique), then primary-key presence, then vector
/// presence, then per-field type and size checks.
pub fn build_from_user_fields(raw_fields: &[RawSchemaField]) -> CollectionResult<Vec<SchemaField>> {
    let mut seen_names: HashSet<&str> = HashSet::with_capacity(raw_fields.len());
    for field in raw_fields {
        let name = field.name.trim();
        if name.is_empty() || !seen_names.insert(name) {
            return Err(CollectionError::MissingFieldName(name.to_string()));
        }
    }

    if !raw_fields.iter().any(|f| f.is_primary_key) {
        return Err(CollectionError::NoPrimaryKey);
    }

    // An unresolvable type name counts as non-vector here; it surfaces as
    // UnknownType in the per-field pass below.
    let has_vector = raw_fields
        .iter()
        .any(|f| FieldType::describe(&f.data_type).is_ok_and(|t| t.is_vector()));
    if !has_vector {
        return Err(CollectionError::NoVectorField);
    }

    let mut fields = Vec::with_capacity(raw_fields.len());
    for field in raw_fields {
        let data_type = FieldType::describe(&field.data_type)?;

        if field.is_primary_key && !data_type.supports_primary_key() {
            return Err(CollectionError::PrimaryKeyUnsupported(field.name.clone()));
        }

        if data_type.requires_max_length() {
            if !matches!(field.max_length, Some(len) if len > 0) {
                return Err(CollectionError::MissingSizeParameter(field.name.clone()));
            }
        } else if field.max_length.is_some() {
            return Err(CollectionError::UnexpectedSizeParameter(field.name.clone()));
        }

        if data_type.requires_dimension() {
            if !matches!(field.dimension, Some(dim) if dim > 0) {
                return Err(CollectionError::MissingSizeParameter(field.name.clone()));
            }
        } else if field.dimension.is_some() {
            return Err(CollectionError::UnexpectedSizeParameter(field.name.clone()));
        }

        fields.push(SchemaField {
            name: field.name.trim().to_string(),
            data_type,
            is_primary_key: field.is_primary_key,
            max_length: if data_type.requires_max_length() {
                field.max_length
            } else {
                None
            },
            dimension: if data_type.requires_dimension() {
                field.dimension
            } else {
                None
            },
        });
    }
    Ok(fields)
}

/// Suggest a collection name for a knowledge-hub collection.
///
/// Convenience only: the operator can overwrite the suggestion, and
/// uniqueness is still checked at creation time.
pub fn suggest_collection_name(team_id: Uuid, descriptor: &EmbeddingModelDescriptor) -> String {
    let team = team_id.simple().to_string();
    let suffix = &team[team.len() - 8..];
    format!(
        "kh_{}_{}_{}",
        suffix,
        slug(&descriptor.provider),
        slug(&descriptor.model_name)
    )
}

/// Lowercase and replace every non-alphanumeric run with a single underscore.
fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_separator = true;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            out.push('_');
            last_was_separator = true;
        }
    }
    out.trim_end_matches('_').to_string()
}
