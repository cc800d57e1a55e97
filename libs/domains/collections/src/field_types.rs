use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::error::{CollectionError, CollectionResult};

/// Column data types supported by the backing vector store.
///
/// Wire names follow the store's own type vocabulary (`INT64`,
/// `FLOAT_VECTOR`, ...), so a persisted schema round-trips unchanged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Bool,
    #[serde(rename = "VARCHAR")]
    #[strum(serialize = "VARCHAR")]
    VarChar,
    Json,
    FloatVector,
    BinaryVector,
}

impl FieldType {
    /// Resolve a wire-format type name, e.g. `"FLOAT_VECTOR"`.
    pub fn describe(type_name: &str) -> CollectionResult<Self> {
        type_name
            .parse()
            .map_err(|_| CollectionError::UnknownType(type_name.to_string()))
    }

    /// Variable-length types must declare a maximum length.
    pub fn requires_max_length(self) -> bool {
        matches!(self, FieldType::VarChar)
    }

    /// Vector types must declare their dimension.
    pub fn requires_dimension(self) -> bool {
        matches!(self, FieldType::FloatVector | FieldType::BinaryVector)
    }

    /// Only these types are accepted as a collection's primary key.
    pub fn supports_primary_key(self) -> bool {
        matches!(self, FieldType::Int64 | FieldType::VarChar)
    }

    pub fn is_vector(self) -> bool {
        matches!(self, FieldType::FloatVector | FieldType::BinaryVector)
    }
}
