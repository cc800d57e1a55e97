//! Mutability rules for a collection's identity fields.
//!
//! `name_locked` and `collection_type_editable` are computed once when the
//! guard is loaded and never recomputed within a session: relabeling a
//! collection's type does not unlock further edits, and a collection that is
//! referenced elsewhere keeps its alias for the whole session.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{CollectionError, CollectionResult};
use crate::models::CollectionType;

static ALIAS_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Identity fields of a collection, with the session's edit permissions.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionMetadata {
    /// Backing name; immutable once created.
    pub name: String,
    pub alias: Option<String>,
    pub description: String,
    pub collection_type: CollectionType,
    pub name_locked: bool,
    pub collection_type_editable: bool,
}

/// Outcome of a validated alias edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasEdit {
    /// Remove the alias override.
    Clear,
    Set(String),
}

/// Guards edits against a loaded collection's identity fields.
#[derive(Debug, Clone)]
pub struct MetadataGuard {
    metadata: CollectionMetadata,
}

impl MetadataGuard {
    /// Capture edit permissions for one editing session.
    ///
    /// `original_type` is the collection type at creation time, before any
    /// edits in this or a previous session.
    pub fn load(
        name: String,
        alias: Option<String>,
        description: String,
        original_type: CollectionType,
        referenced_elsewhere: bool,
    ) -> Self {
        let alias = alias.filter(|a| !a.is_empty() && *a != name);
        Self {
            metadata: CollectionMetadata {
                name,
                alias,
                description,
                collection_type: original_type,
                name_locked: referenced_elsewhere,
                collection_type_editable: original_type == CollectionType::Custom,
            },
        }
    }

    pub fn metadata(&self) -> &CollectionMetadata {
        &self.metadata
    }

    /// Validate a proposed alias.
    ///
    /// An empty proposal, or one equal to the backing name, clears the
    /// override. Anything else must match `[A-Za-z0-9_-]+`.
    pub fn validate_alias_edit(&self, proposed: &str) -> CollectionResult<AliasEdit> {
        if self.metadata.name_locked {
            return Err(CollectionError::AliasLocked(self.metadata.name.clone()));
        }
        let proposed = proposed.trim();
        if proposed.is_empty() || proposed == self.metadata.name {
            return Ok(AliasEdit::Clear);
        }
        if !ALIAS_FORMAT.is_match(proposed) {
            return Err(CollectionError::InvalidAliasFormat(proposed.to_string()));
        }
        Ok(AliasEdit::Set(proposed.to_string()))
    }

    /// Validate a proposed collection-type change.
    pub fn validate_type_edit(&self, proposed: CollectionType) -> CollectionResult<CollectionType> {
        if !self.metadata.collection_type_editable {
            return Err(CollectionError::TypeNotEditable);
        }
        Ok(proposed)
    }
}
