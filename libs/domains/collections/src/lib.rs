//! Collections Domain Library
//!
//! Configuration engine for vector-database collections on the RAG platform:
//! schema construction and validation, property reconciliation against the
//! platform catalogs, and mutability rules for collection identity fields.
//!
//! All operations are pure, synchronous computations over caller-owned
//! values; persistence and transport live behind [`CollectionRepository`],
//! implemented by the surrounding platform.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐
//! │ CollectionService │  ← validate first, then call the boundary
//! └─────────┬─────────┘
//!           │
//!   ┌───────┼────────────────┬─────────────────┐
//!   │       │                │                 │
//! ┌─▼─────┐ ┌▼─────────────┐ ┌▼──────────────┐ ┌▼─────────────────────┐
//! │schema │ │ properties   │ │ MetadataGuard │ │ CollectionRepository │
//! │builder│ │ reconciler   │ │               │ │ (trait, external)    │
//! └───────┘ └──────────────┘ └───────────────┘ └──────────────────────┘
//! ```

pub mod error;
pub mod field_types;
pub mod guard;
pub mod models;
pub mod properties;
pub mod repository;
pub mod schema;
pub mod service;

pub use error::{CollectionError, CollectionResult};
pub use field_types::FieldType;
pub use guard::{AliasEdit, CollectionMetadata, MetadataGuard};
pub use models::{
    CollectionType, CreateCollectionRequest, EmbeddingModelDescriptor, MetadataPatch,
    RawSchemaField, SchemaField,
};
pub use properties::{
    DEFAULT_CATALOG_KEYS, PropertyEntry, PropertyOrigin, PropertyPatch, RESERVED_KEYS,
};
pub use repository::CollectionRepository;
pub use schema::KNOWLEDGE_HUB_SCHEMA_VERSION;
pub use service::CollectionService;
