//! Model Registry Domain Library
//!
//! Maintains the priority ordering over a team's configured LLM models:
//! move-up/move-down with full renumbering, inconsistency detection, and
//! auto-repair. Edits stay in an in-memory working copy until the batched
//! priority patch is persisted through [`ModelRegistryRepository`].

pub mod error;
pub mod models;
pub mod ordering;
pub mod repository;
pub mod service;

pub use error::{ModelRegistryError, ModelRegistryResult};
pub use models::{LlmModelRef, LlmProvider, ModelCategory};
pub use ordering::{PriorityReorderer, needs_repair};
pub use repository::ModelRegistryRepository;
pub use service::ModelRegistryService;
