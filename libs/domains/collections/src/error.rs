use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Unknown field type: '{0}'")]
    UnknownType(String),

    #[error("Field name is missing or duplicated: '{0}'")]
    MissingFieldName(String),

    #[error("Schema must declare a primary key field")]
    NoPrimaryKey,

    #[error("Schema must declare at least one vector field")]
    NoVectorField,

    #[error("Field '{0}' requires a size parameter (max length or dimension)")]
    MissingSizeParameter(String),

    #[error("Field '{0}' carries a size parameter its type does not accept")]
    UnexpectedSizeParameter(String),

    #[error("Field '{0}' cannot be a primary key: type is not eligible")]
    PrimaryKeyUnsupported(String),

    #[error("Collection '{0}' is referenced elsewhere; its alias cannot be changed")]
    AliasLocked(String),

    #[error("Alias '{0}' is invalid: only letters, digits, '-' and '_' are allowed")]
    InvalidAliasFormat(String),

    #[error("Collection type can only be changed on collections created as CUSTOM")]
    TypeNotEditable,

    #[error("Property key '{0}' is reserved and cannot be renamed")]
    ReservedKeyRename(String),

    #[error("Property key '{0}' already exists")]
    DuplicateKey(String),

    #[error("Property key '{0}' is not part of this collection")]
    UnknownPropertyKey(String),

    #[error("Collection '{0}' already exists for this team")]
    DuplicateCollectionName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CollectionResult<T> = Result<T, CollectionError>;
