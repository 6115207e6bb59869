//! Scene errors.

use geoeq_core::EngineError;
use thiserror::Error;

/// Errors raised while loading or evaluating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The construction itself failed.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The scene description is not valid JSON for a scene.
    #[error("invalid scene description: {0}")]
    Parse(#[from] serde_json::Error),

    /// A step refers to a name no earlier step defined.
    #[error("unknown object '{0}'")]
    UnknownObject(String),

    /// Two steps define the same name.
    #[error("object '{0}' is defined twice")]
    DuplicateObject(String),

    /// A name refers to an object of the wrong kind.
    #[error("object '{name}' is not a {expected}")]
    WrongKind {
        /// The offending name.
        name: String,
        /// The kind the step needed.
        expected: &'static str,
    },
}

/// Result type for scene operations.
pub type Result<T, E = SceneError> = std::result::Result<T, E>;
