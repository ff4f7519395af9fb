use rowgen_config_build::ConfigError;
use rowgen_schema::{SpecError, naming::ConstName};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// Error
///
/// Terminal failure for one generation unit. `Entity` wraps any other
/// variant with the name of the model that failed.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("entity '{0}' is declared more than once")]
    DuplicateEntity(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("generating '{entity}' failed: {source}")]
    Entity {
        entity: String,
        source: Box<Self>,
    },
}

impl Error {
    pub(crate) fn for_entity(self, entity: &str) -> Self {
        match self {
            Self::Entity { .. } => self,
            other => Self::Entity {
                entity: entity.to_string(),
                source: Box::new(other),
            },
        }
    }
}

///
/// EmitError
///
/// Raised by an emitter when a stage writes something the generated unit
/// could not compile with.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum EmitError {
    #[error("constant '{0}' is declared twice")]
    DuplicateSymbol(ConstName),

    #[error("'{name}' referenced in {site} is not a declared constant")]
    UndefinedSymbol { name: ConstName, site: String },

    #[error("type '{ty}' used by {site} is not imported")]
    UnresolvedType { ty: String, site: String },

    #[error("'{0}' is not a valid identifier")]
    InvalidIdent(String),

    #[error("method '{0}' is defined twice")]
    DuplicateMethod(String),

    #[error("cannot begin method '{next}' while '{open}' is open")]
    MethodAlreadyOpen { open: String, next: String },

    #[error("no method is open")]
    NoOpenMethod,

    #[error("method '{0}' was never finished")]
    UnfinishedMethod(String),

    #[error("method '{0}' does not end with a return")]
    MissingReturn(String),

    #[error("{0} is not valid here")]
    MisplacedStatement(&'static str),

    #[error("slot {index} is already assigned to '{existing}'")]
    SlotConflict { index: usize, existing: ConstName },

    #[error("constant '{0}' already holds a slot")]
    DuplicateSlot(ConstName),

    #[error("slot {index} is out of range for {len} reserved slots")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("slot {0} is reserved but never populated")]
    UnpopulatedSlot(usize),

    #[error("slot {index} holds '{assigned}' but was reserved for '{reserved}'")]
    SlotMismatch {
        index: usize,
        reserved: ConstName,
        assigned: ConstName,
    },
}
