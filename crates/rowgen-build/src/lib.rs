//! Model source generation.
//!
//! A [`ModelGenerator`] runs an ordered pipeline of [`Stage`]s over an
//! [`EntitySpec`]: the [`BaseStage`] lays out the row id and declared columns,
//! the [`SyncStage`] adds origin sync to syncable entities. The result is a
//! Rust unit targeting `rowgen-core`, written by [`write_model`] or, from a
//! build script, by [`build!`].

pub mod code;
pub mod emit;
pub mod error;
pub mod generator;
pub mod imports;
pub mod output;
pub mod slot;
pub mod stage;
pub mod symbol;

mod macros;

#[cfg(test)]
mod test_support;

pub use error::{EmitError, Error};
pub use generator::{GENERATED_HEADER, GeneratedModel, ModelGenerator, ModelPlan};
pub use output::{build_from_config, generate_all, write_index, write_model};
pub use rowgen_config_build::{DEFAULT_CONFIG_FILE, RowgenConfig};
pub use rowgen_paths::{CORE_CRATE_ENV, CratePaths};
pub use rowgen_schema::entity::EntitySpec;
pub use stage::{BaseStage, Stage, SyncStage};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        code::{Expr, MethodSignature, Stmt},
        emit::{Emitter, TokenEmitter},
        generator::ModelGenerator,
        stage::{BaseStage, Stage, SyncStage},
    };
    pub use rowgen_schema::prelude::*;
}
