//! ## Crate layout
//! - `build`: model generation for build scripts (`build!`, `ModelGenerator`).
//! - `config`: `rowgen.toml` loading.
//! - `core`: runtime the generated models link against.
//! - `schema`: entity specs, naming and validation.
//!
//! Generated code reaches the runtime through `::rowgen::core`, so depending
//! on this crate (as both a dependency and a build-dependency) is enough.

pub use rowgen_build as build;
pub use rowgen_config_build as config;
pub use rowgen_core as core;
pub use rowgen_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use rowgen_build::build;

///
/// Prelude
/// runtime surface used alongside generated models
///

pub mod prelude {
    pub use crate::core::{
        model::TableModel,
        property::PropertyModel,
        record::Record,
        sync::RowSyncState,
        value::Value,
    };
}
