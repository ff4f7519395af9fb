//! Models generated from `rowgen.toml` at build time.

include!(concat!(env!("OUT_DIR"), "/models.rs"));
