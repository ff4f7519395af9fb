//! Build-script entry point.
//!
//! Generates every entity in a `rowgen.toml` into `OUT_DIR` and evaluates to
//! the `Result` of doing so, so build scripts can use `?`.
#[macro_export]
macro_rules! build {
    () => {
        $crate::build!($crate::DEFAULT_CONFIG_FILE)
    };
    ($config:expr) => {{
        use std::{env::var_os, path::PathBuf};

        //
        // CARGO
        //

        let config: &str = $config;
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={config}");
        println!("cargo:rerun-if-env-changed={}", $crate::CORE_CRATE_ENV);

        //
        // MODELS
        //

        match (var_os("OUT_DIR"), var_os("CARGO_MANIFEST_DIR")) {
            (Some(out_dir), Some(manifest_dir)) => $crate::build_from_config(
                &PathBuf::from(manifest_dir).join(config),
                &PathBuf::from(out_dir),
            ),
            (None, _) => Err($crate::Error::MissingEnv("OUT_DIR")),
            (_, None) => Err($crate::Error::MissingEnv("CARGO_MANIFEST_DIR")),
        }
    }};
}
