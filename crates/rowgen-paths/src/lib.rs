use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Packages that reach the runtime directly instead of via the facade.
const INTERNAL_CRATES: &[&str] = &[
    "rowgen-build",
    "rowgen-config-build",
    "rowgen-core",
    "rowgen-paths",
    "rowgen-schema",
];

/// Env var overriding the runtime crate path in generated code.
pub const CORE_CRATE_ENV: &str = "ROWGEN_CORE_CRATE";

fn env_path(name: &str) -> Option<TokenStream> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .and_then(|value| syn::parse_str::<Path>(&value).ok())
        .map(|path| quote!(#path))
}

///
/// CratePaths
///
/// Resolves the crate root generated models use to reach the runtime.
/// Internal crates default to `::rowgen_core`; everything else goes through
/// the `::rowgen::core` facade. `ROWGEN_CORE_CRATE` overrides both.
///

#[derive(Clone, Debug)]
pub struct CratePaths {
    pub core: TokenStream,
}

impl CratePaths {
    #[must_use]
    /// Resolve crate paths for the package being built, honoring the env override.
    pub fn new() -> Self {
        let pkg = std::env::var("CARGO_PKG_NAME").unwrap_or_default();
        let core = if INTERNAL_CRATES.contains(&pkg.as_str()) {
            quote!(::rowgen_core)
        } else {
            quote!(::rowgen::core)
        };

        Self {
            core: env_path(CORE_CRATE_ENV).unwrap_or(core),
        }
    }

    /// Fixed paths, ignoring the environment.
    #[must_use]
    pub const fn with_core(core: TokenStream) -> Self {
        Self { core }
    }
}

impl Default for CratePaths {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
