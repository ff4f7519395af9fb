use crate::{
    error::Error,
    generator::{GENERATED_HEADER, GeneratedModel, ModelGenerator},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use rowgen_config_build::RowgenConfig;
use rowgen_paths::CratePaths;
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

// write_file
fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, Error> {
    match fs::write(&path, contents) {
        Ok(()) => Ok(path),
        Err(source) => Err(Error::Io { path, source }),
    }
}

/// Write one model unit as `<module>.rs` into `dir`.
pub fn write_model(model: &GeneratedModel, dir: &Path, header: bool) -> Result<PathBuf, Error> {
    let path = dir.join(format!("{}.rs", model.module));

    write_file(path, &model.to_source(header))
}

/// Write an index that includes every unit under its own module and
/// re-exports the model type.
pub fn write_index(
    models: &[GeneratedModel],
    dir: &Path,
    file_name: &str,
    header: bool,
) -> Result<PathBuf, Error> {
    let mut tokens = TokenStream::new();

    for model in models {
        let module = format_ident!("{}", model.module);
        let entity = format_ident!("{}", model.entity);
        let unit = dir.join(format!("{}.rs", model.module)).display().to_string();

        tokens.extend(quote! {
            #[allow(clippy::all, clippy::pedantic, clippy::nursery)]
            pub mod #module {
                include!(#unit);
            }
            pub use #module::#entity;
        });
    }

    let body = tokens.to_string();
    let contents = if header {
        format!("{GENERATED_HEADER}\n{body}\n")
    } else {
        format!("{body}\n")
    };

    write_file(dir.join(file_name), &contents)
}

/// Generate every entity in a config, base and sync stages enabled.
pub fn generate_all(config: &RowgenConfig, paths: &CratePaths) -> Result<Vec<GeneratedModel>, Error> {
    let mut seen = BTreeSet::new();

    config
        .entities
        .iter()
        .map(|spec| {
            if !seen.insert(spec.module_name()) {
                return Err(Error::DuplicateEntity(spec.name.clone()));
            }

            ModelGenerator::for_spec(spec.clone())
                .with_paths(paths.clone())
                .generate()
                .map_err(|e| e.for_entity(&spec.name))
        })
        .collect()
}

/// Load `config_path`, generate every entity and write the units plus the
/// index into `out_dir`. Returns the written paths, index last.
pub fn build_from_config(config_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let config = RowgenConfig::load(config_path)?;
    let models = generate_all(&config, &CratePaths::new())?;

    fs::create_dir_all(out_dir).map_err(|source| Error::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = models
        .iter()
        .map(|model| write_model(model, out_dir, config.output.header))
        .collect::<Result<Vec<_>, _>>()?;
    written.push(write_index(
        &models,
        out_dir,
        &config.output.index,
        config.output.header,
    )?);

    info!(
        models = models.len(),
        out_dir = %out_dir.display(),
        "wrote generated models"
    );

    Ok(written)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [[entity]]
        name = "Task"
        table = "tasks"
        syncable = true

        [[entity.property]]
        name = "title"
        sql_type = "text"
        constraint = "NOT NULL"

        [[entity]]
        name = "Note"

        [[entity.property]]
        name = "body"
        sql_type = "text"
    "#;

    fn paths() -> CratePaths {
        CratePaths::with_core(quote!(::rowgen_core))
    }

    #[test]
    fn writes_one_file_per_model() {
        let dir = tempfile::tempdir().unwrap();
        let config = RowgenConfig::from_toml_str(CONFIG).unwrap();
        let models = generate_all(&config, &paths()).unwrap();

        let task = write_model(&models[0], dir.path(), true).unwrap();
        assert_eq!(task, dir.path().join("task.rs"));

        let source = fs::read_to_string(task).unwrap();
        assert!(source.starts_with(GENERATED_HEADER));
        syn::parse_file(&source).unwrap();
    }

    #[test]
    fn index_includes_and_reexports() {
        let dir = tempfile::tempdir().unwrap();
        let config = RowgenConfig::from_toml_str(CONFIG).unwrap();
        let models = generate_all(&config, &paths()).unwrap();

        let index = write_index(&models, dir.path(), "models.rs", false).unwrap();
        let source = fs::read_to_string(index).unwrap();
        let file = syn::parse_file(&source).unwrap();

        let modules: Vec<_> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Mod(m) => Some(m.ident.to_string()),
                _ => None,
            })
            .collect();

        // mod + use per model
        assert_eq!(file.items.len(), 4);
        assert_eq!(modules, ["task", "note"]);
    }

    #[test]
    fn failures_name_the_entity() {
        let config = RowgenConfig::from_toml_str(
            r#"
            [[entity]]
            name = "Task"
            syncable = true

            [[entity.property]]
            name = "row_status"
            sql_type = "integer"
            "#,
        )
        .unwrap();

        let err = generate_all(&config, &paths()).unwrap_err();
        assert!(matches!(err, Error::Entity { ref entity, .. } if entity == "Task"));
    }

    #[test]
    fn write_into_missing_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let config = RowgenConfig::from_toml_str(CONFIG).unwrap();
        let models = generate_all(&config, &paths()).unwrap();

        let err = write_model(&models[0], &missing, true).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if *path == missing.join("task.rs")));

        let err = write_index(&models, &missing, "models.rs", true).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if *path == missing.join("models.rs")));
    }

    #[test]
    fn entity_names_must_make_valid_modules() {
        for name in ["Match", "Record"] {
            let text = format!("[[entity]]\nname = \"{name}\"\n");
            let config = RowgenConfig::from_toml_str(&text).unwrap();

            let Error::Entity { entity, source } = generate_all(&config, &paths()).unwrap_err()
            else {
                panic!("{name} was not rejected per entity");
            };
            assert_eq!(entity, name);
            assert!(matches!(*source, Error::Spec(_)), "{name}");
        }
    }

    #[test]
    fn duplicate_entities_are_rejected() {
        let config = RowgenConfig::from_toml_str(
            r#"
            [[entity]]
            name = "Task"

            [[entity]]
            name = "Task"
            "#,
        )
        .unwrap();

        assert!(matches!(
            generate_all(&config, &paths()),
            Err(Error::DuplicateEntity(ref name)) if name == "Task"
        ));
    }

    #[test]
    fn build_writes_units_then_index() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("rowgen.toml");
        fs::write(&config_path, CONFIG).unwrap();
        let out_dir = dir.path().join("out");

        let written = build_from_config(&config_path, &out_dir).unwrap();

        assert_eq!(
            written,
            [
                out_dir.join("task.rs"),
                out_dir.join("note.rs"),
                out_dir.join("models.rs"),
            ]
        );
    }

    #[test]
    fn missing_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            build_from_config(&dir.path().join("rowgen.toml"), dir.path()),
            Err(Error::Config(_))
        ));
    }
}
