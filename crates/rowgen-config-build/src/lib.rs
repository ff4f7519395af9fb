//! `rowgen.toml` loading for build scripts.

use rowgen_schema::entity::EntitySpec;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Conventional config file name, relative to the package root.
pub const DEFAULT_CONFIG_FILE: &str = "rowgen.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// RowgenConfig
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowgenConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default, rename = "entity")]
    pub entities: Vec<EntitySpec>,
}

impl RowgenConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

///
/// OutputConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Prefix each generated unit with a "do not edit" banner.
    #[serde(default = "default_header")]
    pub header: bool,

    /// File name of the index that includes every generated unit.
    #[serde(default = "default_index")]
    pub index: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            index: default_index(),
        }
    }
}

const fn default_header() -> bool {
    true
}

fn default_index() -> String {
    "models.rs".to_string()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use rowgen_schema::property::SqlType;
    use std::io::Write;

    const CONFIG: &str = r#"
        [output]
        header = false

        [[entity]]
        name = "Task"
        table = "tasks"
        syncable = true

        [[entity.property]]
        name = "title"
        sql_type = "text"
        constraint = "NOT NULL"

        [[entity.property]]
        name = "priority"
        sql_type = "integer"

        [[entity]]
        name = "Note"
    "#;

    #[test]
    fn parses_entities_in_order() {
        let config = RowgenConfig::from_toml_str(CONFIG).unwrap();

        assert!(!config.output.header);
        assert_eq!(config.output.index, "models.rs");
        assert_eq!(config.entities.len(), 2);

        let task = &config.entities[0];
        assert_eq!(task.name, "Task");
        assert_eq!(task.table_name(), "tasks");
        assert!(task.syncable);
        assert_eq!(task.properties[0].sql_type, SqlType::Text);
        assert_eq!(task.properties[1].constraint, "");

        let note = &config.entities[1];
        assert!(!note.syncable);
        assert!(note.properties.is_empty());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = RowgenConfig::from_toml_str("").unwrap();

        assert!(config.output.header);
        assert!(config.entities.is_empty());
    }

    #[test]
    fn rejects_unknown_sql_type() {
        let text = r#"
            [[entity]]
            name = "Task"

            [[entity.property]]
            name = "title"
            sql_type = "varchar"
        "#;

        assert!(matches!(
            RowgenConfig::from_toml_str(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(DEFAULT_CONFIG_FILE);

        assert!(matches!(
            RowgenConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = RowgenConfig::load(file.path()).unwrap();
        assert_eq!(config.entities.len(), 2);
    }
}
