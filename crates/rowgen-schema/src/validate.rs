//! Entity spec validation, run once before any code is emitted.

use crate::{
    MAX_COLUMN_NAME_LEN, MAX_ENTITY_NAME_LEN,
    entity::EntitySpec,
    err,
    error::ErrorList,
    naming::{
        self, ORIGIN_ID_COLUMN, PROPERTY_MODEL_TYPE, RECORD_TYPE, ROW_ID_COLUMN, ROW_STATUS_COLUMN,
        SYNC_METHODS, TABLE_MODEL_TYPE,
    },
    property::SqlType,
};
use std::collections::BTreeMap;

/// Words that cannot become generated module or method names.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// Names every generated model already defines.
const MODEL_SURFACE: &[&str] = &[
    "default", "from_record", "new", "properties", "record", "record_mut",
];

// type names a generated unit brings into scope
fn is_runtime_type(name: &str) -> bool {
    [RECORD_TYPE, PROPERTY_MODEL_TYPE, TABLE_MODEL_TYPE].contains(&name)
        || SqlType::ALL.iter().any(|t| t.property_type() == name)
}

/// Validate an entity spec, collecting every problem found.
pub fn validate_entity(spec: &EntitySpec) -> Result<(), ErrorList> {
    let mut errs = ErrorList::new();

    validate_entity_name(&spec.name, &mut errs);
    validate_table_name(&spec.table_name(), &mut errs);
    validate_columns(spec, &mut errs);

    errs.result()
}

fn validate_entity_name(name: &str, errs: &mut ErrorList) {
    if name.is_empty() {
        err!(errs, "entity name is empty");
        return;
    }
    if name.len() > MAX_ENTITY_NAME_LEN {
        err!(
            errs,
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        );
    }
    if !is_ident(name) {
        err!(errs, "entity name '{name}' is not a valid identifier");
    } else if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        err!(errs, "entity name '{name}' must start with an uppercase letter");
    } else {
        let module = naming::module_name(name);
        if RUST_KEYWORDS.contains(&module.as_str()) {
            err!(errs, "entity name '{name}' maps to reserved module name '{module}'");
        }
        if is_runtime_type(name) {
            err!(errs, "entity name '{name}' shadows an imported runtime type");
        }
    }
}

fn validate_table_name(table: &str, errs: &mut ErrorList) {
    if table.is_empty() {
        err!(errs, "table name is empty");
    } else if !is_ident(table) {
        err!(errs, "table name '{table}' must be ASCII alphanumeric or '_'");
    }
}

fn validate_columns(spec: &EntitySpec, errs: &mut ErrorList) {
    // constant name -> column that claimed it
    let mut constants: BTreeMap<String, String> = BTreeMap::new();
    let mut methods: BTreeMap<String, String> = BTreeMap::new();

    let mut reserved = vec![ROW_ID_COLUMN];
    if spec.syncable {
        reserved.extend([ORIGIN_ID_COLUMN, ROW_STATUS_COLUMN]);
    }
    for column in &reserved {
        constants.insert(
            naming::constant_name(column).to_string(),
            (*column).to_string(),
        );
        methods.insert(naming::getter_name(column), (*column).to_string());
        methods.insert(naming::setter_name(column), (*column).to_string());
    }
    if spec.syncable {
        for method in SYNC_METHODS {
            methods.insert(method.to_string(), ROW_STATUS_COLUMN.to_string());
        }
    }

    for property in &spec.properties {
        let column = &property.name;

        if column.is_empty() {
            err!(errs, "property name is empty");
            continue;
        }
        if column.len() > MAX_COLUMN_NAME_LEN {
            err!(
                errs,
                "property '{column}' exceeds max length {MAX_COLUMN_NAME_LEN}"
            );
        }
        if !is_ident(column) || column.starts_with('_') {
            err!(errs, "property '{column}' is not a valid column identifier");
            continue;
        }

        let getter = property.getter_name();
        if RUST_KEYWORDS.contains(&getter.as_str()) || MODEL_SURFACE.contains(&getter.as_str()) {
            err!(errs, "the word '{getter}' is reserved");
            continue;
        }

        let constant = property.constant_name().to_string();
        if let Some(prev) = constants.insert(constant.clone(), column.clone()) {
            err!(
                errs,
                "property '{column}' collides with '{prev}' on constant '{constant}'"
            );
            continue;
        }

        for method in [getter, property.setter_name()] {
            if let Some(prev) = methods.insert(method.clone(), column.clone()) {
                err!(
                    errs,
                    "property '{column}' collides with '{prev}' on method '{method}'"
                );
            }
        }
    }
}

// ASCII identifier that does not start with a digit
fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();

    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::SqlType;

    fn task() -> EntitySpec {
        EntitySpec::new("Task")
            .property("title", SqlType::Text, "NOT NULL")
            .property("priority", SqlType::Integer, "DEFAULT 0")
    }

    #[test]
    fn accepts_well_formed_spec() {
        assert!(validate_entity(&task()).is_ok());
        assert!(validate_entity(&task().syncable(true)).is_ok());
    }

    #[test]
    fn rejects_bad_entity_names() {
        assert!(validate_entity(&EntitySpec::new("")).is_err());
        assert!(validate_entity(&EntitySpec::new("task")).is_err());
        assert!(validate_entity(&EntitySpec::new("Task-List")).is_err());
    }

    #[test]
    fn rejects_duplicate_columns() {
        let spec = task().property("title", SqlType::Text, "");
        let errs = validate_entity(&spec).unwrap_err();

        assert_eq!(errs.len(), 1);
        assert!(errs.messages()[0].contains("TITLE"));
    }

    #[test]
    fn rejects_row_id_collisions() {
        let spec = task().property("id", SqlType::Long, "");
        assert!(validate_entity(&spec).is_err());
    }

    #[test]
    fn sync_columns_reserved_only_when_syncable() {
        let spec = task().property("origin_id", SqlType::Long, "");
        assert!(validate_entity(&spec).is_ok());
        assert!(validate_entity(&spec.syncable(true)).is_err());

        let spec = task().property("row_state", SqlType::Integer, "");
        assert!(validate_entity(&spec).is_ok());
        assert!(validate_entity(&spec.syncable(true)).is_err());
    }

    #[test]
    fn rejects_reserved_words() {
        let spec = task().property("type", SqlType::Text, "");
        let errs = validate_entity(&spec).unwrap_err();

        assert!(errs.messages()[0].contains("reserved"));
    }

    #[test]
    fn rejects_entities_named_like_keywords() {
        for name in ["Match", "Type", "Loop", "Impl", "Mod", "Self"] {
            let errs = validate_entity(&EntitySpec::new(name)).unwrap_err();

            assert!(errs.messages()[0].contains("module name"), "{name}");
        }

        assert!(validate_entity(&EntitySpec::new("Matches")).is_ok());
    }

    #[test]
    fn rejects_entities_shadowing_runtime_types() {
        for name in ["Record", "TableModel", "PropertyModel", "TextProperty", "LongProperty"] {
            let errs = validate_entity(&EntitySpec::new(name)).unwrap_err();

            assert!(errs.messages()[0].contains("runtime type"), "{name}");
        }
    }

    #[test]
    fn sync_method_names_are_reserved_when_syncable() {
        for method in SYNC_METHODS {
            let spec = task().property(method, SqlType::Integer, "");

            assert!(validate_entity(&spec).is_ok(), "{method}");
            assert!(validate_entity(&spec.syncable(true)).is_err(), "{method}");
        }
    }

    #[test]
    fn collects_every_error() {
        let spec = EntitySpec::new("task")
            .property("", SqlType::Text, "")
            .property("9lives", SqlType::Integer, "");
        let errs = validate_entity(&spec).unwrap_err();

        assert_eq!(errs.len(), 3);
    }
}
