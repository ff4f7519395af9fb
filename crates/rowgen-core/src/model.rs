use crate::{property::PropertyModel, record::Record};

///
/// TableModel
///
/// Implemented by every generated row model.
///

pub trait TableModel: Sized {
    const TABLE_NAME: &'static str;

    /// Every property of the model in slot order; slot 0 is the row id.
    fn properties() -> &'static [&'static dyn PropertyModel];

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Wrap an existing record without applying defaults.
    fn from_record(record: Record) -> Self;

    /// Look up a property by column name.
    #[must_use]
    fn property(column: &str) -> Option<&'static dyn PropertyModel> {
        Self::properties()
            .iter()
            .copied()
            .find(|p| p.name() == column)
    }

    /// Column names in slot order.
    #[must_use]
    fn column_names() -> Vec<&'static str> {
        Self::properties().iter().map(|p| p.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{LongProperty, TextProperty};

    #[derive(Debug)]
    struct Note {
        record: Record,
    }

    impl Note {
        const ID: LongProperty = LongProperty::new("_id", "PRIMARY KEY AUTOINCREMENT");
        const BODY: TextProperty = TextProperty::new("body", "");
        const PROPERTIES: [&'static dyn PropertyModel; 2] = [&Self::ID, &Self::BODY];
    }

    impl TableModel for Note {
        const TABLE_NAME: &'static str = "notes";

        fn properties() -> &'static [&'static dyn PropertyModel] {
            &Self::PROPERTIES
        }

        fn record(&self) -> &Record {
            &self.record
        }

        fn record_mut(&mut self) -> &mut Record {
            &mut self.record
        }

        fn from_record(record: Record) -> Self {
            Self { record }
        }
    }

    #[test]
    fn lookup_by_column() {
        assert_eq!(Note::column_names(), ["_id", "body"]);
        assert!(Note::property("body").is_some());
        assert!(Note::property("title").is_none());
    }

    #[test]
    fn from_record_keeps_values() {
        let mut record = Record::new();
        record.set(&Note::BODY, "hello".to_string());

        let mut note = Note::from_record(record);
        assert_eq!(note.record().get(&Note::BODY).as_deref(), Some("hello"));

        note.record_mut().clear(&Note::BODY);
        assert!(note.record().is_empty());
    }
}
