use crate::value::Value;
use std::{fmt, marker::PhantomData};

///
/// PropertyValue
///
/// Rust value types a column can hold, with their storage conversion.
///

pub trait PropertyValue: Sized {
    const SQL_TYPE: &'static str;

    fn into_value(self) -> Value;

    /// Read a stored value, `None` if it is null or of another storage class.
    fn from_value(value: &Value) -> Option<Self>;
}

impl PropertyValue for i32 {
    const SQL_TYPE: &'static str = "INTEGER";

    fn into_value(self) -> Value {
        Value::Integer(i64::from(self))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(v) => Self::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl PropertyValue for i64 {
    const SQL_TYPE: &'static str = "INTEGER";

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyValue for f64 {
    const SQL_TYPE: &'static str = "REAL";

    fn into_value(self) -> Value {
        Value::Real(self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Real(v) => Some(*v),
            Value::Integer(v) => Some(*v as Self),
            _ => None,
        }
    }
}

impl PropertyValue for bool {
    const SQL_TYPE: &'static str = "INTEGER";

    fn into_value(self) -> Value {
        Value::Integer(i64::from(self))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(v) => Some(*v != 0),
            _ => None,
        }
    }
}

impl PropertyValue for String {
    const SQL_TYPE: &'static str = "TEXT";

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl PropertyValue for Vec<u8> {
    const SQL_TYPE: &'static str = "BLOB";

    fn into_value(self) -> Value {
        Value::Blob(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Blob(v) => Some(v.clone()),
            _ => None,
        }
    }
}

///
/// PropertyModel
///
/// Type-erased view of a property, used for the generated `PROPERTIES`
/// array and anything that walks a model's columns.
///

pub trait PropertyModel {
    /// Column name.
    fn name(&self) -> &'static str;

    /// SQL constraint expression, possibly empty.
    fn constraint(&self) -> &'static str;

    fn sql_type(&self) -> &'static str;

    /// Literal from the constraint's `DEFAULT` clause, if any.
    fn default_value(&self) -> Option<Value> {
        Value::parse_default(self.constraint())
    }
}

///
/// Property
///
/// A typed column descriptor. Generated models declare one associated
/// constant per column; accessors read and write through it.
///

pub struct Property<T> {
    name: &'static str,
    constraint: &'static str,
    _marker: PhantomData<fn() -> T>,
}

pub type BlobProperty = Property<Vec<u8>>;
pub type BooleanProperty = Property<bool>;
pub type IntegerProperty = Property<i32>;
pub type LongProperty = Property<i64>;
pub type RealProperty = Property<f64>;
pub type TextProperty = Property<String>;

impl<T> Property<T> {
    #[must_use]
    pub const fn new(name: &'static str, constraint: &'static str) -> Self {
        Self {
            name,
            constraint,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn constraint(&self) -> &'static str {
        self.constraint
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("constraint", &self.constraint)
            .finish()
    }
}

impl<T: PropertyValue> PropertyModel for Property<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn constraint(&self) -> &'static str {
        self.constraint
    }

    fn sql_type(&self) -> &'static str {
        T::SQL_TYPE
    }
}

///
/// TESTS
///
