use std::fmt;

///
/// ErrorList
///
/// Flat list of validation messages collected while walking a spec.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorList {
    messages: Vec<String>,
}

impl ErrorList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the list, returning `Ok` when nothing was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

/// Record a formatted message on an `ErrorList`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}
