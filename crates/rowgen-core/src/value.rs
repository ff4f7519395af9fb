use serde::{Deserialize, Serialize};

///
/// Value
///
/// A stored column value. Variants follow SQLite storage classes; booleans
/// are stored as integers.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Extract the literal of a `DEFAULT` clause from a column constraint.
    ///
    /// Only literal defaults are understood (integers, reals, quoted text,
    /// `NULL`, `TRUE`/`FALSE`); expressions such as `DEFAULT (1 + 1)` or
    /// `DEFAULT CURRENT_TIMESTAMP` yield `None`.
    #[must_use]
    pub fn parse_default(constraint: &str) -> Option<Self> {
        const KEYWORD: &str = "DEFAULT";

        // ASCII upper-casing keeps byte offsets aligned with `constraint`
        let upper = constraint.to_ascii_uppercase();
        let pos = find_keyword(&upper, KEYWORD)?;

        parse_literal(constraint[pos + KEYWORD.len()..].trim_start())
    }
}

// find a keyword as a whole word
fn find_keyword(haystack: &str, keyword: &str) -> Option<usize> {
    haystack.match_indices(keyword).map(|(i, _)| i).find(|&i| {
        let before = haystack[..i].chars().next_back();
        let after = haystack[i + keyword.len()..].chars().next();

        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse_literal(rest: &str) -> Option<Value> {
    if let Some(quoted) = rest.strip_prefix('\'') {
        return parse_quoted(quoted).map(Value::Text);
    }

    let token = rest
        .split(|c: char| c.is_whitespace() || c == ',' || c == ')')
        .next()
        .filter(|t| !t.is_empty())?;

    match token.to_ascii_uppercase().as_str() {
        "NULL" => Some(Value::Null),
        "TRUE" => Some(Value::Integer(1)),
        "FALSE" => Some(Value::Integer(0)),
        _ => token
            .parse::<i64>()
            .map(Value::Integer)
            .ok()
            .or_else(|| token.parse::<f64>().ok().map(Value::Real)),
    }
}

// body of a single-quoted SQL string; '' is an escaped quote
fn parse_quoted(body: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\'' {
            out.push(c);
        } else if chars.peek() == Some(&'\'') {
            chars.next();
            out.push('\'');
        } else {
            return Some(out);
        }
    }

    // unterminated
    None
}

///
/// TESTS
///
