//! Cell value types

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Text value
    Text(String),

    /// Numeric value, kept at full decimal precision
    Number(Decimal),

    /// Calendar date (no time-of-day component)
    Date(NaiveDate),

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Boolean(true) => Some(Decimal::ONE),
            CellValue::Boolean(false) => Some(Decimal::ZERO),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Date(_) => "date",
            CellValue::Boolean(_) => "boolean",
            CellValue::Error(_) => "error",
        }
    }

    /// Parse the canonical textual form produced by [`fmt::Display`] back
    /// into a typed value.
    ///
    /// Empty text becomes [`CellValue::Empty`], `TRUE`/`FALSE` become
    /// booleans, known error codes become [`CellValue::Error`], ISO
    /// `YYYY-MM-DD` dates and plain decimal numbers become their typed
    /// variants, and anything else is kept as [`CellValue::Text`]. This
    /// never fails.
    pub fn parse_canonical(field: &str) -> CellValue {
        if field.is_empty() {
            return CellValue::Empty;
        }

        match field {
            "TRUE" => return CellValue::Boolean(true),
            "FALSE" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Some(err) = CellError::from_str(field) {
            return CellValue::Error(err);
        }

        if let Ok(date) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
            return CellValue::Date(date);
        }

        // Decimal's FromStr rejects exponent notation, so this only accepts
        // the plain digit sequences the formatter emits.
        if let Ok(n) = field.parse::<Decimal>() {
            return CellValue::Number(n);
        }

        CellValue::text(field)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    /// The canonical textual form of a value.
    ///
    /// Numbers print with their minimal full-precision digit sequence
    /// (never scientific notation), dates as proleptic-Gregorian
    /// `YYYY-MM-DD` regardless of locale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n.normalize()),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(Decimal::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(Decimal::from(n))
    }
}

impl From<Decimal> for CellValue {
    fn from(n: Decimal) -> Self {
        CellValue::Number(n)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// Spreadsheet error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
        }
    }

    /// Parse an error string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "#NULL!" => Some(CellError::Null),
            "#DIV/0!" => Some(CellError::Div0),
            "#VALUE!" => Some(CellError::Value),
            "#REF!" => Some(CellError::Ref),
            "#NAME?" => Some(CellError::Name),
            "#NUM!" => Some(CellError::Num),
            "#N/A" => Some(CellError::Na),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
