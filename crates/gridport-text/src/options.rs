//! Delimiter and document options

/// Field delimiter selection
///
/// Chosen once per export/import operation and fixed for the whole
/// document; the reader never sniffs it from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterMode {
    /// Fields separated by commas
    Csv,
    /// Fields separated by tabs
    Tab,
}

impl DelimiterMode {
    /// The field delimiter character for this mode
    pub fn delimiter(&self) -> char {
        match self {
            DelimiterMode::Csv => ',',
            DelimiterMode::Tab => '\t',
        }
    }

    /// The field delimiter as a byte (both delimiters are ASCII)
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter() as u8
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

/// Options for writing delimited documents
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field delimiter mode (default: CSV)
    pub mode: DelimiterMode,
    /// Line terminator (default: CRLF)
    pub line_terminator: LineTerminator,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            mode: DelimiterMode::Csv,
            line_terminator: LineTerminator::CRLF,
        }
    }
}

/// Options for reading delimited documents
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field delimiter mode (default: CSV)
    pub mode: DelimiterMode,
    /// Parse fields back into typed values (default: true); when false,
    /// every non-empty field is kept as text
    pub infer_types: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            mode: DelimiterMode::Csv,
            infer_types: true,
        }
    }
}

impl WriteOptions {
    /// Options for the given delimiter mode with the default terminator
    pub fn with_mode(mode: DelimiterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl ReadOptions {
    /// Options for the given delimiter mode with type inference enabled
    pub fn with_mode(mode: DelimiterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
