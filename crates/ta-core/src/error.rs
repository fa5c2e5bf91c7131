//! Error types for binding, calculation and parsing.
//!
//! Every fallible operation returns one of these structured errors; each
//! variant carries enough detail (positions, expected vs actual values,
//! field and variant names) to build a precise message without inspecting
//! internals.

use core::fmt;

use thiserror::Error;

use crate::kind::ElementKind;
use crate::params::ParamType;

/// Result type alias for buffer binding.
pub type BindResult<T> = core::result::Result<T, BindError>;

/// Result type alias for textual parsing.
pub type ParseResult<T> = core::result::Result<T, ParseError>;

/// Native status code reported by a math library routine.
///
/// Codes and numbering mirror TA-Lib's `TA_RetCode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RetCode {
    /// Routine succeeded.
    Success = 0,
    /// Library used before initialization.
    LibNotInitialize = 1,
    /// A parameter is out of its accepted range.
    BadParam = 2,
    /// Allocation failed.
    AllocErr = 3,
    /// Function group not found.
    GroupNotFound = 4,
    /// Function not found.
    FuncNotFound = 5,
    /// Invalid handle.
    InvalidHandle = 6,
    /// Invalid parameter holder.
    InvalidParamHolder = 7,
    /// Invalid parameter holder type.
    InvalidParamHolderType = 8,
    /// Invalid parameter function.
    InvalidParamFunction = 9,
    /// An input was not supplied.
    InputNotAllInitialize = 10,
    /// An output was not supplied.
    OutputNotAllInitialize = 11,
    /// Start index out of range.
    OutOfRangeStartIndex = 12,
    /// End index out of range.
    OutOfRangeEndIndex = 13,
    /// Invalid list type.
    InvalidListType = 14,
    /// Bad object.
    BadObject = 15,
    /// The routine is not available in this library.
    NotSupported = 16,
    /// Internal library error.
    InternalError = 5000,
    /// Unrecognised status.
    UnknownErr = 0xFFFF,
}

impl RetCode {
    /// Numeric status code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Map a raw status code; unrecognised codes become [`RetCode::UnknownErr`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => RetCode::Success,
            1 => RetCode::LibNotInitialize,
            2 => RetCode::BadParam,
            3 => RetCode::AllocErr,
            4 => RetCode::GroupNotFound,
            5 => RetCode::FuncNotFound,
            6 => RetCode::InvalidHandle,
            7 => RetCode::InvalidParamHolder,
            8 => RetCode::InvalidParamHolderType,
            9 => RetCode::InvalidParamFunction,
            10 => RetCode::InputNotAllInitialize,
            11 => RetCode::OutputNotAllInitialize,
            12 => RetCode::OutOfRangeStartIndex,
            13 => RetCode::OutOfRangeEndIndex,
            14 => RetCode::InvalidListType,
            15 => RetCode::BadObject,
            16 => RetCode::NotSupported,
            5000 => RetCode::InternalError,
            _ => RetCode::UnknownErr,
        }
    }

    /// Whether this code signals success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, RetCode::Success)
    }

    /// TA-Lib symbolic name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RetCode::Success => "TA_SUCCESS",
            RetCode::LibNotInitialize => "TA_LIB_NOT_INITIALIZE",
            RetCode::BadParam => "TA_BAD_PARAM",
            RetCode::AllocErr => "TA_ALLOC_ERR",
            RetCode::GroupNotFound => "TA_GROUP_NOT_FOUND",
            RetCode::FuncNotFound => "TA_FUNC_NOT_FOUND",
            RetCode::InvalidHandle => "TA_INVALID_HANDLE",
            RetCode::InvalidParamHolder => "TA_INVALID_PARAM_HOLDER",
            RetCode::InvalidParamHolderType => "TA_INVALID_PARAM_HOLDER_TYPE",
            RetCode::InvalidParamFunction => "TA_INVALID_PARAM_FUNCTION",
            RetCode::InputNotAllInitialize => "TA_INPUT_NOT_ALL_INITIALIZE",
            RetCode::OutputNotAllInitialize => "TA_OUTPUT_NOT_ALL_INITIALIZE",
            RetCode::OutOfRangeStartIndex => "TA_OUT_OF_RANGE_START_INDEX",
            RetCode::OutOfRangeEndIndex => "TA_OUT_OF_RANGE_END_INDEX",
            RetCode::InvalidListType => "TA_INVALID_LIST_TYPE",
            RetCode::BadObject => "TA_BAD_OBJECT",
            RetCode::NotSupported => "TA_NOT_SUPPORTED",
            RetCode::InternalError => "TA_INTERNAL_ERROR",
            RetCode::UnknownErr => "TA_UNKNOWN_ERR",
        }
    }
}

impl fmt::Display for RetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Which buffer list a binding error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Input series.
    Input,
    /// Output series.
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Input => "input",
            Side::Output => "output",
        })
    }
}

/// Errors raised when caller buffers do not match an indicator's shape.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// Wrong number of input or output series.
    #[error("Arity mismatch: expected {expected} {side} series, got {actual}")]
    ArityMismatch {
        /// Which list is wrong.
        side: Side,
        /// Count required by the shape descriptor.
        expected: usize,
        /// Count supplied.
        actual: usize,
    },

    /// A buffer has the wrong element kind.
    #[error("Kind mismatch at {side} {position}: expected {expected}, got {actual}")]
    KindMismatch {
        /// Which list contains the buffer.
        side: Side,
        /// Zero-based position in that list.
        position: usize,
        /// Kind required by the shape descriptor.
        expected: ElementKind,
        /// Kind supplied.
        actual: ElementKind,
    },

    /// Aligned buffers differ in length.
    #[error("Length mismatch at {side} {position}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Which list contains the buffer.
        side: Side,
        /// Zero-based position in that list.
        position: usize,
        /// Length of the first input series.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
}

/// Errors raised by the calculation engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The math routine reported a non-success status.
    #[error("External routine failed with status {0}")]
    ExternalFailure(RetCode),

    /// The math library has not been initialized.
    #[error("Math library not initialized: call initialize() first")]
    NotInitialized,

    /// An internal invariant was violated. Indicates a programming error.
    #[error("Fatal engine error: {0}")]
    FatalError(String),
}

impl CalcError {
    /// Translate a native failure status into the engine taxonomy.
    #[must_use]
    pub fn from_native(code: RetCode) -> Self {
        match code {
            RetCode::LibNotInitialize => CalcError::NotInitialized,
            code => CalcError::ExternalFailure(code),
        }
    }

    /// Create a fatal error with a message.
    #[must_use]
    pub fn fatal(message: impl Into<String>) -> Self {
        CalcError::FatalError(message.into())
    }
}

/// Errors raised when rebuilding an indicator from raw parameter values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Wrong number of parameter values.
    #[error("{variant} takes {expected} parameters, got {actual}")]
    ParamCount {
        /// Indicator name.
        variant: &'static str,
        /// Parameters declared by the schema.
        expected: usize,
        /// Values supplied.
        actual: usize,
    },

    /// A value has the wrong type for its slot.
    #[error("{variant}.{field}: expected {expected}, got {actual}")]
    ParamType {
        /// Indicator name.
        variant: &'static str,
        /// Field name.
        field: &'static str,
        /// Type declared by the schema.
        expected: ParamType,
        /// Type supplied.
        actual: ParamType,
    },
}

/// Errors raised by the textual codec.
///
/// Variant-level errors carry `expected`, the full grammar of the variant
/// (e.g. `Sma { timeperiod = int }`), and end their message with it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    /// No catalogue entry has this name.
    #[error("Unknown indicator '{name}'")]
    UnknownVariant {
        /// Name as written.
        name: String,
    },

    /// A declared field was not supplied.
    #[error("Missing field '{field}' for {variant}. Expected: {expected}")]
    MissingField {
        /// Indicator name.
        variant: &'static str,
        /// Missing field.
        field: &'static str,
        /// Expected shape.
        expected: String,
    },

    /// A field is not part of the variant's schema.
    #[error("Unknown field '{field}' for {variant}. Expected: {expected}")]
    UnknownField {
        /// Indicator name.
        variant: &'static str,
        /// Field as written.
        field: String,
        /// Expected shape.
        expected: String,
    },

    /// A field was given twice.
    #[error("Duplicate field '{field}' for {variant}. Expected: {expected}")]
    DuplicateField {
        /// Indicator name.
        variant: &'static str,
        /// Repeated field.
        field: &'static str,
        /// Expected shape.
        expected: String,
    },

    /// A value does not fit the field's type.
    #[error("Type mismatch for {variant}.{field}: expected {expected_type}, got '{actual}'. Expected: {expected}")]
    TypeMismatch {
        /// Indicator name.
        variant: &'static str,
        /// Field name.
        field: &'static str,
        /// Declared type.
        expected_type: ParamType,
        /// Offending token.
        actual: String,
        /// Expected shape.
        expected: String,
    },

    /// The text does not follow the grammar.
    #[error("Syntax error at offset {position}: expected {expected}, found {found}")]
    Syntax {
        /// Byte offset into the input.
        position: usize,
        /// What the grammar required there.
        expected: &'static str,
        /// What was found instead.
        found: String,
    },

    /// Parsed values were rejected by the schema.
    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaError),
}

/// Errors raised when loading indicator configuration.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON of the expected layout.
    #[error("Invalid configuration JSON")]
    Json(#[from] serde_json::Error),

    /// An entry's indicator text did not parse.
    #[error("Invalid indicator for '{label}'")]
    Indicator {
        /// Label of the entry.
        label: String,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },
}

/// Any error produced along the parse, bind and calculate path.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// Textual parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Buffers did not match the shape.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// The calculation failed.
    #[error(transparent)]
    Calc(#[from] CalcError),
}
