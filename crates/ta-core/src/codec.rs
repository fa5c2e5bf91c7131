//! Textual form of an [`Indicator`].
//!
//! ```text
//! indicator := name ( "(" ")" | "{" [ field { ";" field } [ ";" ] ] "}" )
//! field     := name "=" value
//! ```
//!
//! Whitespace is allowed between any two tokens. Fields may appear in any
//! order but each must appear exactly once. Values are plain digits for
//! integer fields, decimal literals for float fields (an integer literal is
//! accepted) and a moving-average identifier such as `EMA` (any case) for
//! `matype` fields.
//!
//! The indicator name is matched exactly first, then with its first letter
//! upper-cased, then against the TA-Lib function name (`SMA`).
//!
//! Rendering always produces the canonical form: `Name()` for indicators
//! without parameters, otherwise `Name { a = 1; b = 2.0 }` with fields in
//! schema order. Parsing the rendered text yields the same indicator.
//!
//! # Example
//!
//! ```rust
//! use ta_core::{codec, Indicator};
//!
//! let sma: Indicator = "sma{timeperiod=20}".parse().unwrap();
//! assert_eq!(sma, Indicator::Sma { timeperiod: 20 });
//! assert_eq!(codec::render(&sma), "Sma { timeperiod = 20 }");
//! ```

use core::fmt;
use core::str::FromStr;

use crate::catalogue::{Indicator, IndicatorKind};
use crate::error::{ParseError, ParseResult};
use crate::params::{MaType, ParamType, ParamValue};

/// Parse indicator text.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first problem found: malformed text,
/// an unknown indicator, an unknown or repeated field, a value of the wrong
/// type, or (in schema order) the first missing field.
pub fn parse(text: &str) -> ParseResult<Indicator> {
    let mut cursor = Cursor::new(text);

    cursor.skip_ws();
    let name = cursor.ident("indicator name")?;
    let kind = lookup(name).ok_or_else(|| ParseError::UnknownVariant {
        name: name.to_string(),
    })?;

    cursor.skip_ws();
    let fields = match cursor.peek() {
        Some('(') => {
            cursor.bump();
            cursor.skip_ws();
            cursor.expect(')', "')'")?;
            Vec::new()
        }
        Some('{') => {
            cursor.bump();
            cursor.fields()?
        }
        _ => return Err(cursor.error("'(' or '{'")),
    };

    cursor.skip_ws();
    if !cursor.at_end() {
        return Err(cursor.error("end of input"));
    }

    build(kind, &fields)
}

/// Canonical text of an indicator.
#[must_use]
pub fn render(indicator: &Indicator) -> String {
    indicator.to_string()
}

/// Parse then re-render, producing the canonical form.
///
/// # Errors
///
/// Returns the [`ParseError`] of [`parse`].
pub fn normalize(text: &str) -> ParseResult<String> {
    parse(text).map(|indicator| render(&indicator))
}

/// The grammar of one indicator, with a type placeholder per field.
///
/// `Sma { timeperiod = int }`, or `Acos()` when there are no parameters.
#[must_use]
pub fn expected_form(kind: IndicatorKind) -> String {
    let params = kind.params();
    if params.is_empty() {
        return format!("{}()", kind.name());
    }
    let fields: Vec<String> = params
        .iter()
        .map(|spec| format!("{} = {}", spec.name, spec.ty.placeholder()))
        .collect();
    format!("{} {{ {} }}", kind.name(), fields.join("; "))
}

fn lookup(name: &str) -> Option<IndicatorKind> {
    IndicatorKind::from_name(name).or_else(|| IndicatorKind::from_function_name(name))
}

/// A `name = value` pair as written.
struct Field<'s> {
    name: &'s str,
    value: &'s str,
}

fn build(kind: IndicatorKind, fields: &[Field<'_>]) -> ParseResult<Indicator> {
    let specs = kind.params();
    let mut slots: Vec<Option<ParamValue>> = vec![None; specs.len()];

    for field in fields {
        let Some(index) = specs.iter().position(|spec| spec.name == field.name) else {
            return Err(ParseError::UnknownField {
                variant: kind.name(),
                field: field.name.to_string(),
                expected: expected_form(kind),
            });
        };
        let spec = &specs[index];
        if slots[index].is_some() {
            return Err(ParseError::DuplicateField {
                variant: kind.name(),
                field: spec.name,
                expected: expected_form(kind),
            });
        }
        let value = parse_value(spec.ty, field.value).ok_or_else(|| ParseError::TypeMismatch {
            variant: kind.name(),
            field: spec.name,
            expected_type: spec.ty,
            actual: field.value.to_string(),
            expected: expected_form(kind),
        })?;
        slots[index] = Some(value);
    }

    let mut values = Vec::with_capacity(specs.len());
    for (spec, slot) in specs.iter().zip(slots) {
        let value = slot.ok_or_else(|| ParseError::MissingField {
            variant: kind.name(),
            field: spec.name,
            expected: expected_form(kind),
        })?;
        values.push(value);
    }

    Ok(Indicator::from_params(kind, &values)?)
}

fn parse_value(ty: ParamType, token: &str) -> Option<ParamValue> {
    match ty {
        ParamType::Int => parse_int(token).map(ParamValue::Int),
        ParamType::Real => parse_real(token).map(ParamValue::Real),
        ParamType::MaType => MaType::from_name(token).map(ParamValue::MaType),
    }
}

fn parse_int(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_real(token: &str) -> Option<f64> {
    let literal = token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !literal || !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

struct Cursor<'s> {
    text: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn new(text: &'s str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'s str {
        self.text.get(self.pos..).unwrap_or("")
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.rest().is_empty()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char, expected: &'static str) -> ParseResult<()> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// `[A-Za-z_][A-Za-z0-9_]*`
    fn ident(&mut self, expected: &'static str) -> ParseResult<&'s str> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.bump(),
            _ => return Err(self.error(expected)),
        }
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        Ok(&self.text[start..self.pos])
    }

    /// Everything up to whitespace or a delimiter.
    fn value_token(&mut self) -> ParseResult<&'s str> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && !matches!(c, ';' | '{' | '}' | '(' | ')' | '='))
        {
            self.bump();
        }
        if self.pos == start {
            return Err(self.error("value"));
        }
        Ok(&self.text[start..self.pos])
    }

    /// Field list after `{`, through the closing `}`.
    fn fields(&mut self) -> ParseResult<Vec<Field<'s>>> {
        let mut fields = Vec::new();
        loop {
            self.skip_ws();
            if self.eat('}') {
                return Ok(fields);
            }

            let name = self.ident("field name or '}'")?;
            self.skip_ws();
            self.expect('=', "'='")?;
            self.skip_ws();
            let value = self.value_token()?;
            fields.push(Field { name, value });

            self.skip_ws();
            if self.eat('}') {
                return Ok(fields);
            }
            self.expect(';', "';' or '}'")?;
        }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        let found = match self.peek() {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        };
        ParseError::Syntax {
            position: self.pos,
            expected,
            found,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specs = self.kind().params();
        if specs.is_empty() {
            return write!(f, "{}()", self.name());
        }
        write!(f, "{} {{ ", self.name())?;
        for (i, (spec, value)) in specs.iter().zip(self.params()).enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} = {}", spec.name, value)?;
        }
        f.write_str(" }")
    }
}

impl FromStr for Indicator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Indicator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Indicator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}
