//! Parameter schema types shared by every catalogue entry.
//!
//! A parameter is either an integer, a float, or a [`MaType`] choice. The
//! catalogue declares an ordered list of [`ParamSpec`] per indicator; the codec
//! and [`Indicator::from_params`](crate::Indicator::from_params) are driven
//! entirely by that list.

use core::fmt;
use core::str::FromStr;

/// Moving-average algorithm selector shared by every indicator that smooths
/// through a configurable average.
///
/// The discriminants match TA-Lib's `TA_MAType` codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MaType {
    /// Simple moving average.
    #[default]
    Sma = 0,
    /// Exponential moving average.
    Ema = 1,
    /// Weighted moving average.
    Wma = 2,
    /// Double exponential moving average.
    Dema = 3,
    /// Triple exponential moving average.
    Tema = 4,
    /// Triangular moving average.
    Trima = 5,
    /// Kaufman adaptive moving average.
    Kama = 6,
    /// MESA adaptive moving average.
    Mama = 7,
    /// Tillson T3 moving average.
    T3 = 8,
}

impl MaType {
    /// Every moving-average type, in TA-Lib code order.
    pub const ALL: [MaType; 9] = [
        MaType::Sma,
        MaType::Ema,
        MaType::Wma,
        MaType::Dema,
        MaType::Tema,
        MaType::Trima,
        MaType::Kama,
        MaType::Mama,
        MaType::T3,
    ];

    /// Canonical upper-case identifier, as written in indicator text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MaType::Sma => "SMA",
            MaType::Ema => "EMA",
            MaType::Wma => "WMA",
            MaType::Dema => "DEMA",
            MaType::Tema => "TEMA",
            MaType::Trima => "TRIMA",
            MaType::Kama => "KAMA",
            MaType::Mama => "MAMA",
            MaType::T3 => "T3",
        }
    }

    /// TA-Lib integer code.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Looks up a moving-average type by identifier, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|ma| ma.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown moving average type '{s}'"))
    }
}

/// Primitive type of one parameter slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Non-negative integer (periods).
    Int,
    /// Floating-point factor.
    Real,
    /// Moving-average selector.
    MaType,
}

impl ParamType {
    /// Placeholder used when describing the expected shape of an indicator.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Real => "float",
            ParamType::MaType => "SMA|EMA|WMA|DEMA|TEMA|TRIMA|KAMA|MAMA|T3",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// A parameter value tagged with its type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// Integer value.
    Int(u32),
    /// Float value.
    Real(f64),
    /// Moving-average selector.
    MaType(MaType),
}

impl ParamValue {
    /// Type of this value.
    #[must_use]
    pub const fn ty(&self) -> ParamType {
        match self {
            ParamValue::Int(_) => ParamType::Int,
            ParamValue::Real(_) => ParamType::Real,
            ParamValue::MaType(_) => ParamType::MaType,
        }
    }
}

impl fmt::Display for ParamValue {
    /// Canonical textual form: plain digits, a decimal literal that always
    /// round-trips, or the bare moving-average identifier.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Real(v) => write!(f, "{v:?}"),
            ParamValue::MaType(v) => f.write_str(v.name()),
        }
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Real(value)
    }
}

impl From<MaType> for ParamValue {
    fn from(value: MaType) -> Self {
        ParamValue::MaType(value)
    }
}

/// Declaration of one parameter of a catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    /// Field name, as written in indicator text.
    pub name: &'static str,
    /// Expected type.
    pub ty: ParamType,
    /// TA-Lib default value.
    pub default: ParamValue,
}

/// Typed extraction from a [`ParamValue`], used to rebuild indicator fields.
pub(crate) trait ParamExtract: Sized {
    fn extract(value: &ParamValue) -> Option<Self>;
}

impl ParamExtract for u32 {
    fn extract(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl ParamExtract for f64 {
    fn extract(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl ParamExtract for MaType {
    fn extract(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::MaType(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ma_type_lookup_ignores_case() {
        assert_eq!(MaType::from_name("ema"), Some(MaType::Ema));
        assert_eq!(MaType::from_name("T3"), Some(MaType::T3));
        assert_eq!(MaType::from_name("t3"), Some(MaType::T3));
        assert_eq!(MaType::from_name("hma"), None);
    }

    #[test]
    fn test_ma_type_codes_follow_talib() {
        for (code, ma) in MaType::ALL.iter().enumerate() {
            assert_eq!(ma.code() as usize, code);
        }
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::Int(20).to_string(), "20");
        assert_eq!(ParamValue::Real(2.0).to_string(), "2.0");
        assert_eq!(ParamValue::Real(0.02).to_string(), "0.02");
        assert_eq!(ParamValue::MaType(MaType::Kama).to_string(), "KAMA");
    }

    #[test]
    fn test_extract_rejects_wrong_type() {
        assert_eq!(u32::extract(&ParamValue::Int(5)), Some(5));
        assert_eq!(u32::extract(&ParamValue::Real(5.0)), None);
        assert_eq!(f64::extract(&ParamValue::MaType(MaType::Sma)), None);
        assert_eq!(MaType::extract(&ParamValue::MaType(MaType::Wma)), Some(MaType::Wma));
    }
}
