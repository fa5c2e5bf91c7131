//! Element kinds of input and output series.

use core::fmt;

/// Data type of the elements of one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    /// `f64` values (prices, oscillators, averages).
    Float,
    /// `i32` values (pattern strength, index lookups).
    Int,
    /// `bool` values (binary signals).
    Bool,
}

impl ElementKind {
    /// Every element kind.
    pub const ALL: [ElementKind; 3] = [ElementKind::Float, ElementKind::Int, ElementKind::Bool];

    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Float => "float",
            ElementKind::Int => "int",
            ElementKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
