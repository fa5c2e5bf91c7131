//! Shape descriptors: the fixed input/output signature of an indicator.

use core::fmt;

use crate::kind::ElementKind;
use crate::series::SeriesBuf;

/// Semantic role of an input series.
///
/// Roles let callers (and the CLI) map OHLCV columns onto an indicator's
/// inputs without knowing the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// Generic real-valued series.
    Real,
    /// First operand of a two-series function.
    Real0,
    /// Second operand of a two-series function.
    Real1,
    /// Per-bar period series (variable-period moving average).
    Periods,
    /// Opening prices.
    Open,
    /// High prices.
    High,
    /// Low prices.
    Low,
    /// Closing prices.
    Close,
    /// Traded volume.
    Volume,
}

impl InputRole {
    /// Input name, following TA-Lib naming.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            InputRole::Real => "real",
            InputRole::Real0 => "real0",
            InputRole::Real1 => "real1",
            InputRole::Periods => "periods",
            InputRole::Open => "open",
            InputRole::High => "high",
            InputRole::Low => "low",
            InputRole::Close => "close",
            InputRole::Volume => "volume",
        }
    }

    /// Element kind of series in this role.
    #[must_use]
    pub const fn kind(self) -> ElementKind {
        ElementKind::Float
    }
}

/// One position of an indicator's input list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSpec {
    /// Role of the series.
    pub role: InputRole,
    /// Expected element kind.
    pub kind: ElementKind,
}

impl InputSpec {
    /// Input spec whose kind is implied by the role.
    #[must_use]
    pub const fn new(role: InputRole) -> Self {
        Self {
            role,
            kind: role.kind(),
        }
    }

    /// Input name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.role.name()
    }
}

/// One position of an indicator's output list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSpec {
    /// Output name, following TA-Lib naming.
    pub name: &'static str,
    /// Element kind written by the indicator.
    pub kind: ElementKind,
}

impl OutputSpec {
    /// Create an output spec.
    #[must_use]
    pub const fn new(name: &'static str, kind: ElementKind) -> Self {
        Self { name, kind }
    }
}

/// Input/output signature of one catalogue entry.
///
/// Fully determined by the indicator tag; parameter values never change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeDescriptor {
    /// Ordered inputs.
    pub inputs: &'static [InputSpec],
    /// Ordered outputs.
    pub outputs: &'static [OutputSpec],
}

impl ShapeDescriptor {
    /// Number of input series.
    #[must_use]
    pub const fn input_arity(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output series.
    #[must_use]
    pub const fn output_arity(&self) -> usize {
        self.outputs.len()
    }

    /// Element kinds of the inputs, in order.
    pub fn input_kinds(&self) -> impl Iterator<Item = ElementKind> + '_ {
        self.inputs.iter().map(|input| input.kind)
    }

    /// Element kinds of the outputs, in order.
    pub fn output_kinds(&self) -> impl Iterator<Item = ElementKind> + '_ {
        self.outputs.iter().map(|output| output.kind)
    }

    /// Whether any input has the given role.
    #[must_use]
    pub fn requires(&self, role: InputRole) -> bool {
        self.inputs.iter().any(|input| input.role == role)
    }

    /// One fill-initialised buffer per output, each `len` long.
    #[must_use]
    pub fn allocate_outputs(&self, len: usize) -> Vec<SeriesBuf> {
        self.output_kinds()
            .map(|kind| SeriesBuf::for_kind(kind, len))
            .collect()
    }

    /// Position of the named output.
    #[must_use]
    pub fn output_index(&self, name: &str) -> Option<usize> {
        self.outputs.iter().position(|output| output.name == name)
    }
}

impl fmt::Display for ShapeDescriptor {
    /// Renders as `(high: float, low: float) -> (real: float)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", input.name(), input.kind)?;
        }
        f.write_str(") -> (")?;
        for (i, output) in self.outputs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", output.name, output.kind)?;
        }
        f.write_str(")")
    }
}
