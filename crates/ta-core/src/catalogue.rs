//! The indicator catalogue.
//!
//! Every supported TA-Lib function appears exactly once in the table at the
//! bottom of this file. From that single table the [`catalogue!`] macro
//! generates:
//!
//! - [`Indicator`]: one variant per function, carrying its typed parameters;
//! - [`IndicatorKind`]: the fieldless tag of each variant;
//! - the ordered parameter schema ([`IndicatorKind::params`]);
//! - the input/output shape ([`IndicatorKind::shape`]);
//! - the TA-Lib function name and group.
//!
//! The codec, the binding layer and the engine all read these tables, so a
//! new entry is a one-line change here.

use core::fmt;

use crate::error::SchemaError;
use crate::kind::ElementKind;
use crate::params::{MaType, ParamExtract, ParamSpec, ParamType, ParamValue};
use crate::shape::{InputRole, InputSpec, OutputSpec, ShapeDescriptor};

/// TA-Lib function group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// Moving averages and bands drawn over price.
    OverlapStudies,
    /// Oscillators and momentum measures.
    MomentumIndicators,
    /// Volume-weighted flow measures.
    VolumeIndicators,
    /// Range and volatility measures.
    VolatilityIndicators,
    /// Per-bar price combinations.
    PriceTransform,
    /// Hilbert-transform cycle measures.
    CycleIndicators,
    /// Candlestick pattern recognition.
    PatternRecognition,
    /// Rolling statistics and regressions.
    Statistic,
    /// Element-wise math functions.
    MathTransform,
    /// Element-wise and rolling arithmetic.
    MathOperators,
}

impl Group {
    /// Every group, in TA-Lib order.
    pub const ALL: [Group; 10] = [
        Group::OverlapStudies,
        Group::MomentumIndicators,
        Group::VolumeIndicators,
        Group::VolatilityIndicators,
        Group::PriceTransform,
        Group::CycleIndicators,
        Group::PatternRecognition,
        Group::Statistic,
        Group::MathTransform,
        Group::MathOperators,
    ];

    /// Human-readable group name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Group::OverlapStudies => "Overlap Studies",
            Group::MomentumIndicators => "Momentum Indicators",
            Group::VolumeIndicators => "Volume Indicators",
            Group::VolatilityIndicators => "Volatility Indicators",
            Group::PriceTransform => "Price Transform",
            Group::CycleIndicators => "Cycle Indicators",
            Group::PatternRecognition => "Pattern Recognition",
            Group::Statistic => "Statistic Functions",
            Group::MathTransform => "Math Transform",
            Group::MathOperators => "Math Operators",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! param_ty {
    (Int) => { u32 };
    (Real) => { f64 };
    (MaType) => { MaType };
}

/// Sequential typed reads over a parameter list, checked against the schema.
struct Slots<'a> {
    kind: IndicatorKind,
    values: &'a [ParamValue],
    next: usize,
}

impl Slots<'_> {
    fn take<T: ParamExtract>(&mut self) -> Result<T, SchemaError> {
        let specs = self.kind.params();
        let (Some(value), Some(spec)) = (self.values.get(self.next), specs.get(self.next)) else {
            return Err(SchemaError::ParamCount {
                variant: self.kind.name(),
                expected: specs.len(),
                actual: self.values.len(),
            });
        };
        self.next += 1;
        T::extract(value).ok_or(SchemaError::ParamType {
            variant: self.kind.name(),
            field: spec.name,
            expected: spec.ty,
            actual: value.ty(),
        })
    }
}

macro_rules! catalogue {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $fname:literal, $group:ident,
                inputs[$($input:ident),*],
                params{$($field:ident : $pty:ident = $default:expr),*},
                outputs[$($out:ident : $okind:ident),*];
        )*
    ) => {
        /// A fully parameterised indicator.
        ///
        /// One variant per catalogue entry; the fields are the entry's
        /// parameters, in schema order.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum Indicator {
            $(
                $(#[$meta])*
                $variant {
                    $(
                        #[doc = concat!("`", stringify!($field), "` parameter.")]
                        $field: param_ty!($pty),
                    )*
                },
            )*
        }

        /// Tag identifying a catalogue entry without its parameters.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IndicatorKind {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl IndicatorKind {
            /// Every catalogue entry, in table order.
            pub const ALL: &'static [IndicatorKind] = &[$(IndicatorKind::$variant,)*];

            /// Variant name as written in indicator text (e.g. `Sma`).
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(IndicatorKind::$variant => stringify!($variant),)*
                }
            }

            /// TA-Lib function name (e.g. `SMA`).
            #[must_use]
            pub const fn function_name(self) -> &'static str {
                match self {
                    $(IndicatorKind::$variant => $fname,)*
                }
            }

            /// TA-Lib function group.
            #[must_use]
            pub const fn group(self) -> Group {
                match self {
                    $(IndicatorKind::$variant => Group::$group,)*
                }
            }

            /// Ordered parameter schema.
            #[must_use]
            pub fn params(self) -> &'static [ParamSpec] {
                match self {
                    $(
                        IndicatorKind::$variant => {
                            const PARAMS: &[ParamSpec] = &[$(
                                ParamSpec {
                                    name: stringify!($field),
                                    ty: ParamType::$pty,
                                    default: ParamValue::$pty($default),
                                },
                            )*];
                            PARAMS
                        }
                    )*
                }
            }

            /// Input/output shape.
            #[must_use]
            pub fn shape(self) -> &'static ShapeDescriptor {
                match self {
                    $(
                        IndicatorKind::$variant => {
                            static SHAPE: ShapeDescriptor = ShapeDescriptor {
                                inputs: &[$(InputSpec::new(InputRole::$input),)*],
                                outputs: &[$(OutputSpec::new(stringify!($out), ElementKind::$okind),)*],
                            };
                            &SHAPE
                        }
                    )*
                }
            }

            /// The indicator with every parameter at its TA-Lib default.
            #[must_use]
            pub fn default_indicator(self) -> Indicator {
                match self {
                    $(IndicatorKind::$variant => Indicator::$variant { $($field: $default,)* },)*
                }
            }
        }

        impl Indicator {
            /// Tag of this indicator.
            #[must_use]
            pub const fn kind(&self) -> IndicatorKind {
                match self {
                    $(Indicator::$variant { .. } => IndicatorKind::$variant,)*
                }
            }

            /// Parameter values, in schema order.
            #[must_use]
            pub fn params(&self) -> Vec<ParamValue> {
                match *self {
                    $(Indicator::$variant { $($field),* } => vec![$(ParamValue::$pty($field)),*],)*
                }
            }

            /// Rebuild an indicator from parameter values in schema order.
            ///
            /// # Errors
            ///
            /// Returns [`SchemaError`] when the count or any value type does
            /// not match the schema of `kind`.
            pub fn from_params(kind: IndicatorKind, values: &[ParamValue]) -> Result<Self, SchemaError> {
                let expected = kind.params().len();
                if values.len() != expected {
                    return Err(SchemaError::ParamCount {
                        variant: kind.name(),
                        expected,
                        actual: values.len(),
                    });
                }
                let mut slots = Slots { kind, values, next: 0 };
                match kind {
                    $(IndicatorKind::$variant => Ok(Indicator::$variant { $($field: slots.take()?,)* }),)*
                }
            }
        }
    };
}

impl IndicatorKind {
    /// Look up an entry by variant name.
    ///
    /// Tries the exact name first, then the name with its first letter
    /// upper-cased (`sma` finds `Sma`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let exact = Self::ALL.iter().copied().find(|kind| kind.name() == name);
        exact.or_else(|| {
            let mut chars = name.chars();
            let first = chars.next()?;
            if first.is_ascii_uppercase() {
                return None;
            }
            let capitalised: String = first.to_ascii_uppercase().to_string() + chars.as_str();
            Self::ALL.iter().copied().find(|kind| kind.name() == capitalised)
        })
    }

    /// Look up an entry by TA-Lib function name, ignoring ASCII case.
    #[must_use]
    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.function_name().eq_ignore_ascii_case(name))
    }

    /// Entries belonging to `group`, in table order.
    pub fn in_group(group: Group) -> impl Iterator<Item = IndicatorKind> {
        Self::ALL.iter().copied().filter(move |kind| kind.group() == group)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Indicator {
    /// Input/output shape. Depends only on the tag.
    #[must_use]
    pub fn shape(&self) -> &'static ShapeDescriptor {
        self.kind().shape()
    }

    /// Variant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl From<IndicatorKind> for Indicator {
    fn from(kind: IndicatorKind) -> Self {
        kind.default_indicator()
    }
}

catalogue! {
    // Overlap studies

    /// Acceleration Bands.
    Accbands => "ACCBANDS", OverlapStudies,
        inputs[High, Low, Close], params{timeperiod: Int = 20},
        outputs[upperband: Float, middleband: Float, lowerband: Float];
    /// Bollinger Bands.
    Bbands => "BBANDS", OverlapStudies,
        inputs[Real],
        params{timeperiod: Int = 5, nbdevup: Real = 2.0, nbdevdn: Real = 2.0, matype: MaType = MaType::Sma},
        outputs[upperband: Float, middleband: Float, lowerband: Float];
    /// Double Exponential Moving Average.
    Dema => "DEMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Exponential Moving Average.
    Ema => "EMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Hilbert Transform, Instantaneous Trendline.
    HtTrendline => "HT_TRENDLINE", OverlapStudies, inputs[Real], params{}, outputs[real: Float];
    /// Kaufman Adaptive Moving Average.
    Kama => "KAMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Moving average of a selectable type.
    Ma => "MA", OverlapStudies,
        inputs[Real], params{timeperiod: Int = 30, matype: MaType = MaType::Sma}, outputs[real: Float];
    /// MESA Adaptive Moving Average.
    Mama => "MAMA", OverlapStudies,
        inputs[Real], params{fastlimit: Real = 0.5, slowlimit: Real = 0.05}, outputs[mama: Float, fama: Float];
    /// Moving average with a per-bar period.
    Mavp => "MAVP", OverlapStudies,
        inputs[Real, Periods],
        params{minperiod: Int = 2, maxperiod: Int = 30, matype: MaType = MaType::Sma},
        outputs[real: Float];
    /// Midpoint over period.
    Midpoint => "MIDPOINT", OverlapStudies, inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Midpoint price over period.
    Midprice => "MIDPRICE", OverlapStudies,
        inputs[High, Low], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Parabolic SAR.
    Sar => "SAR", OverlapStudies,
        inputs[High, Low], params{acceleration: Real = 0.02, maximum: Real = 0.2}, outputs[real: Float];
    /// Parabolic SAR, extended.
    Sarext => "SAREXT", OverlapStudies,
        inputs[High, Low],
        params{
            startvalue: Real = 0.0,
            offsetonreverse: Real = 0.0,
            accelerationinitlong: Real = 0.02,
            accelerationlong: Real = 0.02,
            accelerationmaxlong: Real = 0.2,
            accelerationinitshort: Real = 0.02,
            accelerationshort: Real = 0.02,
            accelerationmaxshort: Real = 0.2
        },
        outputs[real: Float];
    /// Simple Moving Average.
    Sma => "SMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Triple Exponential Moving Average (T3).
    T3 => "T3", OverlapStudies,
        inputs[Real], params{timeperiod: Int = 5, vfactor: Real = 0.7}, outputs[real: Float];
    /// Triple Exponential Moving Average.
    Tema => "TEMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Triangular Moving Average.
    Trima => "TRIMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Weighted Moving Average.
    Wma => "WMA", OverlapStudies, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];

    // Momentum indicators

    /// Average Directional Movement Index.
    Adx => "ADX", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Average Directional Movement Index Rating.
    Adxr => "ADXR", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Absolute Price Oscillator.
    Apo => "APO", MomentumIndicators,
        inputs[Real],
        params{fastperiod: Int = 12, slowperiod: Int = 26, matype: MaType = MaType::Sma},
        outputs[real: Float];
    /// Aroon.
    Aroon => "AROON", MomentumIndicators,
        inputs[High, Low], params{timeperiod: Int = 14}, outputs[aroondown: Float, aroonup: Float];
    /// Aroon Oscillator.
    Aroonosc => "AROONOSC", MomentumIndicators,
        inputs[High, Low], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Balance Of Power.
    Bop => "BOP", MomentumIndicators, inputs[Open, High, Low, Close], params{}, outputs[real: Float];
    /// Commodity Channel Index.
    Cci => "CCI", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Chande Momentum Oscillator.
    Cmo => "CMO", MomentumIndicators, inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Directional Movement Index.
    Dx => "DX", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Intraday Momentum Index.
    Imi => "IMI", MomentumIndicators,
        inputs[Open, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Moving Average Convergence/Divergence.
    Macd => "MACD", MomentumIndicators,
        inputs[Real],
        params{fastperiod: Int = 12, slowperiod: Int = 26, signalperiod: Int = 9},
        outputs[macd: Float, macdsignal: Float, macdhist: Float];
    /// MACD with controllable moving-average types.
    Macdext => "MACDEXT", MomentumIndicators,
        inputs[Real],
        params{
            fastperiod: Int = 12,
            fastmatype: MaType = MaType::Sma,
            slowperiod: Int = 26,
            slowmatype: MaType = MaType::Sma,
            signalperiod: Int = 9,
            signalmatype: MaType = MaType::Sma
        },
        outputs[macd: Float, macdsignal: Float, macdhist: Float];
    /// MACD with fixed 12/26 periods.
    Macdfix => "MACDFIX", MomentumIndicators,
        inputs[Real], params{signalperiod: Int = 9},
        outputs[macd: Float, macdsignal: Float, macdhist: Float];
    /// Money Flow Index.
    Mfi => "MFI", MomentumIndicators,
        inputs[High, Low, Close, Volume], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Minus Directional Indicator.
    MinusDi => "MINUS_DI", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Minus Directional Movement.
    MinusDm => "MINUS_DM", MomentumIndicators,
        inputs[High, Low], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Momentum.
    Mom => "MOM", MomentumIndicators, inputs[Real], params{timeperiod: Int = 10}, outputs[real: Float];
    /// Plus Directional Indicator.
    PlusDi => "PLUS_DI", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Plus Directional Movement.
    PlusDm => "PLUS_DM", MomentumIndicators,
        inputs[High, Low], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Percentage Price Oscillator.
    Ppo => "PPO", MomentumIndicators,
        inputs[Real],
        params{fastperiod: Int = 12, slowperiod: Int = 26, matype: MaType = MaType::Sma},
        outputs[real: Float];
    /// Rate of change: `((price / prev) - 1) * 100`.
    Roc => "ROC", MomentumIndicators, inputs[Real], params{timeperiod: Int = 10}, outputs[real: Float];
    /// Rate of change percentage: `(price - prev) / prev`.
    Rocp => "ROCP", MomentumIndicators, inputs[Real], params{timeperiod: Int = 10}, outputs[real: Float];
    /// Rate of change ratio: `price / prev`.
    Rocr => "ROCR", MomentumIndicators, inputs[Real], params{timeperiod: Int = 10}, outputs[real: Float];
    /// Rate of change ratio, 100 scale: `(price / prev) * 100`.
    Rocr100 => "ROCR100", MomentumIndicators,
        inputs[Real], params{timeperiod: Int = 10}, outputs[real: Float];
    /// Relative Strength Index.
    Rsi => "RSI", MomentumIndicators, inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Stochastic.
    Stoch => "STOCH", MomentumIndicators,
        inputs[High, Low, Close],
        params{
            fastk_period: Int = 5,
            slowk_period: Int = 3,
            slowk_matype: MaType = MaType::Sma,
            slowd_period: Int = 3,
            slowd_matype: MaType = MaType::Sma
        },
        outputs[slowk: Float, slowd: Float];
    /// Stochastic Fast.
    Stochf => "STOCHF", MomentumIndicators,
        inputs[High, Low, Close],
        params{fastk_period: Int = 5, fastd_period: Int = 3, fastd_matype: MaType = MaType::Sma},
        outputs[fastk: Float, fastd: Float];
    /// Stochastic Relative Strength Index.
    Stochrsi => "STOCHRSI", MomentumIndicators,
        inputs[Real],
        params{
            timeperiod: Int = 14,
            fastk_period: Int = 5,
            fastd_period: Int = 3,
            fastd_matype: MaType = MaType::Sma
        },
        outputs[fastk: Float, fastd: Float];
    /// 1-day rate of change of a triple-smoothed EMA.
    Trix => "TRIX", MomentumIndicators, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Ultimate Oscillator.
    Ultosc => "ULTOSC", MomentumIndicators,
        inputs[High, Low, Close],
        params{timeperiod1: Int = 7, timeperiod2: Int = 14, timeperiod3: Int = 28},
        outputs[real: Float];
    /// Williams' %R.
    Willr => "WILLR", MomentumIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];

    // Volume indicators

    /// Chaikin A/D Line.
    Ad => "AD", VolumeIndicators, inputs[High, Low, Close, Volume], params{}, outputs[real: Float];
    /// Chaikin A/D Oscillator.
    Adosc => "ADOSC", VolumeIndicators,
        inputs[High, Low, Close, Volume],
        params{fastperiod: Int = 3, slowperiod: Int = 10},
        outputs[real: Float];
    /// On Balance Volume.
    Obv => "OBV", VolumeIndicators, inputs[Real, Volume], params{}, outputs[real: Float];

    // Volatility indicators

    /// Average True Range.
    Atr => "ATR", VolatilityIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Normalized Average True Range.
    Natr => "NATR", VolatilityIndicators,
        inputs[High, Low, Close], params{timeperiod: Int = 14}, outputs[real: Float];
    /// True Range.
    Trange => "TRANGE", VolatilityIndicators, inputs[High, Low, Close], params{}, outputs[real: Float];

    // Price transform

    /// Average Deviation.
    Avgdev => "AVGDEV", PriceTransform, inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Average Price.
    Avgprice => "AVGPRICE", PriceTransform,
        inputs[Open, High, Low, Close], params{}, outputs[real: Float];
    /// Median Price.
    Medprice => "MEDPRICE", PriceTransform, inputs[High, Low], params{}, outputs[real: Float];
    /// Typical Price.
    Typprice => "TYPPRICE", PriceTransform, inputs[High, Low, Close], params{}, outputs[real: Float];
    /// Weighted Close Price.
    Wclprice => "WCLPRICE", PriceTransform, inputs[High, Low, Close], params{}, outputs[real: Float];

    // Cycle indicators

    /// Hilbert Transform, Dominant Cycle Period.
    HtDcperiod => "HT_DCPERIOD", CycleIndicators, inputs[Real], params{}, outputs[real: Float];
    /// Hilbert Transform, Dominant Cycle Phase.
    HtDcphase => "HT_DCPHASE", CycleIndicators, inputs[Real], params{}, outputs[real: Float];
    /// Hilbert Transform, Phasor Components.
    HtPhasor => "HT_PHASOR", CycleIndicators,
        inputs[Real], params{}, outputs[inphase: Float, quadrature: Float];
    /// Hilbert Transform, SineWave.
    HtSine => "HT_SINE", CycleIndicators, inputs[Real], params{}, outputs[sine: Float, leadsine: Float];
    /// Hilbert Transform, Trend vs Cycle Mode.
    HtTrendmode => "HT_TRENDMODE", CycleIndicators, inputs[Real], params{}, outputs[integer: Bool];

    // Statistic functions

    /// Beta.
    Beta => "BETA", Statistic, inputs[Real0, Real1], params{timeperiod: Int = 5}, outputs[real: Float];
    /// Pearson's Correlation Coefficient.
    Correl => "CORREL", Statistic,
        inputs[Real0, Real1], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Linear Regression.
    Linearreg => "LINEARREG", Statistic,
        inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Linear Regression Angle.
    LinearregAngle => "LINEARREG_ANGLE", Statistic,
        inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Linear Regression Intercept.
    LinearregIntercept => "LINEARREG_INTERCEPT", Statistic,
        inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Linear Regression Slope.
    LinearregSlope => "LINEARREG_SLOPE", Statistic,
        inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Standard Deviation.
    Stddev => "STDDEV", Statistic,
        inputs[Real], params{timeperiod: Int = 5, nbdev: Real = 1.0}, outputs[real: Float];
    /// Time Series Forecast.
    Tsf => "TSF", Statistic, inputs[Real], params{timeperiod: Int = 14}, outputs[real: Float];
    /// Variance.
    Var => "VAR", Statistic,
        inputs[Real], params{timeperiod: Int = 5, nbdev: Real = 1.0}, outputs[real: Float];

    // Math transform

    /// Vector trigonometric ACos.
    Acos => "ACOS", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric ASin.
    Asin => "ASIN", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric ATan.
    Atan => "ATAN", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector ceiling.
    Ceil => "CEIL", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric Cos.
    Cos => "COS", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric Cosh.
    Cosh => "COSH", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector arithmetic Exp.
    Exp => "EXP", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector floor.
    Floor => "FLOOR", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector natural log.
    Ln => "LN", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector base-10 log.
    Log10 => "LOG10", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric Sin.
    Sin => "SIN", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric Sinh.
    Sinh => "SINH", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector square root.
    Sqrt => "SQRT", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric Tan.
    Tan => "TAN", MathTransform, inputs[Real], params{}, outputs[real: Float];
    /// Vector trigonometric Tanh.
    Tanh => "TANH", MathTransform, inputs[Real], params{}, outputs[real: Float];

    // Math operators

    /// Vector addition.
    Add => "ADD", MathOperators, inputs[Real0, Real1], params{}, outputs[real: Float];
    /// Vector division.
    Div => "DIV", MathOperators, inputs[Real0, Real1], params{}, outputs[real: Float];
    /// Highest value over period.
    Max => "MAX", MathOperators, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Index of the highest value over period.
    Maxindex => "MAXINDEX", MathOperators,
        inputs[Real], params{timeperiod: Int = 30}, outputs[integer: Int];
    /// Lowest value over period.
    Min => "MIN", MathOperators, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];
    /// Index of the lowest value over period.
    Minindex => "MININDEX", MathOperators,
        inputs[Real], params{timeperiod: Int = 30}, outputs[integer: Int];
    /// Lowest and highest values over period.
    Minmax => "MINMAX", MathOperators,
        inputs[Real], params{timeperiod: Int = 30}, outputs[min: Float, max: Float];
    /// Indexes of the lowest and highest values over period.
    Minmaxindex => "MINMAXINDEX", MathOperators,
        inputs[Real], params{timeperiod: Int = 30}, outputs[minidx: Int, maxidx: Int];
    /// Vector multiplication.
    Mult => "MULT", MathOperators, inputs[Real0, Real1], params{}, outputs[real: Float];
    /// Vector subtraction.
    Sub => "SUB", MathOperators, inputs[Real0, Real1], params{}, outputs[real: Float];
    /// Summation over period.
    Sum => "SUM", MathOperators, inputs[Real], params{timeperiod: Int = 30}, outputs[real: Float];

    // Pattern recognition

    /// Two Crows.
    Cdl2Crows => "CDL2CROWS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Three Black Crows.
    Cdl3BlackCrows => "CDL3BLACKCROWS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Three Inside Up/Down.
    Cdl3Inside => "CDL3INSIDE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Three-Line Strike.
    Cdl3LineStrike => "CDL3LINESTRIKE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Three Outside Up/Down.
    Cdl3Outside => "CDL3OUTSIDE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Three Stars In The South.
    Cdl3StarsInSouth => "CDL3STARSINSOUTH", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Three Advancing White Soldiers.
    Cdl3WhiteSoldiers => "CDL3WHITESOLDIERS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Abandoned Baby.
    CdlAbandonedBaby => "CDLABANDONEDBABY", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.3}, outputs[integer: Int];
    /// Advance Block.
    CdlAdvanceBlock => "CDLADVANCEBLOCK", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Belt-hold.
    CdlBeltHold => "CDLBELTHOLD", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Breakaway.
    CdlBreakaway => "CDLBREAKAWAY", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Closing Marubozu.
    CdlClosingMarubozu => "CDLCLOSINGMARUBOZU", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Concealing Baby Swallow.
    CdlConcealBabySwall => "CDLCONCEALBABYSWALL", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Counterattack.
    CdlCounterAttack => "CDLCOUNTERATTACK", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Dark Cloud Cover.
    CdlDarkCloudCover => "CDLDARKCLOUDCOVER", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.5}, outputs[integer: Int];
    /// Doji.
    CdlDoji => "CDLDOJI", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Doji Star.
    CdlDojiStar => "CDLDOJISTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Dragonfly Doji.
    CdlDragonflyDoji => "CDLDRAGONFLYDOJI", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Engulfing Pattern.
    CdlEngulfing => "CDLENGULFING", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Evening Doji Star.
    CdlEveningDojiStar => "CDLEVENINGDOJISTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.3}, outputs[integer: Int];
    /// Evening Star.
    CdlEveningStar => "CDLEVENINGSTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.3}, outputs[integer: Int];
    /// Up/Down-gap side-by-side white lines.
    CdlGapSideSideWhite => "CDLGAPSIDESIDEWHITE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Gravestone Doji.
    CdlGravestoneDoji => "CDLGRAVESTONEDOJI", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Hammer.
    CdlHammer => "CDLHAMMER", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Hanging Man.
    CdlHangingMan => "CDLHANGINGMAN", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Harami Pattern.
    CdlHarami => "CDLHARAMI", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Harami Cross Pattern.
    CdlHaramiCross => "CDLHARAMICROSS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// High-Wave Candle.
    CdlHighWave => "CDLHIGHWAVE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Hikkake Pattern.
    CdlHikkake => "CDLHIKKAKE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Modified Hikkake Pattern.
    CdlHikkakeMod => "CDLHIKKAKEMOD", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Homing Pigeon.
    CdlHomingPigeon => "CDLHOMINGPIGEON", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Identical Three Crows.
    CdlIdentical3Crows => "CDLIDENTICAL3CROWS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// In-Neck Pattern.
    CdlInNeck => "CDLINNECK", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Inverted Hammer.
    CdlInvertedHammer => "CDLINVERTEDHAMMER", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Kicking.
    CdlKicking => "CDLKICKING", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Kicking, bull/bear determined by the longer marubozu.
    CdlKickingByLength => "CDLKICKINGBYLENGTH", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Ladder Bottom.
    CdlLadderBottom => "CDLLADDERBOTTOM", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Long Legged Doji.
    CdlLongLeggedDoji => "CDLLONGLEGGEDDOJI", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Long Line Candle.
    CdlLongLine => "CDLLONGLINE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Marubozu.
    CdlMarubozu => "CDLMARUBOZU", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Matching Low.
    CdlMatchingLow => "CDLMATCHINGLOW", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Mat Hold.
    CdlMatHold => "CDLMATHOLD", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.5}, outputs[integer: Int];
    /// Morning Doji Star.
    CdlMorningDojiStar => "CDLMORNINGDOJISTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.3}, outputs[integer: Int];
    /// Morning Star.
    CdlMorningStar => "CDLMORNINGSTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{penetration: Real = 0.3}, outputs[integer: Int];
    /// On-Neck Pattern.
    CdlOnNeck => "CDLONNECK", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Piercing Pattern.
    CdlPiercing => "CDLPIERCING", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Rickshaw Man.
    CdlRickshawMan => "CDLRICKSHAWMAN", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Rising/Falling Three Methods.
    CdlRiseFall3Methods => "CDLRISEFALL3METHODS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Separating Lines.
    CdlSeparatingLines => "CDLSEPARATINGLINES", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Shooting Star.
    CdlShootingStar => "CDLSHOOTINGSTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Short Line Candle.
    CdlShortLine => "CDLSHORTLINE", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Spinning Top.
    CdlSpinningTop => "CDLSPINNINGTOP", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Stalled Pattern.
    CdlStalledPattern => "CDLSTALLEDPATTERN", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Stick Sandwich.
    CdlStickSandwich => "CDLSTICKSANDWICH", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Takuri (Dragonfly Doji with very long lower shadow).
    CdlTakuri => "CDLTAKURI", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Tasuki Gap.
    CdlTasukiGap => "CDLTASUKIGAP", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Thrusting Pattern.
    CdlThrusting => "CDLTHRUSTING", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Tristar Pattern.
    CdlTristar => "CDLTRISTAR", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Unique 3 River.
    CdlUnique3River => "CDLUNIQUE3RIVER", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Upside Gap Two Crows.
    CdlUpsideGap2Crows => "CDLUPSIDEGAP2CROWS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
    /// Upside/Downside Gap Three Methods.
    CdlXSideGap3Methods => "CDLXSIDEGAP3METHODS", PatternRecognition,
        inputs[Open, High, Low, Close], params{}, outputs[integer: Int];
}
