//! The built-in [`MathLibrary`]: a dispatch table from [`Indicator`]
//! variants to the kernels in this crate.
//!
//! Parameter ranges follow TA-Lib: most periods start at 2; single-bar
//! comparisons (MOM, ROC, DM, DI, ATR, VAR, BETA, CORREL, TRIX, the stochastic
//! smoothing periods and MACD signal periods) accept 1. Everything is capped
//! at 100 000.

use ta_core::{Indicator, IndicatorKind, Input, MathLibrary, Output, RetCode};

use crate::args::{emit_all, period, real, real_in};
use crate::math::{operators, transform, Binary, Unary};
use crate::momentum::{bop, cci, roc, rsi, stoch_rsi, stochastic, ultosc, williams_r};
use crate::pattern::{self, candle::Candles};
use crate::price;
use crate::statistic::{correlation, deviation, regression, Fit};
use crate::trend::{adx, aroon, ema, kama, ma, macd, sma, wma, Direction};
use crate::volatility::{atr, bollinger};
use crate::volume::{ad, mfi, obv};

/// Kernels implemented natively in Rust.
///
/// Needs no global state; [`initialize`](MathLibrary::initialize) always
/// succeeds. Cycle indicators, MAMA, MAVP, the parabolic SARs and most
/// candlestick patterns report [`RetCode::NotSupported`].
///
/// Math transforms are valid from the first bar; out-of-domain inputs give
/// NaN inside the valid range (see [`Unary`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Builtin;

impl Builtin {
    /// Whether `kind` has a kernel here.
    pub fn supports(kind: IndicatorKind) -> bool {
        !matches!(lookback_of(&kind.default_indicator()), Err(RetCode::NotSupported))
    }
}

impl MathLibrary for Builtin {
    fn name(&self) -> &str {
        "builtin"
    }

    fn initialize(&self) -> Result<(), RetCode> {
        tracing::debug!(library = self.name(), "no global state to prepare");
        Ok(())
    }

    fn lookback(&self, indicator: &Indicator) -> Result<usize, RetCode> {
        lookback_of(indicator)
    }

    fn compute(
        &self,
        indicator: &Indicator,
        inputs: &[Input<'_>],
        outputs: &mut [Output<'_>],
    ) -> Result<usize, RetCode> {
        tracing::trace!(indicator = indicator.name(), "computing");
        compute_into(indicator, inputs, outputs)
    }
}

fn lookback_of(indicator: &Indicator) -> Result<usize, RetCode> {
    use Indicator as I;

    Ok(match *indicator {
        // Overlap studies
        I::Accbands { timeperiod } => bollinger::accbands_lookback(period(timeperiod, 2)?),
        I::Bbands { timeperiod, matype, .. } => bollinger::bbands_lookback(period(timeperiod, 2)?, matype)?,
        I::Dema { timeperiod } => ema::dema_lookback(period(timeperiod, 2)?),
        I::Ema { timeperiod } => ema::ema_lookback(period(timeperiod, 2)?),
        I::Kama { timeperiod } => kama::kama_lookback(period(timeperiod, 2)?),
        I::Ma { timeperiod, matype } => ma::ma_lookback(period(timeperiod, 1)?, matype)?,
        I::Midpoint { timeperiod } | I::Midprice { timeperiod } => {
            operators::rolling_lookback(period(timeperiod, 2)?)
        }
        I::Sma { timeperiod } => sma::sma_lookback(period(timeperiod, 2)?),
        I::T3 { timeperiod, vfactor } => {
            real_in(vfactor, 0.0, 1.0)?;
            ema::t3_lookback(period(timeperiod, 2)?)
        }
        I::Tema { timeperiod } => ema::tema_lookback(period(timeperiod, 2)?),
        I::Trima { timeperiod } => sma::trima_lookback(period(timeperiod, 2)?),
        I::Wma { timeperiod } => wma::wma_lookback(period(timeperiod, 2)?),

        // Momentum
        I::Adx { timeperiod } => adx::adx_lookback(period(timeperiod, 2)?),
        I::Adxr { timeperiod } => adx::adxr_lookback(period(timeperiod, 2)?),
        I::Apo { fastperiod, slowperiod, matype } | I::Ppo { fastperiod, slowperiod, matype } => {
            macd::oscillator_lookback(period(fastperiod, 2)?, period(slowperiod, 2)?, matype)?
        }
        I::Aroon { timeperiod } | I::Aroonosc { timeperiod } => aroon::aroon_lookback(period(timeperiod, 2)?),
        I::Bop {} => 0,
        I::Cci { timeperiod } => cci::cci_lookback(period(timeperiod, 2)?),
        I::Cmo { timeperiod } | I::Rsi { timeperiod } => rsi::rsi_lookback(period(timeperiod, 2)?),
        I::Dx { timeperiod } => adx::dx_lookback(period(timeperiod, 2)?),
        I::Imi { timeperiod } => bop::imi_lookback(period(timeperiod, 2)?),
        I::Macd { fastperiod, slowperiod, signalperiod } => {
            macd::macd_lookback(period(fastperiod, 2)?, period(slowperiod, 2)?, period(signalperiod, 1)?)
        }
        I::Macdext {
            fastperiod,
            fastmatype,
            slowperiod,
            slowmatype,
            signalperiod,
            signalmatype,
        } => macd::macdext_lookback(
            (period(fastperiod, 2)?, fastmatype),
            (period(slowperiod, 2)?, slowmatype),
            (period(signalperiod, 1)?, signalmatype),
        )?,
        I::Macdfix { signalperiod } => macd::macdfix_lookback(period(signalperiod, 1)?),
        I::Mfi { timeperiod } => mfi::mfi_lookback(period(timeperiod, 2)?),
        I::MinusDi { timeperiod } | I::PlusDi { timeperiod } => adx::di_lookback(period(timeperiod, 1)?),
        I::MinusDm { timeperiod } | I::PlusDm { timeperiod } => adx::dm_lookback(period(timeperiod, 1)?),
        I::Mom { timeperiod }
        | I::Roc { timeperiod }
        | I::Rocp { timeperiod }
        | I::Rocr { timeperiod }
        | I::Rocr100 { timeperiod } => roc::roc_lookback(period(timeperiod, 1)?),
        I::Stoch {
            fastk_period,
            slowk_period,
            slowk_matype,
            slowd_period,
            slowd_matype,
        } => stochastic::stoch_lookback(
            period(fastk_period, 1)?,
            (period(slowk_period, 1)?, slowk_matype),
            (period(slowd_period, 1)?, slowd_matype),
        )?,
        I::Stochf { fastk_period, fastd_period, fastd_matype } => {
            stochastic::stochf_lookback(period(fastk_period, 1)?, period(fastd_period, 1)?, fastd_matype)?
        }
        I::Stochrsi { timeperiod, fastk_period, fastd_period, fastd_matype } => stoch_rsi::stochrsi_lookback(
            period(timeperiod, 2)?,
            period(fastk_period, 1)?,
            period(fastd_period, 1)?,
            fastd_matype,
        )?,
        I::Trix { timeperiod } => ema::trix_lookback(period(timeperiod, 1)?),
        I::Ultosc { timeperiod1, timeperiod2, timeperiod3 } => ultosc::ultosc_lookback([
            period(timeperiod1, 1)?,
            period(timeperiod2, 1)?,
            period(timeperiod3, 1)?,
        ]),
        I::Willr { timeperiod } => williams_r::willr_lookback(period(timeperiod, 2)?),

        // Volume
        I::Ad {} | I::Obv {} => 0,
        I::Adosc { fastperiod, slowperiod } => ad::adosc_lookback(period(fastperiod, 2)?, period(slowperiod, 2)?),

        // Volatility
        I::Atr { timeperiod } | I::Natr { timeperiod } => atr::atr_lookback(period(timeperiod, 1)?),
        I::Trange {} => atr::trange_lookback(),

        // Price transform
        I::Avgdev { timeperiod } => deviation::deviation_lookback(period(timeperiod, 2)?),
        I::Avgprice {} | I::Medprice {} | I::Typprice {} | I::Wclprice {} => 0,

        // Statistic
        I::Beta { timeperiod } => correlation::beta_lookback(period(timeperiod, 1)?),
        I::Correl { timeperiod } => correlation::correl_lookback(period(timeperiod, 1)?),
        I::Linearreg { timeperiod }
        | I::LinearregAngle { timeperiod }
        | I::LinearregIntercept { timeperiod }
        | I::LinearregSlope { timeperiod }
        | I::Tsf { timeperiod } => regression::regression_lookback(period(timeperiod, 2)?),
        I::Stddev { timeperiod, .. } => deviation::deviation_lookback(period(timeperiod, 2)?),
        I::Var { timeperiod, .. } => deviation::deviation_lookback(period(timeperiod, 1)?),

        // Math
        I::Acos {}
        | I::Asin {}
        | I::Atan {}
        | I::Ceil {}
        | I::Cos {}
        | I::Cosh {}
        | I::Exp {}
        | I::Floor {}
        | I::Ln {}
        | I::Log10 {}
        | I::Sin {}
        | I::Sinh {}
        | I::Sqrt {}
        | I::Tan {}
        | I::Tanh {}
        | I::Add {}
        | I::Div {}
        | I::Mult {}
        | I::Sub {} => 0,
        I::Max { timeperiod }
        | I::Maxindex { timeperiod }
        | I::Min { timeperiod }
        | I::Minindex { timeperiod }
        | I::Minmax { timeperiod }
        | I::Minmaxindex { timeperiod }
        | I::Sum { timeperiod } => operators::rolling_lookback(period(timeperiod, 2)?),

        // Patterns
        I::CdlDoji {} => pattern::doji_lookback(),
        I::CdlEngulfing {} => pattern::engulfing_lookback(),
        I::CdlHarami {} => pattern::harami_lookback(),
        I::CdlHaramiCross {} => pattern::harami_cross_lookback(),

        _ => return Err(RetCode::NotSupported),
    })
}

fn unary(indicator: &Indicator) -> Option<Unary> {
    use Indicator as I;

    Some(match indicator {
        I::Acos {} => Unary::Acos,
        I::Asin {} => Unary::Asin,
        I::Atan {} => Unary::Atan,
        I::Ceil {} => Unary::Ceil,
        I::Cos {} => Unary::Cos,
        I::Cosh {} => Unary::Cosh,
        I::Exp {} => Unary::Exp,
        I::Floor {} => Unary::Floor,
        I::Ln {} => Unary::Ln,
        I::Log10 {} => Unary::Log10,
        I::Sin {} => Unary::Sin,
        I::Sinh {} => Unary::Sinh,
        I::Sqrt {} => Unary::Sqrt,
        I::Tan {} => Unary::Tan,
        I::Tanh {} => Unary::Tanh,
        _ => return None,
    })
}

fn binary(indicator: &Indicator) -> Option<Binary> {
    use Indicator as I;

    Some(match indicator {
        I::Add {} => Binary::Add,
        I::Sub {} => Binary::Sub,
        I::Mult {} => Binary::Mult,
        I::Div {} => Binary::Div,
        _ => return None,
    })
}

fn fit(indicator: &Indicator) -> Option<Fit> {
    use Indicator as I;

    Some(match indicator {
        I::Linearreg { .. } => Fit::Value,
        I::LinearregAngle { .. } => Fit::Angle,
        I::LinearregIntercept { .. } => Fit::Intercept,
        I::LinearregSlope { .. } => Fit::Slope,
        I::Tsf { .. } => Fit::Forecast,
        _ => return None,
    })
}

fn candles<'a>(inputs: &[Input<'a>]) -> Result<Candles<'a>, RetCode> {
    Ok(Candles::new(real(inputs, 0)?, real(inputs, 1)?, real(inputs, 2)?, real(inputs, 3)?))
}

fn one(outputs: &mut [Output<'_>], series: Vec<f64>) -> Result<usize, RetCode> {
    emit_all(outputs, [series])
}

fn ints(outputs: &mut [Output<'_>], series: Vec<i32>) -> Result<usize, RetCode> {
    emit_all(outputs, [series])
}

fn compute_into(indicator: &Indicator, inputs: &[Input<'_>], outputs: &mut [Output<'_>]) -> Result<usize, RetCode> {
    use Indicator as I;

    // Validates every parameter before any input is touched.
    lookback_of(indicator)?;
    let r = |index: usize| real(inputs, index);

    if let Some(op) = unary(indicator) {
        return one(outputs, transform::transform(r(0)?, op));
    }
    if let Some(op) = binary(indicator) {
        return one(outputs, operators::binary(r(0)?, r(1)?, op));
    }

    match *indicator {
        // Overlap studies
        I::Accbands { timeperiod } => {
            let bands = bollinger::accbands(r(0)?, r(1)?, r(2)?, period(timeperiod, 2)?);
            emit_all(outputs, bands.into_array())
        }
        I::Bbands { timeperiod, nbdevup, nbdevdn, matype } => {
            let bands = bollinger::bbands(r(0)?, period(timeperiod, 2)?, nbdevup, nbdevdn, matype)?;
            emit_all(outputs, bands.into_array())
        }
        I::Dema { timeperiod } => one(outputs, ema::dema(r(0)?, period(timeperiod, 2)?)),
        I::Ema { timeperiod } => one(outputs, ema::ema(r(0)?, period(timeperiod, 2)?)),
        I::Kama { timeperiod } => one(outputs, kama::kama(r(0)?, period(timeperiod, 2)?)),
        I::Ma { timeperiod, matype } => one(outputs, ma::ma(r(0)?, period(timeperiod, 1)?, matype)?),
        I::Midpoint { timeperiod } => one(outputs, operators::midpoint(r(0)?, period(timeperiod, 2)?)),
        I::Midprice { timeperiod } => one(outputs, operators::midprice(r(0)?, r(1)?, period(timeperiod, 2)?)),
        I::Sma { timeperiod } => one(outputs, sma::sma(r(0)?, period(timeperiod, 2)?)),
        I::T3 { timeperiod, vfactor } => one(outputs, ema::t3(r(0)?, period(timeperiod, 2)?, vfactor)),
        I::Tema { timeperiod } => one(outputs, ema::tema(r(0)?, period(timeperiod, 2)?)),
        I::Trima { timeperiod } => one(outputs, sma::trima(r(0)?, period(timeperiod, 2)?)),
        I::Wma { timeperiod } => one(outputs, wma::wma(r(0)?, period(timeperiod, 2)?)),

        // Momentum
        I::Adx { timeperiod } => one(outputs, adx::adx(r(0)?, r(1)?, r(2)?, period(timeperiod, 2)?)),
        I::Adxr { timeperiod } => one(outputs, adx::adxr(r(0)?, r(1)?, r(2)?, period(timeperiod, 2)?)),
        I::Apo { fastperiod, slowperiod, matype } => one(
            outputs,
            macd::apo(r(0)?, period(fastperiod, 2)?, period(slowperiod, 2)?, matype)?,
        ),
        I::Aroon { timeperiod } => {
            let lines = aroon::aroon(r(0)?, r(1)?, period(timeperiod, 2)?);
            emit_all(outputs, [lines.down, lines.up])
        }
        I::Aroonosc { timeperiod } => one(outputs, aroon::aroonosc(r(0)?, r(1)?, period(timeperiod, 2)?)),
        I::Bop {} => one(outputs, bop::bop(r(0)?, r(1)?, r(2)?, r(3)?)),
        I::Cci { timeperiod } => one(outputs, cci::cci(r(0)?, r(1)?, r(2)?, period(timeperiod, 2)?)),
        I::Cmo { timeperiod } => one(outputs, rsi::cmo(r(0)?, period(timeperiod, 2)?)),
        I::Dx { timeperiod } => one(outputs, adx::dx(r(0)?, r(1)?, r(2)?, period(timeperiod, 2)?)),
        I::Imi { timeperiod } => one(outputs, bop::imi(r(0)?, r(1)?, period(timeperiod, 2)?)),
        I::Macd { fastperiod, slowperiod, signalperiod } => {
            let out = macd::macd(r(0)?, period(fastperiod, 2)?, period(slowperiod, 2)?, period(signalperiod, 1)?);
            emit_all(outputs, out.into_array())
        }
        I::Macdext {
            fastperiod,
            fastmatype,
            slowperiod,
            slowmatype,
            signalperiod,
            signalmatype,
        } => {
            let out = macd::macdext(
                r(0)?,
                (period(fastperiod, 2)?, fastmatype),
                (period(slowperiod, 2)?, slowmatype),
                (period(signalperiod, 1)?, signalmatype),
            )?;
            emit_all(outputs, out.into_array())
        }
        I::Macdfix { signalperiod } => {
            emit_all(outputs, macd::macdfix(r(0)?, period(signalperiod, 1)?).into_array())
        }
        I::Mfi { timeperiod } => one(outputs, mfi::mfi(r(0)?, r(1)?, r(2)?, r(3)?, period(timeperiod, 2)?)),
        I::MinusDi { timeperiod } => one(
            outputs,
            adx::di(r(0)?, r(1)?, r(2)?, period(timeperiod, 1)?, Direction::Minus),
        ),
        I::MinusDm { timeperiod } => one(outputs, adx::dm(r(0)?, r(1)?, period(timeperiod, 1)?, Direction::Minus)),
        I::Mom { timeperiod } => one(outputs, roc::mom(r(0)?, period(timeperiod, 1)?)),
        I::PlusDi { timeperiod } => one(
            outputs,
            adx::di(r(0)?, r(1)?, r(2)?, period(timeperiod, 1)?, Direction::Plus),
        ),
        I::PlusDm { timeperiod } => one(outputs, adx::dm(r(0)?, r(1)?, period(timeperiod, 1)?, Direction::Plus)),
        I::Ppo { fastperiod, slowperiod, matype } => one(
            outputs,
            macd::ppo(r(0)?, period(fastperiod, 2)?, period(slowperiod, 2)?, matype)?,
        ),
        I::Roc { timeperiod } => one(outputs, roc::roc(r(0)?, period(timeperiod, 1)?)),
        I::Rocp { timeperiod } => one(outputs, roc::rocp(r(0)?, period(timeperiod, 1)?)),
        I::Rocr { timeperiod } => one(outputs, roc::rocr(r(0)?, period(timeperiod, 1)?)),
        I::Rocr100 { timeperiod } => one(outputs, roc::rocr100(r(0)?, period(timeperiod, 1)?)),
        I::Rsi { timeperiod } => one(outputs, rsi::rsi(r(0)?, period(timeperiod, 2)?)),
        I::Stoch {
            fastk_period,
            slowk_period,
            slowk_matype,
            slowd_period,
            slowd_matype,
        } => {
            let out = stochastic::stoch(
                r(0)?,
                r(1)?,
                r(2)?,
                period(fastk_period, 1)?,
                (period(slowk_period, 1)?, slowk_matype),
                (period(slowd_period, 1)?, slowd_matype),
            )?;
            emit_all(outputs, out.into_array())
        }
        I::Stochf { fastk_period, fastd_period, fastd_matype } => {
            let out = stochastic::stochf(
                r(0)?,
                r(1)?,
                r(2)?,
                period(fastk_period, 1)?,
                period(fastd_period, 1)?,
                fastd_matype,
            )?;
            emit_all(outputs, out.into_array())
        }
        I::Stochrsi { timeperiod, fastk_period, fastd_period, fastd_matype } => {
            let out = stoch_rsi::stochrsi(
                r(0)?,
                period(timeperiod, 2)?,
                period(fastk_period, 1)?,
                period(fastd_period, 1)?,
                fastd_matype,
            )?;
            emit_all(outputs, out.into_array())
        }
        I::Trix { timeperiod } => one(outputs, ema::trix(r(0)?, period(timeperiod, 1)?)),
        I::Ultosc { timeperiod1, timeperiod2, timeperiod3 } => {
            let periods = [period(timeperiod1, 1)?, period(timeperiod2, 1)?, period(timeperiod3, 1)?];
            one(outputs, ultosc::ultosc(r(0)?, r(1)?, r(2)?, periods))
        }
        I::Willr { timeperiod } => one(outputs, williams_r::willr(r(0)?, r(1)?, r(2)?, period(timeperiod, 2)?)),

        // Volume
        I::Ad {} => one(outputs, ad::ad(r(0)?, r(1)?, r(2)?, r(3)?)),
        I::Adosc { fastperiod, slowperiod } => one(
            outputs,
            ad::adosc(r(0)?, r(1)?, r(2)?, r(3)?, period(fastperiod, 2)?, period(slowperiod, 2)?),
        ),
        I::Obv {} => one(outputs, obv::obv(r(0)?, r(1)?)),

        // Volatility
        I::Atr { timeperiod } => one(outputs, atr::atr(r(0)?, r(1)?, r(2)?, period(timeperiod, 1)?)),
        I::Natr { timeperiod } => one(outputs, atr::natr(r(0)?, r(1)?, r(2)?, period(timeperiod, 1)?)),
        I::Trange {} => one(outputs, atr::trange(r(0)?, r(1)?, r(2)?)),

        // Price transform
        I::Avgdev { timeperiod } => one(outputs, deviation::avgdev(r(0)?, period(timeperiod, 2)?)),
        I::Avgprice {} => one(outputs, price::avgprice(r(0)?, r(1)?, r(2)?, r(3)?)),
        I::Medprice {} => one(outputs, price::medprice(r(0)?, r(1)?)),
        I::Typprice {} => one(outputs, price::typprice(r(0)?, r(1)?, r(2)?)),
        I::Wclprice {} => one(outputs, price::wclprice(r(0)?, r(1)?, r(2)?)),

        // Statistic
        I::Beta { timeperiod } => one(outputs, correlation::beta(r(0)?, r(1)?, period(timeperiod, 1)?)),
        I::Correl { timeperiod } => one(outputs, correlation::correl(r(0)?, r(1)?, period(timeperiod, 1)?)),
        I::Linearreg { timeperiod }
        | I::LinearregAngle { timeperiod }
        | I::LinearregIntercept { timeperiod }
        | I::LinearregSlope { timeperiod }
        | I::Tsf { timeperiod } => {
            let fit = fit(indicator).ok_or(RetCode::InternalError)?;
            one(outputs, regression::linear_regression(r(0)?, period(timeperiod, 2)?, fit))
        }
        I::Stddev { timeperiod, nbdev } => one(outputs, deviation::stddev(r(0)?, period(timeperiod, 2)?, nbdev)),
        I::Var { timeperiod, .. } => one(outputs, deviation::var(r(0)?, period(timeperiod, 1)?)),

        // Math operators
        I::Max { timeperiod } => one(outputs, operators::max(r(0)?, period(timeperiod, 2)?)),
        I::Min { timeperiod } => one(outputs, operators::min(r(0)?, period(timeperiod, 2)?)),
        I::Sum { timeperiod } => one(outputs, operators::sum(r(0)?, period(timeperiod, 2)?)),
        I::Maxindex { timeperiod } => ints(outputs, operators::maxindex(r(0)?, period(timeperiod, 2)?)),
        I::Minindex { timeperiod } => ints(outputs, operators::minindex(r(0)?, period(timeperiod, 2)?)),
        I::Minmax { timeperiod } => {
            let (data, n) = (r(0)?, period(timeperiod, 2)?);
            emit_all(outputs, [operators::min(data, n), operators::max(data, n)])
        }
        I::Minmaxindex { timeperiod } => {
            let (data, n) = (r(0)?, period(timeperiod, 2)?);
            emit_all(outputs, [operators::minindex(data, n), operators::maxindex(data, n)])
        }

        // Patterns
        I::CdlDoji {} => ints(outputs, pattern::doji(&candles(inputs)?)),
        I::CdlEngulfing {} => ints(outputs, pattern::engulfing(&candles(inputs)?)),
        I::CdlHarami {} => ints(outputs, pattern::harami(&candles(inputs)?)),
        I::CdlHaramiCross {} => ints(outputs, pattern::harami_cross(&candles(inputs)?)),

        _ => Err(RetCode::NotSupported),
    }
}
