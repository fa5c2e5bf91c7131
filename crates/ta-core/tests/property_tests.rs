//! Property-based tests for ta-core.
//!
//! These tests verify invariants of the catalogue, the codec and the binding
//! layer over the whole indicator table.

use proptest::prelude::*;
use ta_core::prelude::*;
use ta_core::{codec, ElementKind};

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Any catalogue entry.
fn any_kind() -> impl Strategy<Value = IndicatorKind> {
    prop::sample::select(IndicatorKind::ALL)
}

/// Any value of the given parameter type.
fn any_value(ty: ParamType) -> BoxedStrategy<ParamValue> {
    match ty {
        ParamType::Int => any::<u32>().prop_map(ParamValue::Int).boxed(),
        ParamType::Real => prop::num::f64::NORMAL.prop_map(ParamValue::Real).boxed(),
        ParamType::MaType => prop::sample::select(MaType::ALL.to_vec())
            .prop_map(ParamValue::MaType)
            .boxed(),
    }
}

/// Any indicator with arbitrary (not necessarily sensible) parameters.
fn any_indicator() -> impl Strategy<Value = Indicator> {
    any_kind().prop_flat_map(|kind| {
        let values: Vec<_> = kind.params().iter().map(|spec| any_value(spec.ty)).collect();
        values.prop_map(move |values| match Indicator::from_params(kind, &values) {
            Ok(indicator) => indicator,
            Err(err) => panic!("generated values rejected: {err}"),
        })
    })
}

fn wrong_kind(kind: ElementKind) -> ElementKind {
    match kind {
        ElementKind::Float => ElementKind::Int,
        ElementKind::Int | ElementKind::Bool => ElementKind::Float,
    }
}

// ============================================================================
// Codec
// ============================================================================

proptest! {
    #[test]
    fn render_then_parse_is_identity(indicator in any_indicator()) {
        let text = codec::render(&indicator);
        prop_assert_eq!(codec::parse(&text)?, indicator);
    }

    #[test]
    fn normalize_is_idempotent(indicator in any_indicator()) {
        let text = codec::render(&indicator);
        prop_assert_eq!(codec::normalize(&text)?, text);
    }

    #[test]
    fn whitespace_between_tokens_is_ignored(indicator in any_indicator(), pad in "[ \t\n]{0,3}") {
        let text = codec::render(&indicator)
            .replace(' ', &pad)
            .replace('{', &format!("{pad}{{{pad}"))
            .replace(';', &format!("{pad};{pad}"));
        prop_assert_eq!(codec::parse(&text)?, indicator);
    }

    #[test]
    fn params_follow_schema(indicator in any_indicator()) {
        let kind = indicator.kind();
        let values = indicator.params();
        prop_assert_eq!(values.len(), kind.params().len());
        for (value, spec) in values.iter().zip(kind.params()) {
            prop_assert_eq!(value.ty(), spec.ty);
        }
        prop_assert_eq!(Indicator::from_params(kind, &values)?, indicator);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,40}") {
        let _ = codec::parse(&text);
    }
}

// ============================================================================
// Binding
// ============================================================================

proptest! {
    #[test]
    fn matching_buffers_always_bind(kind in any_kind(), len in 0usize..64) {
        let shape = kind.shape();
        let inputs: Vec<Vec<f64>> = (0..shape.input_arity()).map(|_| vec![1.0; len]).collect();
        let mut outputs = shape.allocate_outputs(len);

        let call = bind(
            kind.default_indicator(),
            inputs.iter().map(Input::from),
            outputs.iter_mut().map(|o| o.as_output()),
        );
        prop_assert!(call.is_ok());
        prop_assert_eq!(call.map(|c| c.len()).ok(), Some(len));
    }

    #[test]
    fn missing_input_is_arity_mismatch(kind in any_kind(), len in 1usize..16) {
        let shape = kind.shape();
        let inputs: Vec<Vec<f64>> = (1..shape.input_arity()).map(|_| vec![1.0; len]).collect();
        let mut outputs = shape.allocate_outputs(len);

        let err = bind(
            kind.default_indicator(),
            inputs.iter().map(Input::from),
            outputs.iter_mut().map(|o| o.as_output()),
        )
        .unwrap_err();
        prop_assert_eq!(err, BindError::ArityMismatch {
            side: Side::Input,
            expected: shape.input_arity(),
            actual: shape.input_arity() - 1,
        });
    }

    #[test]
    fn wrong_output_kind_is_kind_mismatch(kind in any_kind(), len in 1usize..16, pick in any::<prop::sample::Index>()) {
        let shape = kind.shape();
        let position = pick.index(shape.output_arity());
        let inputs: Vec<Vec<f64>> = (0..shape.input_arity()).map(|_| vec![1.0; len]).collect();
        let mut outputs = shape.allocate_outputs(len);
        let expected = shape.outputs[position].kind;
        outputs[position] = SeriesBuf::for_kind(wrong_kind(expected), len);

        let err = bind(
            kind.default_indicator(),
            inputs.iter().map(Input::from),
            outputs.iter_mut().map(|o| o.as_output()),
        )
        .unwrap_err();
        prop_assert_eq!(err, BindError::KindMismatch {
            side: Side::Output,
            position,
            expected,
            actual: wrong_kind(expected),
        });
    }

    #[test]
    fn short_buffer_is_length_mismatch(kind in any_kind(), len in 1usize..16, pick in any::<prop::sample::Index>()) {
        let shape = kind.shape();
        let position = pick.index(shape.output_arity());
        let inputs: Vec<Vec<f64>> = (0..shape.input_arity()).map(|_| vec![1.0; len]).collect();
        let mut outputs = shape.allocate_outputs(len);
        outputs[position] = SeriesBuf::for_kind(shape.outputs[position].kind, len - 1);

        let err = bind(
            kind.default_indicator(),
            inputs.iter().map(Input::from),
            outputs.iter_mut().map(|o| o.as_output()),
        )
        .unwrap_err();
        prop_assert_eq!(err, BindError::LengthMismatch {
            side: Side::Output,
            position,
            expected: len,
            actual: len - 1,
        });
    }
}

#[test]
fn every_kind_describes_its_shape() {
    for kind in IndicatorKind::ALL {
        let form = codec::expected_form(*kind);
        assert!(form.starts_with(kind.name()), "{form}");
        for spec in kind.params() {
            assert!(form.contains(spec.name), "{form} lacks {}", spec.name);
        }
    }
}
