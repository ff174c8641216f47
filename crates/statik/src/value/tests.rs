use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use Quantity::*;

fn v(magnitude: i64, exponent: i32, quantity: Quantity) -> Value {
    Value::new(magnitude, exponent, quantity)
}

#[test]
fn add_same_exponent_and_quantity() {
    assert_eq!(v(100, 2, Force).add(v(200, 2, Force)), Ok(v(300, 2, Force)));
}

#[test]
fn add_aligns_to_smaller_exponent() {
    assert_eq!(v(1, 3, Force).add(v(1, 0, Force)), Ok(v(1001, 0, Force)));
    assert_eq!(v(1, 0, Force).add(v(1, 3, Force)), Ok(v(1001, 0, Force)));
}

#[test]
fn add_mismatch_still_computes() {
    let err = v(50, 1, Force).add(v(50, 1, Energy)).unwrap_err();
    assert_eq!(
        err,
        ArithmeticError::QuantityMismatch {
            value: v(100, 1, Invalid),
            lhs: Force,
            rhs: Energy,
        }
    );
    assert_eq!(err.value(), Some(v(100, 1, Invalid)));
}

#[test]
fn invalid_operands_do_not_combine() {
    let err = v(1, 0, Invalid).add(v(2, 0, Invalid)).unwrap_err();
    assert_eq!(err.value(), Some(v(3, 0, Invalid)));
    assert!(matches!(err, ArithmeticError::QuantityMismatch { .. }));
    let err = v(2, 0, Invalid).multiply(v(2, 0, Length)).unwrap_err();
    assert!(matches!(err, ArithmeticError::NoRelationFound { .. }));
}

#[test]
fn subtract_aligns_with_powers_of_ten() {
    // 1e3 − 1e0 = 999e0, not a linear rescale by the exponent gap
    assert_eq!(
        v(1, 3, Length).subtract(v(1, 0, Length)),
        Ok(v(999, 0, Length))
    );
    assert_eq!(
        v(5, -1, Length).subtract(v(3, 1, Length)),
        Ok(v(-295, -1, Length))
    );
    let err = v(5, 0, Length).subtract(v(3, 0, Time)).unwrap_err();
    assert_eq!(err.value(), Some(v(2, 0, Invalid)));
}

#[test]
fn multiply_combines_exponents_and_tags() {
    assert_eq!(
        v(3, 2, Length).multiply(v(4, -1, Length)),
        Ok(v(12, 1, Area))
    );
    assert_eq!(
        v(2, 0, Mass).multiply(v(10, 0, Acceleration)),
        Ok(v(20, 0, Force))
    );
}

#[test]
fn multiply_without_relation_keeps_number() {
    let err = v(3, 1, Area).multiply(v(2, 1, Area)).unwrap_err();
    assert_eq!(err.value(), Some(v(6, 2, Invalid)));
    match err {
        ArithmeticError::NoRelationFound { source, .. } => assert_eq!(
            source,
            RelationError::NoProduct {
                lhs: Area,
                rhs: Area
            }
        ),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn divide_truncates_toward_zero() {
    assert_eq!(v(7, 3, Area).divide(v(2, 1, Length)), Ok(v(3, 2, Length)));
    assert_eq!(v(-7, 0, Area).divide(v(2, 0, Length)), Ok(v(-3, 0, Length)));
}

#[test]
fn divide_without_relation_keeps_number() {
    let err = v(1, 0, Force).divide(v(1, 0, Force)).unwrap_err();
    assert!(matches!(err, ArithmeticError::NoRelationFound { .. }));
    assert_eq!(err.value(), Some(v(1, 0, Invalid)));
}

#[test]
fn divide_by_zero_checked_before_lookup() {
    assert_eq!(
        v(1, 0, Force).divide(v(0, 4, Force)),
        Err(ArithmeticError::DivideByZero)
    );
    assert_eq!(
        v(1, 0, Area).divide(v(0, 0, Length)),
        Err(ArithmeticError::DivideByZero)
    );
    assert_eq!(ArithmeticError::DivideByZero.value(), None);
}

#[test]
fn overflow_is_reported_not_wrapped() {
    assert_eq!(
        v(i64::MAX, 0, Length).add(v(1, 0, Length)),
        Err(ArithmeticError::Overflow)
    );
    assert_eq!(
        v(1, 30, Length).add(v(1, 0, Length)),
        Err(ArithmeticError::Overflow)
    );
    assert_eq!(
        v(i64::MAX, 0, Length).multiply(v(2, 0, Length)),
        Err(ArithmeticError::Overflow)
    );
    assert_eq!(
        v(1, i32::MAX, Length).multiply(v(1, 1, Length)),
        Err(ArithmeticError::Overflow)
    );
    assert_eq!(
        v(i64::MIN, 0, Velocity).divide(v(-1, 0, Length)),
        Err(ArithmeticError::Overflow)
    );
}

#[test]
fn operands_are_untouched() {
    let a = v(1, 3, Force);
    let b = v(1, 0, Force);
    let _ = a.add(b);
    let _ = a.divide(b);
    assert_eq!(a, v(1, 3, Force));
    assert_eq!(b, v(1, 0, Force));
}

#[test]
fn error_display_and_source() {
    use std::error::Error;
    let err = v(1, 0, Force).add(v(1, 0, Length)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "additive operands must have the same physical quantity (force vs length)"
    );
    assert!(err.source().is_none());
    let err = v(1, 0, Force).multiply(v(1, 0, Force)).unwrap_err();
    assert!(err.source().is_some());
}

#[test]
fn chained_sum_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<Value> = (0..200)
        .map(|_| v(rng.gen_range(-1000..1000), rng.gen_range(-3..3), Force))
        .collect();
    let total = values
        .iter()
        .try_fold(v(0, 0, Force), |acc, x| acc.add(*x))
        .unwrap();
    assert_eq!(total.exponent, -3);
    let expected: i64 = values
        .iter()
        .map(|x| x.magnitude * 10i64.pow((x.exponent + 3) as u32))
        .sum();
    assert_eq!(total.magnitude, expected);
}

fn valid_quantity() -> impl Strategy<Value = Quantity> {
    prop::sample::select(Quantity::ALL.to_vec())
}

proptest! {
    #[test]
    fn add_same_exponent_sums_magnitudes(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        e in -6i32..6,
        q in valid_quantity(),
    ) {
        let sum = v(a, e, q).add(v(b, e, q)).unwrap();
        prop_assert_eq!(sum, v(a + b, e, q));
    }

    #[test]
    fn subtract_undoes_add(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        ea in -6i32..6,
        eb in -6i32..6,
        q in valid_quantity(),
    ) {
        let (x, y) = (v(a, ea, q), v(b, eb, q));
        let back = x.add(y).unwrap().subtract(y).unwrap();
        prop_assert_eq!(back.exponent, ea.min(eb));
        prop_assert_eq!(back.quantity, q);
        prop_assert_eq!(back.magnitude, a * 10i64.pow((ea - back.exponent) as u32));
    }

    #[test]
    fn mismatch_reports_and_computes(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        e in -6i32..6,
        qa in valid_quantity(),
        qb in valid_quantity(),
    ) {
        prop_assume!(qa != qb);
        let err = v(a, e, qa).add(v(b, e, qb)).unwrap_err();
        prop_assert_eq!(err.value(), Some(v(a + b, e, Invalid)));
        let err = v(a, e, qa).subtract(v(b, e, qb)).unwrap_err();
        prop_assert_eq!(err.value(), Some(v(a - b, e, Invalid)));
    }

    #[test]
    fn multiply_number_independent_of_tags(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        ea in -50i32..50,
        eb in -50i32..50,
        qa in valid_quantity(),
        qb in valid_quantity(),
    ) {
        let got = match v(a, ea, qa).multiply(v(b, eb, qb)) {
            Ok(x) => x,
            Err(e) => e.value().unwrap(),
        };
        prop_assert_eq!(got.magnitude, a * b);
        prop_assert_eq!(got.exponent, ea + eb);
        prop_assert_eq!(got.quantity.is_valid(), product_quantity(qa, qb).is_ok());
    }
}
