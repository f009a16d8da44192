//! Property-based tests for digit-string arithmetic.
//!
//! Results are checked against `dashu`'s `UBig` parsed from the same digits.

#[cfg(test)]
mod tests {
    use dashu::integer::UBig;
    use proptest::prelude::*;

    use crate::{add, drop_leading_zeros, multiply, subtract, Engine, EngineConfig, DIGITS};

    // Strategy for generating a base
    fn base() -> impl Strategy<Value = u32> {
        2u32..=36
    }

    // Strategy for generating a digit string in `base`, leading zeros allowed
    fn digits(base: u32) -> impl Strategy<Value = String> {
        prop::collection::vec(0..base, 1..40).prop_map(|values| {
            values
                .into_iter()
                .map(|v| char::from(DIGITS[v as usize]))
                .collect::<String>()
        })
    }

    fn two_operands() -> impl Strategy<Value = (u32, String, String)> {
        base().prop_flat_map(|b| (Just(b), digits(b), digits(b)))
    }

    fn three_operands() -> impl Strategy<Value = (u32, String, String, String)> {
        base().prop_flat_map(|b| (Just(b), digits(b), digits(b), digits(b)))
    }

    fn value(base: u32, s: &str) -> UBig {
        UBig::from_str_radix(s, base).unwrap()
    }

    fn render(base: u32, n: &UBig) -> String {
        n.in_radix(base).to_string()
    }

    fn is_normalized(s: &str) -> bool {
        !s.is_empty() && (s == "0" || !s.starts_with('0'))
    }

    proptest! {
        // Agreement with an independent implementation

        #[test]
        fn add_matches_ubig((b, x, y) in two_operands()) {
            let sum = add(b, &x, &y).unwrap();
            prop_assert_eq!(value(b, &sum), value(b, &x) + value(b, &y));
            prop_assert_eq!(sum, render(b, &(value(b, &x) + value(b, &y))));
        }

        #[test]
        fn subtract_matches_ubig((b, x, y) in two_operands()) {
            let (x, y) = if value(b, &x) >= value(b, &y) { (x, y) } else { (y, x) };
            let diff = subtract(b, &x, &y).unwrap();
            prop_assert_eq!(diff, render(b, &(value(b, &x) - value(b, &y))));
        }

        #[test]
        fn multiply_matches_ubig((b, x, y) in two_operands()) {
            let product = multiply(b, &x, &y).unwrap();
            prop_assert_eq!(product, render(b, &(value(b, &x) * value(b, &y))));
        }

        #[test]
        fn checked_subtract_rejects_negative((b, x, y) in two_operands()) {
            prop_assume!(value(b, &x) < value(b, &y));
            prop_assert!(subtract(b, &x, &y).is_err());
            prop_assert!(Engine::new(EngineConfig::default().with_checked_subtraction(false))
                .subtract(b, &x, &y)
                .is_ok());
        }

        // Algebraic laws

        #[test]
        fn add_commutative((b, x, y) in two_operands()) {
            prop_assert_eq!(add(b, &x, &y).unwrap(), add(b, &y, &x).unwrap());
        }

        #[test]
        fn add_associative((b, x, y, z) in three_operands()) {
            let left = add(b, &add(b, &x, &y).unwrap(), &z).unwrap();
            let right = add(b, &x, &add(b, &y, &z).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_commutative((b, x, y) in two_operands()) {
            prop_assert_eq!(multiply(b, &x, &y).unwrap(), multiply(b, &y, &x).unwrap());
        }

        #[test]
        fn distributive((b, x, y, z) in three_operands()) {
            let left = multiply(b, &x, &add(b, &y, &z).unwrap()).unwrap();
            let right = add(
                b,
                &multiply(b, &x, &y).unwrap(),
                &multiply(b, &x, &z).unwrap(),
            )
            .unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn identities((b, x, _y) in two_operands()) {
            let normalized = drop_leading_zeros(&x);
            prop_assert_eq!(add(b, &x, "0").unwrap(), normalized);
            prop_assert_eq!(multiply(b, &x, "1").unwrap(), normalized);
            prop_assert_eq!(multiply(b, &x, "0").unwrap(), "0");
            prop_assert_eq!(subtract(b, &x, &x).unwrap(), "0");
        }

        #[test]
        fn subtract_inverts_add((b, x, y) in two_operands()) {
            let (x, y) = if value(b, &x) >= value(b, &y) { (x, y) } else { (y, x) };
            let diff = subtract(b, &x, &y).unwrap();
            prop_assert_eq!(add(b, &diff, &y).unwrap(), drop_leading_zeros(&x));
        }

        // Normalization

        #[test]
        fn leading_zeros_are_ignored((b, x, y) in two_operands(), pad in 0usize..5) {
            let padded = format!("{}{x}", "0".repeat(pad));
            prop_assert_eq!(add(b, &padded, &y).unwrap(), add(b, &x, &y).unwrap());
            prop_assert_eq!(multiply(b, &padded, &y).unwrap(), multiply(b, &x, &y).unwrap());
        }

        #[test]
        fn outputs_are_normalized((b, x, y) in two_operands()) {
            prop_assert!(is_normalized(&add(b, &x, &y).unwrap()));
            prop_assert!(is_normalized(&multiply(b, &x, &y).unwrap()));
            let (x, y) = if value(b, &x) >= value(b, &y) { (x, y) } else { (y, x) };
            prop_assert!(is_normalized(&subtract(b, &x, &y).unwrap()));
        }

        #[test]
        fn drop_leading_zeros_idempotent(s in "[0-9a-z]{0,24}") {
            let once = drop_leading_zeros(&s);
            prop_assert_eq!(drop_leading_zeros(once), once);
        }
    }
}
