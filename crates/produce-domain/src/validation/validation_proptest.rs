//! Property-based tests for field validation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::model::Produce;
    use crate::validation::{
        canonicalize_price, canonicalize_record, normalize_code, validate_code, validate_name,
        validate_price, validate_record,
    };

    /// Strategy to generate well-formed produce codes in mixed case
    fn valid_code_strategy() -> impl Strategy<Value = String> {
        (
            "[A-Za-z0-9]{4}",
            "[A-Za-z0-9]{4}",
            "[A-Za-z0-9]{4}",
            "[A-Za-z0-9]{4}",
        )
            .prop_map(|(a, b, c, d)| format!("{a}-{b}-{c}-{d}"))
    }

    /// Strategy to generate prices that pass validation
    fn valid_price_strategy() -> impl Strategy<Value = String> {
        ("\\$?", "[0-9]{0,6}", "[0-9]{0,2}").prop_map(|(marker, whole, fraction)| {
            format!("{marker}{whole}.{fraction}")
        })
    }

    proptest! {
        #[test]
        fn test_generated_codes_are_valid(code in valid_code_strategy()) {
            prop_assert!(validate_code(&code), "rejected: {}", code);
        }

        #[test]
        fn test_codes_with_extra_characters_are_invalid(
            code in valid_code_strategy(),
            extra in "[A-Za-z0-9 \\-_]",
            prepend in any::<bool>(),
        ) {
            let padded = if prepend {
                format!("{extra}{code}")
            } else {
                format!("{code}{extra}")
            };
            prop_assert!(!validate_code(&padded), "accepted: {:?}", padded);
        }

        #[test]
        fn test_codes_of_wrong_shape_are_invalid(s in "[A-Za-z0-9]{1,15}") {
            prop_assert!(!validate_code(&s));
        }

        #[test]
        fn test_normalized_code_stays_valid(code in valid_code_strategy()) {
            let key = normalize_code(&code);
            prop_assert!(validate_code(&key));
            prop_assert_eq!(key.clone(), normalize_code(&key.to_ascii_lowercase()));
        }

        #[test]
        fn test_padded_names_are_invalid(name in "[A-Za-z0-9]{1,10}( [A-Za-z0-9]{1,10}){0,3}") {
            prop_assert!(validate_name(&name));
            let leading = format!(" {}", name);
            let trailing = format!("{} ", name);
            prop_assert!(!validate_name(&leading));
            prop_assert!(!validate_name(&trailing));
        }

        #[test]
        fn test_canonical_price_has_two_fraction_digits(price in valid_price_strategy()) {
            prop_assert!(validate_price(&price));
            let canonical = canonicalize_price(&price);
            let (whole, fraction) = canonical.split_once('.').unwrap();
            prop_assert!(!whole.is_empty());
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!(validate_price(&canonical));
        }

        #[test]
        fn test_canonicalize_price_is_idempotent(price in valid_price_strategy()) {
            let once = canonicalize_price(&price);
            let twice = canonicalize_price(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_canonical_record_is_still_valid(
            code in valid_code_strategy(),
            price in valid_price_strategy(),
        ) {
            let produce = Produce::new(code, "Gala Apple", price);
            prop_assert!(validate_record(&produce).is_ok());
            let canonical = canonicalize_record(produce);
            prop_assert!(validate_record(&canonical).is_ok());
        }
    }
}
