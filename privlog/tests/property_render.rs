//! Property tests for rendering invariants.

use privlog::{
    Alignment, IntegerFormat, MessageBuilder, Privacy, REDACTED_PLACEHOLDER, RenderOptions,
    ValueOptions,
};
use proptest::prelude::*;

// Strategy: a message description as (is_literal, text) pairs
fn arb_parts() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), "[a-zA-Z0-9 {}%]{0,12}"), 0..8)
}

proptest! {
    /// Property: public text renders verbatim and in capture order.
    #[test]
    fn public_fragments_concatenate_in_order(parts in arb_parts()) {
        let mut builder = MessageBuilder::new();
        for (is_literal, text) in parts.clone() {
            if is_literal {
                builder.append_literal(text);
            } else {
                builder.append_value(move || text, ValueOptions::new().public());
            }
        }

        let expected: String = parts.into_iter().map(|(_, text)| text).collect();
        prop_assert_eq!(builder.build().render_with(&RenderOptions::new()), expected);
    }

    /// Property: private values never leak, whatever their content.
    #[test]
    fn private_values_never_leak(secret in "[a-z]{12,24}") {
        let captured = secret.clone();
        let mut builder = MessageBuilder::new();
        builder.append_value(move || captured, ValueOptions::new());
        let rendered = builder.build().render_with(&RenderOptions::new());
        prop_assert_eq!(rendered.as_str(), REDACTED_PLACEHOLDER);
        prop_assert!(!rendered.contains(&secret));
    }

    /// Property: hashed values are decimal and stable within the process.
    #[test]
    fn hashes_are_stable(value in "\\PC{0,32}") {
        let render = |value: String| {
            let mut builder = MessageBuilder::new();
            builder.append_value(move || value, ValueOptions::new().with_privacy(Privacy::HASHED));
            builder.build().render_with(&RenderOptions::new())
        };
        let first = render(value.clone());
        prop_assert!(first.chars().all(|ch| ch.is_ascii_digit()));
        prop_assert_eq!(first, render(value));
    }

    /// Property: aligned output is exactly `width` characters wide.
    #[test]
    fn alignment_fixes_width(text in "\\PC{0,20}", width in 0usize..24, left in any::<bool>()) {
        let alignment = if left { Alignment::Left(width) } else { Alignment::Right(width) };
        let aligned = alignment.apply_to(text.clone());
        prop_assert_eq!(aligned.chars().count(), width);

        let kept: String = text.chars().take(width).collect();
        if left {
            prop_assert!(aligned.starts_with(&kept));
        } else {
            prop_assert!(aligned.ends_with(&kept));
        }
    }

    /// Property: zero-padding preserves the value and reaches the minimum width.
    #[test]
    fn integer_padding_round_trips(value in any::<i64>(), min_digits in 0usize..24) {
        let text = IntegerFormat::decimal(min_digits).apply_to_signed(value);
        let digits = text.trim_start_matches('-');
        prop_assert!(digits.len() >= min_digits);
        prop_assert_eq!(text.parse::<i128>().unwrap(), i128::from(value));
    }
}
