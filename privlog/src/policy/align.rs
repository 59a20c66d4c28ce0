//! Column alignment for text-bearing values.
//!
//! Alignment is a display constraint applied last, after formatting and
//! privacy. Text longer than the column width is truncated; shorter text is
//! padded with ASCII spaces. Widths count Unicode scalar values.

/// Column alignment of an interpolated value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Emit the text unchanged regardless of its length.
    #[default]
    None,
    /// Text on the left, padding on the right.
    Left(usize),
    /// Padding on the left, text on the right.
    Right(usize),
}

impl Alignment {
    /// Fits `text` into the configured column width.
    ///
    /// Truncation keeps the first `columns` characters for both directions.
    /// A width of zero produces an empty string.
    #[must_use]
    pub fn apply_to(&self, text: String) -> String {
        let (columns, pad_left) = match *self {
            Self::None => return text,
            Self::Left(columns) => (columns, false),
            Self::Right(columns) => (columns, true),
        };

        let len = text.chars().count();
        if len > columns {
            return text.chars().take(columns).collect();
        }
        if len == columns {
            return text;
        }

        let padding = " ".repeat(columns - len);
        if pad_left {
            padding + &text
        } else {
            text + &padding
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Alignment;

    #[test]
    fn none_passes_through() {
        assert_eq!(Alignment::None.apply_to("hello world".into()), "hello world");
    }

    #[test]
    fn pads_in_direction() {
        assert_eq!(Alignment::Left(5).apply_to("ab".into()), "ab   ");
        assert_eq!(Alignment::Right(5).apply_to("ab".into()), "   ab");
    }

    #[test]
    fn truncates_keeping_prefix() {
        assert_eq!(Alignment::Left(3).apply_to("hello".into()), "hel");
        assert_eq!(Alignment::Right(3).apply_to("hello".into()), "hel");
    }

    #[test]
    fn exact_width_is_unchanged() {
        assert_eq!(Alignment::Left(5).apply_to("hello".into()), "hello");
        assert_eq!(Alignment::Right(5).apply_to("hello".into()), "hello");
    }

    #[test]
    fn zero_width_empties() {
        assert_eq!(Alignment::Left(0).apply_to("hello".into()), "");
        assert_eq!(Alignment::Right(0).apply_to(String::new()), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(Alignment::Left(3).apply_to("héllo".into()), "hél");
        assert_eq!(Alignment::Right(4).apply_to("né".into()), "  né");
    }
}
