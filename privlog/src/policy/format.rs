//! Formatting policies for booleans, floating-point numbers and integers.
//!
//! Each policy turns a typed value into its canonical display text. The text
//! is produced before the privacy policy runs, so any sign character or zero
//! padding is part of what gets hashed or redacted.
//!
//! Widths and precisions are `usize`, which makes negative values
//! unrepresentable.

/// How a boolean is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoolFormat {
    /// `true` / `false`.
    #[default]
    Truth,
    /// `yes` / `no`.
    Answer,
}

impl BoolFormat {
    /// Returns the display text for `value`.
    pub fn apply_to(&self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Truth, true) => "true",
            (Self::Truth, false) => "false",
            (Self::Answer, true) => "yes",
            (Self::Answer, false) => "no",
        }
    }
}

/// How a floating-point number is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatFormat {
    /// Fixed-point notation with exactly `precision` fractional digits.
    Fixed {
        precision: usize,
        /// Prefix non-negative values with `+`.
        explicit_positive_sign: bool,
    },
}

impl FloatFormat {
    /// Precision used by [`FloatFormat::default`].
    pub const DEFAULT_PRECISION: usize = 6;

    /// Fixed-point notation without a forced sign.
    #[must_use]
    pub const fn fixed(precision: usize) -> Self {
        Self::Fixed {
            precision,
            explicit_positive_sign: false,
        }
    }

    /// Forces a `+` in front of non-negative values.
    #[must_use]
    pub const fn with_positive_sign(self) -> Self {
        match self {
            Self::Fixed { precision, .. } => Self::Fixed {
                precision,
                explicit_positive_sign: true,
            },
        }
    }

    /// Returns the display text for `value`.
    ///
    /// Negative zero keeps its sign (`-0.00`). Non-finite values render as
    /// `NaN`, `inf` and `-inf`.
    #[must_use]
    pub fn apply_to(&self, value: f64) -> String {
        match *self {
            Self::Fixed {
                precision,
                explicit_positive_sign: true,
            } => format!("{value:+.precision$}"),
            Self::Fixed { precision, .. } => format!("{value:.precision$}"),
        }
    }
}

impl Default for FloatFormat {
    fn default() -> Self {
        Self::fixed(Self::DEFAULT_PRECISION)
    }
}

/// How an integer is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerFormat {
    /// Base-10 digits, zero-padded on the left to at least `min_digits`.
    ///
    /// The sign is not counted as a digit: `-7` with four digits is `-0007`.
    Decimal {
        min_digits: usize,
        /// Prefix non-negative values with `+`.
        explicit_positive_sign: bool,
    },
}

impl IntegerFormat {
    /// Decimal notation without a forced sign.
    #[must_use]
    pub const fn decimal(min_digits: usize) -> Self {
        Self::Decimal {
            min_digits,
            explicit_positive_sign: false,
        }
    }

    /// Forces a `+` in front of non-negative values.
    #[must_use]
    pub const fn with_positive_sign(self) -> Self {
        match self {
            Self::Decimal { min_digits, .. } => Self::Decimal {
                min_digits,
                explicit_positive_sign: true,
            },
        }
    }

    /// Returns the display text for a signed value.
    #[must_use]
    pub fn apply_to_signed(&self, value: i64) -> String {
        self.render(value < 0, value.unsigned_abs())
    }

    /// Returns the display text for an unsigned value.
    #[must_use]
    pub fn apply_to_unsigned(&self, value: u64) -> String {
        self.render(false, value)
    }

    fn render(&self, negative: bool, magnitude: u64) -> String {
        let Self::Decimal {
            min_digits,
            explicit_positive_sign,
        } = *self;
        let sign = if negative {
            "-"
        } else if explicit_positive_sign {
            "+"
        } else {
            ""
        };
        format!("{sign}{magnitude:0>min_digits$}")
    }
}

impl Default for IntegerFormat {
    fn default() -> Self {
        Self::decimal(0)
    }
}
