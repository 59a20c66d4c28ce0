//! Type-directed capture of interpolated values.
//!
//! The value kind of a fragment is chosen by the producer's return type:
//!
//! | Producer returns                          | Fragment kind       | Format          |
//! |-------------------------------------------|---------------------|-----------------|
//! | `String`, `&str`, `Cow<str>`              | `Text`              | none            |
//! | [`DisplayValue<T>`] (see [`display`])     | `Displayed`         | none            |
//! | `i8`, `i16`, `i32`, `i64`, `isize`        | `SignedInteger`     | `IntegerFormat` |
//! | `u8`, `u16`, `u32`, `u64`, `usize`        | `UnsignedInteger`   | `IntegerFormat` |
//! | `f32`                                     | `Float`             | `FloatFormat`   |
//! | `f64`                                     | `Double`            | `FloatFormat`   |
//! | `bool`                                    | `Bool`              | `BoolFormat`    |
//!
//! The set is closed. Arbitrary types go through [`display`].

use std::{borrow::Cow, fmt};

use super::fragment::{Fragment, Producer};
use crate::policy::{Alignment, BoolFormat, FloatFormat, IntegerFormat, Privacy};

mod sealed {
    pub trait Sealed {}
}

/// A type that can be captured as an interpolated value.
///
/// This trait is sealed; see the module documentation for the supported types.
pub trait Interpolate<'a>: Sized + sealed::Sealed {
    /// Formatting policy for this kind (`()` when the kind has none).
    type Format: Copy + Default + fmt::Debug;

    /// Wraps a producer of `Self` into the matching fragment variant.
    ///
    /// The producer is not invoked.
    fn into_fragment(
        producer: Producer<'a, Self>,
        format: Self::Format,
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a>;
}

/// Interpolated kinds that support column alignment (every kind but `bool`).
///
/// ```compile_fail
/// use privlog::{Alignment, MessageBuilder, ValueOptions};
///
/// let mut builder = MessageBuilder::new();
/// builder.append_aligned_value(|| true, ValueOptions::new(), Alignment::Left(5));
/// ```
///
/// ```compile_fail
/// let flag = true;
/// let _ = privlog::message!("{}", flag => align = left(5));
/// ```
pub trait Alignable<'a>: Interpolate<'a> {}

/// Formatting and privacy chosen for one interpolated value.
///
/// Defaults to the kind's default format and [`Privacy::PRIVATE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueOptions<F> {
    format: F,
    privacy: Privacy,
}

impl<F: Default> ValueOptions<F> {
    /// Default format, private without mask.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> ValueOptions<F> {
    /// Sets the formatting policy.
    #[must_use]
    pub fn with_format(mut self, format: F) -> Self {
        self.format = format;
        self
    }

    /// Sets the privacy policy.
    #[must_use]
    pub fn with_privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = privacy;
        self
    }

    /// Shorthand for `with_privacy(Privacy::Public)`.
    #[must_use]
    pub fn public(self) -> Self {
        self.with_privacy(Privacy::Public)
    }

    /// Returns the formatting policy.
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Returns the privacy policy.
    pub fn privacy(&self) -> Privacy {
        self.privacy
    }

    pub(crate) fn into_parts(self) -> (F, Privacy) {
        (self.format, self.privacy)
    }
}

/// Wrapper that interpolates any `Display` value as text.
///
/// `to_string()` runs at render time, inside the producer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayValue<T>(pub T);

/// Wraps `value` so it is interpolated through its `Display` implementation.
pub fn display<T: fmt::Display>(value: T) -> DisplayValue<T> {
    DisplayValue(value)
}

// =============================================================================
// Text kinds
// =============================================================================

impl sealed::Sealed for String {}

impl<'a> Interpolate<'a> for String {
    type Format = ();

    fn into_fragment(
        producer: Producer<'a, Self>,
        (): (),
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Text {
            producer,
            alignment,
            privacy,
        }
    }
}

impl<'a> Alignable<'a> for String {}

impl sealed::Sealed for &str {}

impl<'a, 'b: 'a> Interpolate<'a> for &'b str {
    type Format = ();

    fn into_fragment(
        producer: Producer<'a, Self>,
        (): (),
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Text {
            producer: Box::new(move || producer().to_owned()),
            alignment,
            privacy,
        }
    }
}

impl<'a, 'b: 'a> Alignable<'a> for &'b str {}

impl sealed::Sealed for Cow<'_, str> {}

impl<'a, 'b: 'a> Interpolate<'a> for Cow<'b, str> {
    type Format = ();

    fn into_fragment(
        producer: Producer<'a, Self>,
        (): (),
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Text {
            producer: Box::new(move || producer().into_owned()),
            alignment,
            privacy,
        }
    }
}

impl<'a, 'b: 'a> Alignable<'a> for Cow<'b, str> {}

impl<T> sealed::Sealed for DisplayValue<T> {}

impl<'a, T: fmt::Display + 'a> Interpolate<'a> for DisplayValue<T> {
    type Format = ();

    fn into_fragment(
        producer: Producer<'a, Self>,
        (): (),
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Displayed {
            producer: Box::new(move || producer().0.to_string()),
            alignment,
            privacy,
        }
    }
}

impl<'a, T: fmt::Display + 'a> Alignable<'a> for DisplayValue<T> {}

// =============================================================================
// Numeric kinds
// =============================================================================

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn widen_isize(value: isize) -> i64 {
    value as i64
}

#[allow(clippy::cast_possible_truncation)]
fn widen_usize(value: usize) -> u64 {
    value as u64
}

macro_rules! impl_integer {
    ($variant:ident: $($ty:ty => $widen:expr),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl<'a> Interpolate<'a> for $ty {
                type Format = IntegerFormat;

                fn into_fragment(
                    producer: Producer<'a, Self>,
                    format: IntegerFormat,
                    alignment: Alignment,
                    privacy: Privacy,
                ) -> Fragment<'a> {
                    Fragment::$variant {
                        producer: Box::new(move || ($widen)(producer())),
                        format,
                        alignment,
                        privacy,
                    }
                }
            }

            impl<'a> Alignable<'a> for $ty {}
        )+
    };
}

impl_integer!(SignedInteger:
    i8 => i64::from,
    i16 => i64::from,
    i32 => i64::from,
    i64 => i64::from,
    isize => widen_isize,
);

impl_integer!(UnsignedInteger:
    u8 => u64::from,
    u16 => u64::from,
    u32 => u64::from,
    u64 => u64::from,
    usize => widen_usize,
);

impl sealed::Sealed for f32 {}

impl<'a> Interpolate<'a> for f32 {
    type Format = FloatFormat;

    fn into_fragment(
        producer: Producer<'a, Self>,
        format: FloatFormat,
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Float {
            producer,
            format,
            alignment,
            privacy,
        }
    }
}

impl<'a> Alignable<'a> for f32 {}

impl sealed::Sealed for f64 {}

impl<'a> Interpolate<'a> for f64 {
    type Format = FloatFormat;

    fn into_fragment(
        producer: Producer<'a, Self>,
        format: FloatFormat,
        alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Double {
            producer,
            format,
            alignment,
            privacy,
        }
    }
}

impl<'a> Alignable<'a> for f64 {}

impl sealed::Sealed for bool {}

impl<'a> Interpolate<'a> for bool {
    type Format = BoolFormat;

    /// Booleans have no alignment; `alignment` is ignored.
    fn into_fragment(
        producer: Producer<'a, Self>,
        format: BoolFormat,
        _alignment: Alignment,
        privacy: Privacy,
    ) -> Fragment<'a> {
        Fragment::Bool {
            producer,
            format,
            privacy,
        }
    }
}
