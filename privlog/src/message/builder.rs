//! The interpolation capture buffer.

use std::borrow::Cow;

use super::{
    Message,
    fragment::Fragment,
    interpolate::{Alignable, Interpolate, ValueOptions},
};
use crate::policy::Alignment;

/// Accumulates fragments in call order without evaluating any producer.
///
/// Capture is pure bookkeeping: producers are boxed and stored, and run only
/// when the finished [`Message`] is rendered. Consecutive literals are kept as
/// separate fragments.
///
/// ```rust
/// use privlog::{FloatFormat, MessageBuilder, ValueOptions};
///
/// let mut builder = MessageBuilder::new();
/// builder
///     .append_literal("took ")
///     .append_value(|| 1.23456_f64, ValueOptions::new().with_format(FloatFormat::fixed(2)).public())
///     .append_literal("s");
/// assert_eq!(builder.build().render(), "took 1.23s");
/// ```
#[derive(Debug, Default)]
pub struct MessageBuilder<'a> {
    fragments: Vec<Fragment<'a>>,
}

impl<'a> MessageBuilder<'a> {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` fragments.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fragments: Vec::with_capacity(capacity),
        }
    }

    /// Appends literal text.
    pub fn append_literal(&mut self, text: impl Into<Cow<'a, str>>) -> &mut Self {
        self.fragments.push(Fragment::Literal(text.into()));
        self
    }

    /// Appends a lazily evaluated value without alignment.
    ///
    /// The fragment kind follows from the producer's return type.
    pub fn append_value<T, F>(&mut self, producer: F, options: ValueOptions<T::Format>) -> &mut Self
    where
        T: Interpolate<'a>,
        F: FnOnce() -> T + Send + 'a,
    {
        let (format, privacy) = options.into_parts();
        self.fragments.push(T::into_fragment(
            Box::new(producer),
            format,
            Alignment::None,
            privacy,
        ));
        self
    }

    /// Appends a lazily evaluated value fitted to a column.
    ///
    /// Not available for booleans.
    pub fn append_aligned_value<T, F>(
        &mut self,
        producer: F,
        options: ValueOptions<T::Format>,
        alignment: Alignment,
    ) -> &mut Self
    where
        T: Alignable<'a>,
        F: FnOnce() -> T + Send + 'a,
    {
        let (format, privacy) = options.into_parts();
        self.fragments.push(T::into_fragment(
            Box::new(producer),
            format,
            alignment,
            privacy,
        ));
        self
    }

    /// Appends a fragment built elsewhere.
    pub fn append_fragment(&mut self, fragment: Fragment<'a>) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// Number of fragments captured so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Finishes capture.
    #[must_use]
    pub fn build(self) -> Message<'a> {
        Message::from_fragments(self.fragments)
    }
}
