//! Lazily rendered log messages.
//!
//! This module provides:
//!
//! - **`fragment`**: the [`Fragment`] sequence (literal text or deferred typed values)
//! - **`interpolate`**: type-directed capture ([`Interpolate`], [`ValueOptions`], [`display`])
//! - **`builder`**: the capture buffer ([`MessageBuilder`])
//! - **`render`**: the single-pass renderer
//!
//! A [`Message`] is built once per log call. Nothing inside it is evaluated
//! until [`Message::render`] is called; rendering consumes the message, so
//! each producer runs at most once.

mod builder;
mod fragment;
mod interpolate;
mod render;

use std::{borrow::Cow, fmt};

pub use builder::MessageBuilder;
pub use fragment::{Fragment, FragmentKind, Producer};
pub use interpolate::{Alignable, DisplayValue, Interpolate, ValueOptions, display};

use crate::policy::RenderOptions;

/// An ordered, not yet evaluated sequence of fragments.
///
/// `Message` is `Send` so it can be captured on one thread and rendered on
/// another. It is deliberately not `Display`: rendering consumes it.
///
/// ```rust
/// use privlog::Message;
///
/// let message = Message::literal("service started");
/// assert_eq!(message.render(), "service started");
/// ```
#[derive(Default)]
pub struct Message<'a> {
    fragments: Vec<Fragment<'a>>,
}

impl<'a> Message<'a> {
    /// A message with no fragments; renders to the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A message consisting of a single literal fragment.
    #[must_use]
    pub fn literal(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            fragments: vec![Fragment::Literal(text.into())],
        }
    }

    /// Starts an empty capture buffer.
    #[must_use]
    pub fn builder() -> MessageBuilder<'a> {
        MessageBuilder::new()
    }

    pub(crate) fn from_fragments(fragments: Vec<Fragment<'a>>) -> Self {
        Self { fragments }
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if the message has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterates over the fragments without evaluating them.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment<'a>> {
        self.fragments.iter()
    }

    /// Iterates over fragment kinds without evaluating anything.
    pub fn kinds(&self) -> impl Iterator<Item = FragmentKind> + '_ {
        self.fragments.iter().map(Fragment::kind)
    }

    /// Renders the message using the process-wide render options.
    ///
    /// In release builds redaction is always enforced. In debug builds the
    /// override set through [`set_reveal_private`](crate::set_reveal_private)
    /// is honored.
    #[must_use]
    pub fn render(self) -> String {
        self.render_with(&RenderOptions::from_process())
    }

    /// Renders the message with explicit options.
    #[must_use]
    pub fn render_with(self, options: &RenderOptions) -> String {
        render::render_fragments(self.fragments, options)
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::literal(text)
    }
}

impl<'a> FromIterator<Fragment<'a>> for Message<'a> {
    fn from_iter<I: IntoIterator<Item = Fragment<'a>>>(iter: I) -> Self {
        Self::from_fragments(iter.into_iter().collect())
    }
}

impl From<Message<'_>> for String {
    fn from(message: Message<'_>) -> Self {
        message.render()
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("fragments", &self.fragments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::policy::{Alignment, IntegerFormat, Privacy, REDACTED_PLACEHOLDER};

    #[test]
    fn empty_message_renders_empty() {
        assert_eq!(Message::new().render_with(&RenderOptions::new()), "");
        assert!(Message::new().is_empty());
    }

    #[test]
    fn literal_message_has_one_fragment() {
        let message = Message::from("plain");
        assert_eq!(message.len(), 1);
        assert_eq!(message.render_with(&RenderOptions::new()), "plain");
    }

    #[test]
    fn rendering_runs_each_producer_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut builder = Message::builder();
        builder.append_literal("count=").append_value(
            move || counter.fetch_add(1, Ordering::SeqCst) + 1,
            ValueOptions::new().public(),
        );
        let message = builder.build();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(message.render_with(&RenderOptions::new()), "count=1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mixed_message_preserves_order() {
        let mut builder = Message::builder();
        builder
            .append_literal("user ")
            .append_value(|| "alice", ValueOptions::new())
            .append_literal(" id ")
            .append_aligned_value(
                || 42_i64,
                ValueOptions::new()
                    .with_format(IntegerFormat::decimal(5))
                    .public(),
                Alignment::Right(7),
            )
            .append_literal(" ok ")
            .append_value(|| true, ValueOptions::new().with_privacy(Privacy::Public));

        assert_eq!(
            builder.build().render_with(&RenderOptions::new()),
            format!("user {REDACTED_PLACEHOLDER} id   00042 ok true")
        );
    }

    #[test]
    fn message_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Message<'static>>();
    }

    #[test]
    fn debug_does_not_evaluate() {
        let mut builder = Message::builder();
        builder.append_value(|| -> u8 { panic!("must not run") }, ValueOptions::new());
        let debug = format!("{:?}", builder.build());
        assert!(debug.contains("UnsignedInteger"));
    }
}
