//! The fragment sequence captured by a message.

use std::{borrow::Cow, fmt};

use crate::policy::{Alignment, BoolFormat, FloatFormat, IntegerFormat, Privacy};

/// A deferred computation producing an interpolated value.
///
/// Producers run at render time, at most once, possibly on another thread
/// than the one that captured them.
pub type Producer<'a, T> = Box<dyn FnOnce() -> T + Send + 'a>;

/// One element of a message: literal text or a lazily evaluated value.
///
/// Fragments are appended through [`MessageBuilder`](crate::MessageBuilder)
/// and never modified afterwards. Each value variant carries its producer and
/// the policies applied when it is rendered. Booleans have no alignment.
pub enum Fragment<'a> {
    /// Text emitted verbatim.
    Literal(Cow<'a, str>),
    /// A string value.
    Text {
        producer: Producer<'a, String>,
        alignment: Alignment,
        privacy: Privacy,
    },
    /// Any `Display` value, converted to text when rendered.
    Displayed {
        producer: Producer<'a, String>,
        alignment: Alignment,
        privacy: Privacy,
    },
    /// A signed integer, widened to 64 bits.
    SignedInteger {
        producer: Producer<'a, i64>,
        format: IntegerFormat,
        alignment: Alignment,
        privacy: Privacy,
    },
    /// An unsigned integer, widened to 64 bits.
    UnsignedInteger {
        producer: Producer<'a, u64>,
        format: IntegerFormat,
        alignment: Alignment,
        privacy: Privacy,
    },
    /// A 32-bit float, widened to `f64` before formatting.
    Float {
        producer: Producer<'a, f32>,
        format: FloatFormat,
        alignment: Alignment,
        privacy: Privacy,
    },
    /// A 64-bit float.
    Double {
        producer: Producer<'a, f64>,
        format: FloatFormat,
        alignment: Alignment,
        privacy: Privacy,
    },
    /// A boolean.
    Bool {
        producer: Producer<'a, bool>,
        format: BoolFormat,
        privacy: Privacy,
    },
}

/// The kind of a [`Fragment`], inspectable without evaluating anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Literal,
    Text,
    Displayed,
    SignedInteger,
    UnsignedInteger,
    Float,
    Double,
    Bool,
}

impl Fragment<'_> {
    /// Returns the kind of this fragment.
    pub fn kind(&self) -> FragmentKind {
        match self {
            Self::Literal(_) => FragmentKind::Literal,
            Self::Text { .. } => FragmentKind::Text,
            Self::Displayed { .. } => FragmentKind::Displayed,
            Self::SignedInteger { .. } => FragmentKind::SignedInteger,
            Self::UnsignedInteger { .. } => FragmentKind::UnsignedInteger,
            Self::Float { .. } => FragmentKind::Float,
            Self::Double { .. } => FragmentKind::Double,
            Self::Bool { .. } => FragmentKind::Bool,
        }
    }

    /// Returns the privacy policy, or `None` for literals.
    pub fn privacy(&self) -> Option<Privacy> {
        match self {
            Self::Literal(_) => None,
            Self::Text { privacy, .. }
            | Self::Displayed { privacy, .. }
            | Self::SignedInteger { privacy, .. }
            | Self::UnsignedInteger { privacy, .. }
            | Self::Float { privacy, .. }
            | Self::Double { privacy, .. }
            | Self::Bool { privacy, .. } => Some(*privacy),
        }
    }

    /// Returns the alignment, or `None` for literals and booleans.
    pub fn alignment(&self) -> Option<Alignment> {
        match self {
            Self::Literal(_) | Self::Bool { .. } => None,
            Self::Text { alignment, .. }
            | Self::Displayed { alignment, .. }
            | Self::SignedInteger { alignment, .. }
            | Self::UnsignedInteger { alignment, .. }
            | Self::Float { alignment, .. }
            | Self::Double { alignment, .. } => Some(*alignment),
        }
    }
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Text {
                alignment, privacy, ..
            }
            | Self::Displayed {
                alignment, privacy, ..
            } => f
                .debug_struct(kind_name(self.kind()))
                .field("alignment", alignment)
                .field("privacy", privacy)
                .finish_non_exhaustive(),
            Self::SignedInteger {
                format,
                alignment,
                privacy,
                ..
            }
            | Self::UnsignedInteger {
                format,
                alignment,
                privacy,
                ..
            } => f
                .debug_struct(kind_name(self.kind()))
                .field("format", format)
                .field("alignment", alignment)
                .field("privacy", privacy)
                .finish_non_exhaustive(),
            Self::Float {
                format,
                alignment,
                privacy,
                ..
            }
            | Self::Double {
                format,
                alignment,
                privacy,
                ..
            } => f
                .debug_struct(kind_name(self.kind()))
                .field("format", format)
                .field("alignment", alignment)
                .field("privacy", privacy)
                .finish_non_exhaustive(),
            Self::Bool {
                format, privacy, ..
            } => f
                .debug_struct("Bool")
                .field("format", format)
                .field("privacy", privacy)
                .finish_non_exhaustive(),
        }
    }
}

fn kind_name(kind: FragmentKind) -> &'static str {
    match kind {
        FragmentKind::Literal => "Literal",
        FragmentKind::Text => "Text",
        FragmentKind::Displayed => "Displayed",
        FragmentKind::SignedInteger => "SignedInteger",
        FragmentKind::UnsignedInteger => "UnsignedInteger",
        FragmentKind::Float => "Float",
        FragmentKind::Double => "Double",
        FragmentKind::Bool => "Bool",
    }
}
