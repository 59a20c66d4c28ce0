//! Privacy policies for interpolated values.
//!
//! Every interpolated value carries a [`Privacy`]. The policy is applied to the
//! value's *display text*, after kind-specific formatting, so hashing a number
//! hashes what would have been printed rather than its binary representation.
//!
//! Redaction is on by default: a value without an explicit policy renders as
//! [`REDACTED_PLACEHOLDER`]. Values must be marked [`Privacy::Public`] to reach
//! the output verbatim.
//!
//! In debug builds (`cfg(debug_assertions)`) redaction can be switched off for
//! local development, either per render through [`RenderOptions`] or for the
//! whole process through [`set_reveal_private`]. Neither exists in release
//! builds.

use std::{
    hash::{BuildHasher, RandomState},
    sync::OnceLock,
};
#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicBool, Ordering};

/// Placeholder substituted for values redacted with [`Mask::None`].
///
/// The placeholder does not depend on the value, so two redacted fields can
/// only be told apart by their position in the message.
pub const REDACTED_PLACEHOLDER: &str = "<redacted>";

/// How a private value is masked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mask {
    /// Replace the value with a decimal hash of its display text.
    ///
    /// The hash is stable for the lifetime of the process so repeated
    /// occurrences of a value can be correlated within one session. It is
    /// seeded per process and must not be used for joins across runs.
    Hash,
    /// Replace the value with [`REDACTED_PLACEHOLDER`].
    #[default]
    None,
}

/// Redaction rule attached to an interpolated value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Privacy {
    /// Emit the display text unchanged.
    Public,
    /// Hide the display text behind the given mask.
    Private(Mask),
}

impl Privacy {
    /// `Private(Mask::None)`, the default policy.
    pub const PRIVATE: Self = Self::Private(Mask::None);

    /// `Private(Mask::Hash)`.
    pub const HASHED: Self = Self::Private(Mask::Hash);

    /// Returns `true` for [`Privacy::Public`].
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Applies the policy to a value's display text.
    ///
    /// This method is total: every policy produces some text for every input.
    #[must_use]
    pub fn apply_to(&self, text: String, options: &RenderOptions) -> String {
        if !options.redacts() {
            return text;
        }

        match self {
            Self::Public => text,
            Self::Private(Mask::None) => REDACTED_PLACEHOLDER.to_string(),
            Self::Private(Mask::Hash) => hash_text(&text).to_string(),
        }
    }
}

impl Default for Privacy {
    fn default() -> Self {
        Self::PRIVATE
    }
}

/// Hashes display text with a per-process random seed.
pub(crate) fn hash_text(text: &str) -> u64 {
    static STATE: OnceLock<RandomState> = OnceLock::new();
    STATE.get_or_init(RandomState::new).hash_one(text)
}

// =============================================================================
// Debug-only redaction override
// =============================================================================

#[cfg(debug_assertions)]
static REVEAL_PRIVATE: AtomicBool = AtomicBool::new(false);

/// Disables (or re-enables) redaction for the whole process.
///
/// Only available in debug builds. Intended to be called once at startup of a
/// local development build; it is read with a relaxed atomic load on every
/// redaction decision made with [`RenderOptions::from_process`].
#[cfg(debug_assertions)]
pub fn set_reveal_private(enabled: bool) {
    REVEAL_PRIVATE.store(enabled, Ordering::Relaxed);
}

/// Returns whether the process-wide override currently disables redaction.
#[cfg(debug_assertions)]
pub fn reveal_private() -> bool {
    REVEAL_PRIVATE.load(Ordering::Relaxed)
}

/// Options that control how a message is rendered.
///
/// In release builds this type carries no state and redaction is always
/// enforced. In debug builds it can carry an explicit "reveal private values"
/// switch, which lets tests toggle redaction without touching global state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    #[cfg(debug_assertions)]
    reveal_private: bool,
}

impl RenderOptions {
    /// Options that always enforce redaction, ignoring the process override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reflecting the process-wide override.
    ///
    /// In release builds this is identical to [`RenderOptions::new`].
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            #[cfg(debug_assertions)]
            reveal_private: reveal_private(),
        }
    }

    /// Sets whether private values are rendered verbatim.
    #[cfg(debug_assertions)]
    #[must_use]
    pub fn with_reveal_private(mut self, reveal: bool) -> Self {
        self.reveal_private = reveal;
        self
    }

    /// Returns `true` when privacy policies are enforced.
    pub fn redacts(&self) -> bool {
        #[cfg(debug_assertions)]
        {
            !self.reveal_private
        }
        #[cfg(not(debug_assertions))]
        {
            true
        }
    }
}
