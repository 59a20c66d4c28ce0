//! Policies attached to interpolated values.
//!
//! This module provides:
//!
//! - **Privacy** (`privacy`): the [`Privacy`] rule applied to every value's
//!   display text, the [`REDACTED_PLACEHOLDER`], and [`RenderOptions`] with the
//!   debug-only override.
//!
//! - **Formatting** (`format`): [`BoolFormat`], [`FloatFormat`] and
//!   [`IntegerFormat`], which produce the display text of typed values.
//!
//! - **Alignment** (`align`): [`Alignment`], the column constraint applied last.
//!
//! # Example
//!
//! ```rust
//! use privlog::{Alignment, IntegerFormat, Privacy, RenderOptions};
//!
//! let text = IntegerFormat::decimal(4).with_positive_sign().apply_to_signed(7);
//! assert_eq!(text, "+0007");
//!
//! let options = RenderOptions::new();
//! let text = Privacy::Public.apply_to(text, &options);
//! assert_eq!(Alignment::Right(7).apply_to(text), "  +0007");
//! ```

pub mod align;
pub mod format;
pub mod privacy;

pub use align::Alignment;
pub use format::{BoolFormat, FloatFormat, IntegerFormat};
#[cfg(debug_assertions)]
pub use privacy::{reveal_private, set_reveal_private};
pub use privacy::{Mask, Privacy, REDACTED_PLACEHOLDER, RenderOptions};
