//! Lazily rendered, privacy-aware log messages.
//!
//! A log call captures its message as a sequence of fragments: literal text,
//! or a deferred typed value carrying a formatting policy, an optional column
//! alignment and a privacy policy. Nothing is evaluated at capture time.
//! When (and only if) the message is emitted, each value is produced exactly
//! once, formatted, redacted according to its privacy policy, aligned, and
//! concatenated.
//!
//! Redaction is the default: a value without an explicit policy renders as
//! [`REDACTED_PLACEHOLDER`]. Mark values `public` to print them, or
//! `private(hash)` to print a per-process stable hash instead.
//!
//! What this crate does:
//! - captures messages lazily (`message!`, [`MessageBuilder`])
//! - formats, redacts and aligns values when rendering ([`Message::render`])
//! - emits rendered lines through a [`Logger`] to a [`Sink`], with level
//!   gating, sticky metadata and source locations
//! - provides sinks for `slog` and `tracing` behind feature flags
//!
//! What it does not do:
//! - structured (non-string) payloads or wire encodings
//! - locale-aware number formatting
//!
//! # Example
//!
//! ```rust
//! use privlog::{Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new("payments", sink.clone());
//!
//! let user = "alice@example.com";
//! let cents = 1250_u64;
//! privlog::info!(logger, "charged {user} {}", cents => { public, align = right(6) });
//!
//! let line = &sink.messages()[0];
//! assert!(line.starts_with("charged <redacted>   1250 [File: "));
//! ```
//!
//! The `message!` macro lives in `privlog-macros` and is re-exported from this
//! crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::return_self_not_must_use
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "macros")]
pub use privlog_macros::message;

#[allow(unused_extern_crates)]
extern crate self as privlog;

#[macro_use]
mod macros;

// Module declarations
pub mod level;
pub mod logger;
pub mod message;
pub mod metadata;
pub mod policy;
pub mod sink;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use level::{Level, ParseLevelError, SinkLevel};
pub use logger::{Location, Logger, LoggerConfig};
pub use message::{
    Alignable, DisplayValue, Fragment, FragmentKind, Interpolate, Message, MessageBuilder,
    Producer, ValueOptions, display,
};
pub use metadata::{Metadata, MetadataValue};
#[cfg(debug_assertions)]
pub use policy::{reveal_private, set_reveal_private};
pub use policy::{
    Alignment, BoolFormat, FloatFormat, IntegerFormat, Mask, Privacy, REDACTED_PLACEHOLDER,
    RenderOptions,
};
pub use sink::{CapturedRecord, MemorySink, Record, Sink, WriterSink};
#[cfg(feature = "slog")]
pub use self::slog::SlogSink;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;
