//! Procedural macros for `privlog`.
//!
//! This crate provides `message!`, which turns a format string and a list of
//! arguments into a lazily rendered `privlog::Message`. It:
//! - parses the format string into literal runs and placeholders
//! - reads per-argument privacy, format and alignment options
//! - emits `MessageBuilder` calls that wrap each argument in a closure
//!
//! It does **not** format or redact anything. That happens in the `privlog`
//! crate when the message is rendered.

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
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::parse_macro_input;

mod expand;
mod input;
mod options;
mod template;

use input::MessageInput;

/// Builds a lazily rendered `privlog::Message` from a format string.
///
/// Every argument is wrapped in a closure; nothing is evaluated until the
/// message is rendered, and then each argument is evaluated exactly once.
/// Values are redacted unless marked otherwise.
///
/// # Placeholders
///
/// - `{}`: the next positional argument
/// - `{N}`: positional argument `N`
/// - `{name}`: the argument `name = ...`, or the variable `name` in scope
/// - `{{` / `}}`: literal braces
///
/// Every explicit argument must be used exactly once.
///
/// # Options
///
/// Options follow the argument after `=>`, either alone or in braces:
///
/// - `public`, `private`, `private(hash)`, `privacy = <expr>`
/// - `format = truth | answer` (booleans)
/// - `format = fixed(p)` / `fixed(p, sign)` (floats)
/// - `format = decimal(n)` / `decimal(n, sign)` (integers)
/// - `format = <expr>`
/// - `align = left(n) | right(n) | none | <expr>` (not for booleans)
///
/// ```ignore
/// use privlog::message;
///
/// let user = "alice";
/// let attempts = 3_u32;
/// let elapsed = 0.25_f64;
/// let ok = true;
///
/// let message = message!(
///     "{user} attempt {} took {t}s ok={ok2}",
///     attempts => { public, format = decimal(2) },
///     t = elapsed => { public, format = fixed(3) },
///     ok2 = ok => { public, format = answer },
/// );
/// assert_eq!(message.render(), "<redacted> attempt 03 took 0.250s ok=yes");
/// ```
///
/// Booleans cannot be aligned; `align` on a `bool` argument fails to compile.
#[proc_macro]
pub fn message(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as MessageInput);
    match expand::expand(input, &crate_root()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the privlog crate root.
///
/// Handles crate renaming. Inside `privlog` itself this resolves through its
/// `extern crate self as privlog;`.
fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("privlog") {
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::privlog },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
    }
}
