//! Parsing of `message!` format strings.
//!
//! A template is split into literal runs and placeholders. Supported forms are
//! `{}` (next positional argument), `{N}` (positional argument `N`) and
//! `{name}` (named argument, or an identifier captured from scope). `{{` and
//! `}}` are escapes for literal braces.
//!
//! Formatting is expressed through argument options, so `{x:?}` and other
//! format specs are rejected.

use proc_macro2::{Ident, Span};
use syn::{LitStr, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlaceholderKey {
    Index(usize),
    Named(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Placeholder(PlaceholderKey),
}

pub(crate) fn parse_template(template: &LitStr) -> Result<Vec<Segment>> {
    parse_segments(&template.value(), template.span())
}

fn parse_segments(value: &str, span: Span) -> Result<Vec<Segment>> {
    let mut chars = value.chars().peekable();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut implicit_index = 0usize;

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some('{')) {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                let mut inside = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    inside.push(next);
                }
                if !closed {
                    return Err(syn::Error::new(span, "unmatched `{` in format string"));
                }

                if inside.contains(':') {
                    return Err(syn::Error::new(
                        span,
                        format!(
                            "format specs are not supported in `{{{inside}}}`; \
                             use `=> format = ...` or `=> align = ...` on the argument"
                        ),
                    ));
                }

                let arg_part = inside.trim();
                let key = if arg_part.is_empty() {
                    let index = implicit_index;
                    implicit_index += 1;
                    PlaceholderKey::Index(index)
                } else if arg_part.chars().all(|c| c.is_ascii_digit()) {
                    let index = arg_part
                        .parse::<usize>()
                        .map_err(|_| syn::Error::new(span, "invalid argument index"))?;
                    PlaceholderKey::Index(index)
                } else if is_ident(arg_part) {
                    PlaceholderKey::Named(arg_part.to_string())
                } else {
                    return Err(syn::Error::new(
                        span,
                        format!("unsupported placeholder `{{{arg_part}}}`"),
                    ));
                };

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(key));
            }
            '}' => {
                if matches!(chars.peek(), Some('}')) {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(syn::Error::new(span, "unmatched `}` in format string"));
                }
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn is_ident(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(ch) if ch == '_' || ch.is_ascii_alphabetic() => {}
        _ => return false,
    }
    value != "_" && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

/// Builds the identifier for a `{name}` captured from scope.
///
/// The template's span is used so the identifier resolves at the call site.
pub(crate) fn captured_ident(name: &str, template: &LitStr) -> Ident {
    Ident::new(name, template.span())
}
