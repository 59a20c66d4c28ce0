//! Parsing of per-argument options written after `=>`.
//!
//! Options are written as a single item or a braced list:
//!
//! | Option                       | Meaning                                   |
//! |------------------------------|-------------------------------------------|
//! | `public`                     | `Privacy::Public`                         |
//! | `private`, `private(none)`   | `Privacy::Private(Mask::None)`            |
//! | `private(hash)`              | `Privacy::Private(Mask::Hash)`            |
//! | `privacy = <expr>`           | any `Privacy` value                       |
//! | `format = truth \| answer`   | `BoolFormat`                              |
//! | `format = fixed(p[, sign])`  | `FloatFormat::fixed(p)`                   |
//! | `format = decimal(n[, sign])`| `IntegerFormat::decimal(n)`               |
//! | `format = <expr>`            | any format value                          |
//! | `align = left(n) \| right(n)`| `Alignment::Left(n)` / `Alignment::Right(n)` |
//! | `align = none`               | `Alignment::None`                         |
//! | `align = <expr>`             | any `Alignment` value                     |

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    Expr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

#[derive(Clone, Debug)]
pub(crate) enum PrivacyOption {
    Public,
    Private,
    Hashed,
    Expr(Expr),
}

#[derive(Clone, Debug)]
pub(crate) enum FormatOption {
    Truth,
    Answer,
    Fixed { precision: Expr, sign: bool },
    Decimal { min_digits: Expr, sign: bool },
    Expr(Expr),
}

#[derive(Clone, Debug)]
pub(crate) enum AlignOption {
    None,
    Left(Expr),
    Right(Expr),
    Expr(Expr),
}

/// Options attached to one `message!` argument.
#[derive(Clone, Debug, Default)]
pub(crate) struct ValueSpec {
    pub(crate) privacy: Option<PrivacyOption>,
    pub(crate) format: Option<FormatOption>,
    pub(crate) align: Option<AlignOption>,
}

impl Parse for ValueSpec {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let items: Vec<Meta> = if input.peek(syn::token::Brace) {
            let content;
            syn::braced!(content in input);
            Punctuated::<Meta, Token![,]>::parse_terminated(&content)?
                .into_iter()
                .collect()
        } else {
            vec![input.parse()?]
        };
        parse_value_spec(&items)
    }
}

fn set_once<T>(target: &mut Option<T>, next: T, what: &str, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            format!("{what} specified more than once for the same argument"),
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_value_spec(items: &[Meta]) -> Result<ValueSpec> {
    let mut spec = ValueSpec::default();
    for item in items {
        let span = item.span();
        match item {
            Meta::Path(path) if path.is_ident("public") => {
                set_once(&mut spec.privacy, PrivacyOption::Public, "privacy", span)?;
            }
            Meta::Path(path) if path.is_ident("private") => {
                set_once(&mut spec.privacy, PrivacyOption::Private, "privacy", span)?;
            }
            Meta::List(list) if list.path.is_ident("private") => {
                let mask: syn::Ident = list.parse_args().map_err(|_| {
                    syn::Error::new(span, "expected `private(hash)` or `private(none)`")
                })?;
                let privacy = match mask.to_string().as_str() {
                    "hash" => PrivacyOption::Hashed,
                    "none" => PrivacyOption::Private,
                    other => {
                        return Err(syn::Error::new(
                            mask.span(),
                            format!("unknown mask `{other}`; expected `hash` or `none`"),
                        ));
                    }
                };
                set_once(&mut spec.privacy, privacy, "privacy", span)?;
            }
            Meta::NameValue(nv) if nv.path.is_ident("privacy") => {
                set_once(
                    &mut spec.privacy,
                    PrivacyOption::Expr(nv.value.clone()),
                    "privacy",
                    span,
                )?;
            }
            Meta::NameValue(nv) if nv.path.is_ident("format") => {
                set_once(&mut spec.format, parse_format(&nv.value)?, "format", span)?;
            }
            Meta::NameValue(nv) if nv.path.is_ident("align") => {
                set_once(&mut spec.align, parse_align(&nv.value)?, "align", span)?;
            }
            _ => {
                return Err(syn::Error::new(
                    span,
                    "unknown option; expected `public`, `private`, `private(hash)`, \
                     `privacy = ...`, `format = ...` or `align = ...`",
                ));
            }
        }
    }
    Ok(spec)
}

fn bare_ident(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => path.path.get_ident().map(ToString::to_string),
        _ => None,
    }
}

/// Splits `name(a)` / `name(a, sign)` into its name, first argument and sign flag.
fn helper_call(expr: &Expr) -> Result<Option<(String, Expr, bool)>> {
    let Expr::Call(call) = expr else {
        return Ok(None);
    };
    let Some(name) = bare_ident(&call.func) else {
        return Ok(None);
    };
    if !matches!(name.as_str(), "fixed" | "decimal" | "left" | "right") {
        return Ok(None);
    }

    let mut args = call.args.iter();
    let Some(first) = args.next() else {
        return Err(syn::Error::new(
            call.span(),
            format!("`{name}` expects an argument"),
        ));
    };
    let sign = match args.next() {
        None => false,
        Some(flag) if bare_ident(flag).as_deref() == Some("sign") => true,
        Some(other) => {
            return Err(syn::Error::new(
                other.span(),
                "expected `sign` as the second argument",
            ));
        }
    };
    if let Some(extra) = args.next() {
        return Err(syn::Error::new(extra.span(), "unexpected argument"));
    }
    Ok(Some((name, first.clone(), sign)))
}

fn parse_format(expr: &Expr) -> Result<FormatOption> {
    match bare_ident(expr).as_deref() {
        Some("truth") => return Ok(FormatOption::Truth),
        Some("answer") => return Ok(FormatOption::Answer),
        _ => {}
    }
    match helper_call(expr)? {
        Some((name, precision, sign)) if name == "fixed" => {
            Ok(FormatOption::Fixed { precision, sign })
        }
        Some((name, min_digits, sign)) if name == "decimal" => {
            Ok(FormatOption::Decimal { min_digits, sign })
        }
        Some((name, _, _)) => Err(syn::Error::new(
            expr.span(),
            format!("`{name}(..)` is an alignment, not a format"),
        )),
        None => Ok(FormatOption::Expr(expr.clone())),
    }
}

fn parse_align(expr: &Expr) -> Result<AlignOption> {
    if bare_ident(expr).as_deref() == Some("none") {
        return Ok(AlignOption::None);
    }
    match helper_call(expr)? {
        Some((_, _, true)) => Err(syn::Error::new(
            expr.span(),
            "alignment does not take `sign`",
        )),
        Some((name, width, false)) if name == "left" => Ok(AlignOption::Left(width)),
        Some((name, width, false)) if name == "right" => Ok(AlignOption::Right(width)),
        Some((name, _, _)) => Err(syn::Error::new(
            expr.span(),
            format!("`{name}(..)` is a format, not an alignment"),
        )),
        None => Ok(AlignOption::Expr(expr.clone())),
    }
}

impl ValueSpec {
    /// Builds the `ValueOptions` expression for this argument.
    pub(crate) fn options_tokens(&self, root: &TokenStream) -> TokenStream {
        let format = self.format.as_ref().map(|format| {
            let value = match format {
                FormatOption::Truth => quote! { #root::BoolFormat::Truth },
                FormatOption::Answer => quote! { #root::BoolFormat::Answer },
                FormatOption::Fixed { precision, sign } => {
                    let sign = sign.then(|| quote! { .with_positive_sign() });
                    quote! { #root::FloatFormat::fixed(#precision) #sign }
                }
                FormatOption::Decimal { min_digits, sign } => {
                    let sign = sign.then(|| quote! { .with_positive_sign() });
                    quote! { #root::IntegerFormat::decimal(#min_digits) #sign }
                }
                FormatOption::Expr(expr) => quote! { #expr },
            };
            quote! { .with_format(#value) }
        });
        let privacy = self.privacy.as_ref().map(|privacy| {
            let value = match privacy {
                PrivacyOption::Public => quote! { #root::Privacy::Public },
                PrivacyOption::Private => quote! { #root::Privacy::PRIVATE },
                PrivacyOption::Hashed => quote! { #root::Privacy::HASHED },
                PrivacyOption::Expr(expr) => quote! { #expr },
            };
            quote! { .with_privacy(#value) }
        });
        quote! { #root::ValueOptions::new() #format #privacy }
    }

    /// Builds the `Alignment` expression, if an alignment was given.
    pub(crate) fn alignment_tokens(&self, root: &TokenStream) -> Option<TokenStream> {
        self.align.as_ref().map(|align| match align {
            AlignOption::None => quote! { #root::Alignment::None },
            AlignOption::Left(width) => quote! { #root::Alignment::Left(#width) },
            AlignOption::Right(width) => quote! { #root::Alignment::Right(#width) },
            AlignOption::Expr(expr) => quote! { #expr },
        })
    }
}
