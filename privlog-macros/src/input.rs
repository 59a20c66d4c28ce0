//! Parsing of the `message!` argument list.
//!
//! ```text
//! message!("template", arg, arg => options, name = arg => options, ...)
//! ```

use proc_macro2::Span;
use syn::{
    Expr, Ident, LitStr, Result, Token,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

use crate::options::ValueSpec;

pub(crate) struct Argument {
    pub(crate) name: Option<Ident>,
    pub(crate) expr: Expr,
    pub(crate) spec: ValueSpec,
    pub(crate) span: Span,
}

pub(crate) struct MessageInput {
    pub(crate) template: LitStr,
    pub(crate) positional: Vec<Argument>,
    pub(crate) named: Vec<Argument>,
}

impl Parse for Argument {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let is_named = input.peek(Ident)
            && input.peek2(Token![=])
            && !input.peek2(Token![==])
            && !input.peek2(Token![=>]);
        let name = if is_named {
            let name: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            Some(name)
        } else {
            None
        };

        let expr: Expr = input.parse()?;
        let spec = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            input.parse()?
        } else {
            ValueSpec::default()
        };

        let span = name.as_ref().map_or_else(|| expr.span(), Ident::span);
        Ok(Self {
            name,
            expr,
            spec,
            span,
        })
    }
}

impl Parse for MessageInput {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let template: LitStr = input.parse().map_err(|err| {
            syn::Error::new(err.span(), "expected a string literal format string")
        })?;

        let mut positional = Vec::new();
        let mut named: Vec<Argument> = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let argument: Argument = input.parse()?;
            match &argument.name {
                Some(name) => {
                    if named.iter().any(|other| other.name.as_ref() == Some(name)) {
                        return Err(syn::Error::new(
                            name.span(),
                            format!("duplicate argument named `{name}`"),
                        ));
                    }
                    named.push(argument);
                }
                None if !named.is_empty() => {
                    return Err(syn::Error::new(
                        argument.span,
                        "positional arguments cannot follow named arguments",
                    ));
                }
                None => positional.push(argument),
            }
        }

        Ok(Self {
            template,
            positional,
            named,
        })
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;
    use crate::options::PrivacyOption;

    fn parse(tokens: proc_macro2::TokenStream) -> Result<MessageInput> {
        syn::parse2(tokens)
    }

    #[test]
    fn template_only() {
        let input = parse(quote! { "hello" }).unwrap();
        assert_eq!(input.template.value(), "hello");
        assert!(input.positional.is_empty());
        assert!(input.named.is_empty());
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let input = parse(quote! { "{}", a, }).unwrap();
        assert_eq!(input.positional.len(), 1);
    }

    #[test]
    fn positional_and_named_arguments() {
        let input = parse(quote! { "{} {who}", count => public, who = user.name() => private(hash) })
            .unwrap();
        assert_eq!(input.positional.len(), 1);
        assert!(matches!(
            input.positional[0].spec.privacy,
            Some(PrivacyOption::Public)
        ));
        assert_eq!(input.named.len(), 1);
        assert_eq!(input.named[0].name.as_ref().unwrap(), "who");
        assert!(matches!(
            input.named[0].spec.privacy,
            Some(PrivacyOption::Hashed)
        ));
    }

    #[test]
    fn comparison_is_not_a_named_argument() {
        let input = parse(quote! { "{}", a == b }).unwrap();
        assert_eq!(input.positional.len(), 1);
        assert!(input.named.is_empty());
    }

    #[test]
    fn ident_followed_by_options_is_positional() {
        let input = parse(quote! { "{}", a => public }).unwrap();
        assert_eq!(input.positional.len(), 1);
        assert!(input.named.is_empty());
    }

    #[test]
    fn missing_template_errors() {
        let err = parse(quote! { value }).err().unwrap();
        assert!(err.to_string().contains("expected a string literal"));
    }

    #[test]
    fn duplicate_named_argument_errors() {
        let err = parse(quote! { "{a}", a = 1, a = 2 }).err().unwrap();
        assert!(err.to_string().contains("duplicate argument named `a`"));
    }

    #[test]
    fn positional_after_named_errors() {
        let err = parse(quote! { "{a} {}", a = 1, 2 }).err().unwrap();
        assert!(err.to_string().contains("cannot follow named"));
    }
}
