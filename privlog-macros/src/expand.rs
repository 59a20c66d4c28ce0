//! Code generation for `message!`.
//!
//! The expansion is a block that fills a `MessageBuilder` in template order:
//! literal runs become `append_literal` calls and every placeholder becomes an
//! `append_value` (or `append_aligned_value`) call whose producer is a closure
//! over the argument expression. Argument expressions are not evaluated by
//! the expansion itself.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Expr, LitStr, Result};

use crate::{
    input::{Argument, MessageInput},
    options::ValueSpec,
    template::{PlaceholderKey, Segment, captured_ident, parse_template},
};

pub(crate) fn expand(input: MessageInput, root: &TokenStream) -> Result<TokenStream> {
    let MessageInput {
        template,
        positional,
        named,
    } = input;
    let segments = parse_template(&template)?;

    let mut positional_used = vec![false; positional.len()];
    let mut named_used = vec![false; named.len()];
    let builder = syn::Ident::new("builder", Span::mixed_site());
    let mut calls = Vec::with_capacity(segments.len());

    for segment in &segments {
        match segment {
            Segment::Literal(text) => {
                let text = LitStr::new(text, template.span());
                calls.push(quote! { #builder.append_literal(#text); });
            }
            Segment::Placeholder(PlaceholderKey::Index(index)) => {
                let Some(argument) = positional.get(*index) else {
                    return Err(syn::Error::new(
                        template.span(),
                        format!(
                            "placeholder `{{{index}}}` has no matching argument ({} positional argument{} given)",
                            positional.len(),
                            if positional.len() == 1 { "" } else { "s" }
                        ),
                    ));
                };
                mark_used(&mut positional_used[*index], argument)?;
                calls.push(append_call(&builder, &argument.expr, &argument.spec, root));
            }
            Segment::Placeholder(PlaceholderKey::Named(name)) => {
                let found = named
                    .iter()
                    .position(|argument| argument.name.as_ref().is_some_and(|n| n == name));
                match found {
                    Some(position) => {
                        let argument = &named[position];
                        mark_used(&mut named_used[position], argument)?;
                        calls.push(append_call(&builder, &argument.expr, &argument.spec, root));
                    }
                    None => {
                        let ident = captured_ident(name, &template);
                        let expr: Expr = syn::parse_quote!(#ident);
                        calls.push(append_call(&builder, &expr, &ValueSpec::default(), root));
                    }
                }
            }
        }
    }

    let unused = positional
        .iter()
        .zip(&positional_used)
        .chain(named.iter().zip(&named_used))
        .find(|(_, used)| !**used);
    if let Some((argument, _)) = unused {
        return Err(syn::Error::new(
            argument.span,
            "argument never used in the format string",
        ));
    }

    let capacity = segments.len();
    Ok(quote! {
        {
            let mut #builder = #root::MessageBuilder::with_capacity(#capacity);
            #(#calls)*
            #builder.build()
        }
    })
}

fn mark_used(used: &mut bool, argument: &Argument) -> Result<()> {
    if *used {
        return Err(syn::Error::new(
            argument.span,
            "argument used more than once; each value is produced exactly once",
        ));
    }
    *used = true;
    Ok(())
}

fn append_call(
    builder: &syn::Ident,
    expr: &Expr,
    spec: &ValueSpec,
    root: &TokenStream,
) -> TokenStream {
    let options = spec.options_tokens(root);
    match spec.alignment_tokens(root) {
        Some(alignment) => quote! {
            #builder.append_aligned_value(|| { #expr }, #options, #alignment);
        },
        None => quote! {
            #builder.append_value(|| { #expr }, #options);
        },
    }
}
