// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Renderable model of a copied attribute.
//!
//! Attributes are not cloned token by token: each one is parsed into a small
//! tagged union and rendered back. Anything outside the union (expressions,
//! byte strings, generic type arguments) fails to parse, and the copier skips
//! that attribute.
//!
//! | Form | Example |
//! |------|---------|
//! | `Flag` | `skip` |
//! | `Named` | `rename = "userName"` |
//! | `Nested` | `length(min = 1, max = 64)` |
//! | `Positional` | `"literal"`, `[1, 2]` |
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | `Str` | escaped string literal |
//! | `Bool` | `true` / `false` |
//! | `Char` | escaped char literal |
//! | `Int` / `Float` | digits with the original suffix, optional sign |
//! | `Path` | enum value or type reference as written |
//! | `Array` | `[..]`, values rendered recursively |

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, TokenStreamExt, quote};
use syn::{
    Attribute, Ident, Lit, LitBool, LitChar, LitFloat, LitInt, LitStr, Meta, Path, PathSegment,
    Token, bracketed,
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token
};

/// Literal or path value inside an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// Character literal.
    Char(char),
    /// Integer literal.
    Int {
        /// Leading minus sign.
        negative: bool,
        /// Base 10 digits.
        digits:   String,
        /// Type suffix (`u8`, `i64`, ..), possibly empty.
        suffix:   String
    },
    /// Floating point literal.
    Float {
        /// Leading minus sign.
        negative: bool,
        /// Base 10 digits.
        digits:   String,
        /// Type suffix (`f32`, `f64`), possibly empty.
        suffix:   String
    },
    /// Enum value or type reference.
    Path(Path),
    /// Array of values.
    Array(Vec<AttrValue>)
}

/// One argument of a list attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrArg {
    /// `skip`
    Flag(Path),
    /// `rename = "x"`
    Named(Path, AttrValue),
    /// `length(min = 1)`
    Nested(Path, Vec<AttrArg>),
    /// `"x"`
    Positional(AttrValue)
}

/// Body of a copied attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum DecorationBody {
    /// `#[path]`
    Word,
    /// `#[path(args)]`
    List(Vec<AttrArg>),
    /// `#[path = value]`
    Value(AttrValue)
}

/// A copied attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    /// Attribute path.
    pub path: Path,
    /// Attribute body.
    pub body: DecorationBody
}

/// Path whose segments may be keywords (`crate`, `type`).
fn parse_any_path(input: ParseStream<'_>) -> syn::Result<Path> {
    let leading_colon: Option<Token![::]> = input.parse()?;
    let mut segments = Punctuated::new();
    loop {
        let ident = Ident::parse_any(input)?;
        segments.push_value(PathSegment::from(ident));
        if !input.peek(Token![::]) {
            break;
        }
        segments.push_punct(input.parse()?);
    }
    Ok(Path {
        leading_colon,
        segments
    })
}

fn from_lit(lit: Lit, negative: bool) -> syn::Result<AttrValue> {
    let value = match lit {
        Lit::Int(int) => AttrValue::Int {
            negative,
            digits: int.base10_digits().to_string(),
            suffix: int.suffix().to_string()
        },
        Lit::Float(float) => AttrValue::Float {
            negative,
            digits: float.base10_digits().to_string(),
            suffix: float.suffix().to_string()
        },
        other if negative => {
            return Err(syn::Error::new_spanned(other, "only numbers can be negated"));
        }
        Lit::Str(string) => AttrValue::Str(string.value()),
        Lit::Bool(boolean) => AttrValue::Bool(boolean.value),
        Lit::Char(character) => AttrValue::Char(character.value()),
        other => return Err(syn::Error::new_spanned(other, "unsupported literal"))
    };
    Ok(value)
}

impl Parse for AttrValue {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            return from_lit(input.parse()?, true);
        }
        if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            let items = Punctuated::<AttrValue, Token![,]>::parse_terminated(&content)?;
            return Ok(Self::Array(items.into_iter().collect()));
        }
        if input.peek(Lit) {
            return from_lit(input.parse()?, false);
        }
        parse_any_path(input).map(Self::Path)
    }
}

impl Parse for AttrArg {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(Lit) || input.peek(Token![-]) || input.peek(token::Bracket) {
            return input.parse().map(Self::Positional);
        }
        let path = parse_any_path(input)?;
        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            return Ok(Self::Named(path, input.parse()?));
        }
        if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            let args = Punctuated::<AttrArg, Token![,]>::parse_terminated(&content)?;
            return Ok(Self::Nested(path, args.into_iter().collect()));
        }
        Ok(Self::Flag(path))
    }
}

impl Decoration {
    /// Parse an attribute into its renderable form.
    ///
    /// # Errors
    ///
    /// Returns an error when the attribute uses a form outside the model.
    pub fn parse(attr: &Attribute) -> syn::Result<Self> {
        let body = match &attr.meta {
            Meta::Path(_) => DecorationBody::Word,
            Meta::List(_) => {
                let args = attr.parse_args_with(Punctuated::<AttrArg, Token![,]>::parse_terminated)?;
                DecorationBody::List(args.into_iter().collect())
            }
            Meta::NameValue(meta) => DecorationBody::Value(syn::parse2(meta.value.to_token_stream())?)
        };
        Ok(Self {
            path: attr.path().clone(),
            body
        })
    }
}

fn sign(tokens: &mut TokenStream, negative: bool) {
    if negative {
        tokens.append_all(quote!(-));
    }
}

impl ToTokens for AttrValue {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let span = Span::call_site();
        match self {
            Self::Str(value) => LitStr::new(value, span).to_tokens(tokens),
            Self::Bool(value) => LitBool::new(*value, span).to_tokens(tokens),
            Self::Char(value) => LitChar::new(*value, span).to_tokens(tokens),
            Self::Int {
                negative,
                digits,
                suffix
            } => {
                sign(tokens, *negative);
                LitInt::new(&format!("{digits}{suffix}"), span).to_tokens(tokens);
            }
            Self::Float {
                negative,
                digits,
                suffix
            } => {
                sign(tokens, *negative);
                LitFloat::new(&format!("{digits}{suffix}"), span).to_tokens(tokens);
            }
            Self::Path(path) => path.to_tokens(tokens),
            Self::Array(items) => tokens.append_all(quote!([#(#items),*]))
        }
    }
}

impl ToTokens for AttrArg {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Flag(path) => path.to_tokens(tokens),
            Self::Named(path, value) => tokens.append_all(quote!(#path = #value)),
            Self::Nested(path, args) => tokens.append_all(quote!(#path(#(#args),*))),
            Self::Positional(value) => value.to_tokens(tokens)
        }
    }
}

impl ToTokens for Decoration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let path = &self.path;
        let rendered = match &self.body {
            DecorationBody::Word => quote!(#[#path]),
            DecorationBody::List(args) => quote!(#[#path(#(#args),*)]),
            DecorationBody::Value(value) => quote!(#[#path = #value])
        };
        tokens.append_all(rendered);
    }
}
