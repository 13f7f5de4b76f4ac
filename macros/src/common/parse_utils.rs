//! Common parsing utilities
//!
//! Shared option parsing and key handling for `#[attribute(...)]` and
//! `#[method(...)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    spanned::Spanned,
    Attribute, Expr, ExprLit, ExprPath, ExprUnary, Ident, Lit, LitStr, Token, Type, UnOp,
};

// =============================================================================
// Option Parsing: `name = value, flag, ...`
// =============================================================================

/// Parse `= T` after an option name.
pub fn parse_assigned<T: Parse>(input: ParseStream) -> syn::Result<T> {
    input.parse::<Token![=]>()?;
    input.parse()
}

/// Store an option value, rejecting repeats.
pub fn set_once<T>(slot: &mut Option<T>, value: T, option: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(option.span(), format!("duplicate option `{option}`")));
    }
    *slot = Some(value);
    Ok(())
}

/// Consume the `,` between options; `false` at the end of input.
pub fn next_option(input: ParseStream) -> syn::Result<bool> {
    if input.is_empty() {
        return Ok(false);
    }
    input.parse::<Token![,]>()?;
    Ok(!input.is_empty())
}

/// Parse the single `#[helper(...)]` attribute on a derive input.
pub fn helper_options<T: Parse + Default>(attrs: &[Attribute], helper: &str) -> syn::Result<T> {
    let mut found = attrs.iter().filter(|attr| attr.path().is_ident(helper));
    let Some(first) = found.next() else {
        return Ok(T::default());
    };
    if let Some(second) = found.next() {
        return Err(syn::Error::new(
            second.span(),
            format!("duplicate `#[{helper}(...)]`; merge the options into one attribute"),
        ));
    }
    first.parse_args()
}

// =============================================================================
// Keys
// =============================================================================

/// The runtime key of a descriptor.
pub enum Key {
    /// No key given: the descriptor's name doubles as a `&'static str` key.
    Name,
    /// `key = "literal"`
    Str(LitStr),
    /// Integer, `char`, `bool` or fieldless enum key of type `ty`.
    Value { expr: Expr, ty: Type },
}

impl Key {
    pub fn resolve(key: Option<Expr>, key_type: Option<Type>) -> syn::Result<Key> {
        match (key, key_type) {
            (None, None) => Ok(Key::Name),
            (None, Some(ty)) => Err(syn::Error::new(ty.span(), "`key_type` requires a `key`")),
            (Some(Expr::Lit(ExprLit { lit: Lit::Str(lit), .. })), None) => Ok(Key::Str(lit)),
            (Some(Expr::Lit(ExprLit { lit: Lit::Str(lit), .. })), Some(_)) => Err(syn::Error::new(
                lit.span(),
                "string keys are always `&'static str`; drop `key_type`",
            )),
            (Some(expr), Some(ty)) => Ok(Key::Value { expr, ty }),
            (Some(expr), None) => match infer_key_type(&expr) {
                Some(ty) => Ok(Key::Value { expr, ty }),
                None => Err(syn::Error::new(
                    expr.span(),
                    "cannot infer the key type; add `key_type = <type>`",
                )),
            },
        }
    }
}

/// Key type of a literal or `Enum::Variant` path.
///
/// Unsuffixed integers are `i32`, matching Rust's own default.
pub fn infer_key_type(expr: &Expr) -> Option<Type> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => literal_type(lit),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => match expr.as_ref() {
            Expr::Lit(ExprLit { lit: lit @ Lit::Int(_), .. }) => literal_type(lit),
            _ => None,
        },
        Expr::Path(ExprPath { qself: None, path, .. }) if path.segments.len() >= 2 => {
            let keep = path.segments.len() - 1;
            let ty = syn::Path {
                leading_colon: path.leading_colon,
                segments: path.segments.iter().take(keep).cloned().collect(),
            };
            Some(Type::Path(syn::TypePath { qself: None, path: ty }))
        }
        Expr::Group(group) => infer_key_type(&group.expr),
        Expr::Paren(paren) => infer_key_type(&paren.expr),
        _ => None,
    }
}

fn literal_type(lit: &Lit) -> Option<Type> {
    let name = match lit {
        Lit::Int(int) if int.suffix().is_empty() => "i32",
        Lit::Int(int) => int.suffix(),
        Lit::Char(_) => "char",
        Lit::Bool(_) => "bool",
        Lit::Byte(_) => "u8",
        _ => return None,
    };
    syn::parse_str(name).ok()
}

/// Const expression hashing the declaration site of the type `ident`.
///
/// Module path and name separate types across modules; line and column
/// separate same-named types local to different functions.
pub fn declaration_id(ident: &str) -> TokenStream2 {
    quote! {
        ::tola_props::primitives::const_utils::fnv1a_64_str(
            concat!(module_path!(), "::", #ident, "@", line!(), ":", column!())
        )
    }
}

/// 64-bit id of a string key (BLAKE3, first 8 bytes little-endian).
pub fn str_key_id(key: &str) -> u64 {
    let hash = blake3::hash(key.as_bytes());
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inferred(src: &str) -> Option<String> {
        let expr: Expr = syn::parse_str(src).unwrap();
        infer_key_type(&expr).map(|ty| match ty {
            Type::Path(path) => path
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::"),
            other => quote!(#other).to_string(),
        })
    }

    #[test]
    fn test_infer_key_type() {
        assert_eq!(inferred("7").as_deref(), Some("i32"));
        assert_eq!(inferred("7u8").as_deref(), Some("u8"));
        assert_eq!(inferred("-3i64").as_deref(), Some("i64"));
        assert_eq!(inferred("'x'").as_deref(), Some("char"));
        assert_eq!(inferred("Column::Width").as_deref(), Some("Column"));
        assert_eq!(inferred("crate::schema::Column::Width").as_deref(), Some("crate::schema::Column"));
        assert_eq!(inferred("WIDTH").as_deref(), None);
        assert_eq!(inferred("1 + 2").as_deref(), None);
    }

    #[test]
    fn test_str_key_id_is_stable() {
        assert_eq!(str_key_id("age"), str_key_id("age"));
        assert_ne!(str_key_id("age"), str_key_id("Age"));
    }
}
