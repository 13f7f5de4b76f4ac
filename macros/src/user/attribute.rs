use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    DeriveInput, Expr, Ident, LitStr, Type,
};

use crate::common::{declaration_id, helper_options, next_option, parse_assigned, set_once, str_key_id, Key};

/// Options of `#[attribute(...)]`.
#[derive(Default)]
struct AttributeOptions {
    value: Option<Type>,
    key: Option<Expr>,
    key_type: Option<Type>,
    read_only: bool,
    name: Option<LitStr>,
}

impl Parse for AttributeOptions {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut options = AttributeOptions::default();
        while !input.is_empty() {
            let option: Ident = input.parse()?;
            match option.to_string().as_str() {
                "value" => set_once(&mut options.value, parse_assigned(input)?, &option)?,
                "key" => set_once(&mut options.key, parse_assigned(input)?, &option)?,
                "key_type" => set_once(&mut options.key_type, parse_assigned(input)?, &option)?,
                "name" => set_once(&mut options.name, parse_assigned(input)?, &option)?,
                "read_only" => options.read_only = true,
                other => {
                    return Err(syn::Error::new(
                        option.span(),
                        format!(
                            "unknown option `{other}`; expected `value`, `key`, `key_type`, `read_only` or `name`"
                        ),
                    ));
                }
            }
            if !next_option(input)? {
                break;
            }
        }
        Ok(options)
    }
}

/// #[derive(Attribute)] implements `Attribute` for a marker type.
///
/// The key id is computed once into a local const; the type-level stream is
/// spelled from that const so both always agree:
///
/// - no key: FNV-1a of the declaration site, resolved by the compiler;
/// - `key = "literal"`: BLAKE3 of the literal, computed here;
/// - value key: the key type's `KeyType::NAMESPACE` folded with the value.
pub fn expand_derive_attribute(input: DeriveInput) -> TokenStream2 {
    match derive_attribute(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    }
}

fn derive_attribute(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Attribute` cannot be derived for generic types; attributes are plain markers",
        ));
    }

    let options: AttributeOptions = helper_options(&input.attrs, "attribute")?;
    let Some(value) = options.value else {
        return Err(syn::Error::new_spanned(
            ident,
            "missing payload type: add `#[attribute(value = <type>)]`",
        ));
    };

    let ident_str = ident.to_string();
    let name = options.name.map_or(ident_str.clone(), |name| name.value());
    let read_only = if options.read_only {
        quote! { ::tola_props::Present }
    } else {
        quote! { ::tola_props::Absent }
    };

    let (key_ty, key_value, id, matches) = match Key::resolve(options.key, options.key_type)? {
        Key::Name => (
            quote! { &'static str },
            quote! { #name },
            declaration_id(&ident_str),
            quote! { ::tola_props::key::str_key_matches(Self::KEY, query) },
        ),
        Key::Str(lit) => {
            let id = Literal::u64_suffixed(str_key_id(&lit.value()));
            (
                quote! { &'static str },
                quote! { #lit },
                quote! { #id },
                quote! { ::tola_props::key::str_key_matches(Self::KEY, query) },
            )
        }
        Key::Value { expr, ty } => (
            quote! { #ty },
            quote! { #expr },
            quote! {
                ::tola_props::primitives::const_utils::value_key_id(
                    <#ty as ::tola_props::key::KeyType>::NAMESPACE,
                    (#expr) as u64,
                )
            },
            quote! { ::tola_props::key::value_key_matches(&Self::KEY, query) },
        ),
    };

    Ok(quote! {
        const _: () = {
            const __ID: u64 = #id;

            impl ::tola_props::Attribute for #ident {
                type Value = #value;
                type Key = #key_ty;
                type ReadOnly = #read_only;
                type Stream = ::tola_props::id_stream!(__ID);

                const KEY: Self::Key = #key_value;
                const ID: u64 = __ID;
                const NAME: &'static str = #name;

                fn matches_key(query: ::tola_props::key::KeyRef<'_>) -> bool {
                    #matches
                }
            }
        };
    })
}
