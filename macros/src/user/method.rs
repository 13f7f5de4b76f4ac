use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    DeriveInput, Expr, Ident, LitStr, Type,
};

use crate::common::{helper_options, next_option, parse_assigned, set_once, Key};

/// Options of `#[method(...)]`.
#[derive(Default)]
struct MethodOptions {
    args: Option<Type>,
    output: Option<Type>,
    mutates: bool,
    key: Option<Expr>,
    key_type: Option<Type>,
    name: Option<LitStr>,
}

impl Parse for MethodOptions {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut options = MethodOptions::default();
        while !input.is_empty() {
            let option: Ident = input.parse()?;
            match option.to_string().as_str() {
                "args" => set_once(&mut options.args, parse_assigned(input)?, &option)?,
                "output" => set_once(&mut options.output, parse_assigned(input)?, &option)?,
                "key" => set_once(&mut options.key, parse_assigned(input)?, &option)?,
                "key_type" => set_once(&mut options.key_type, parse_assigned(input)?, &option)?,
                "name" => set_once(&mut options.name, parse_assigned(input)?, &option)?,
                "mutates" => options.mutates = true,
                other => {
                    return Err(syn::Error::new(
                        option.span(),
                        format!(
                            "unknown option `{other}`; expected `args`, `output`, `mutates`, `key`, `key_type` or `name`"
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

/// #[derive(Method)] implements `Method` for a marker type.
///
/// `args` must be a tuple type and defaults to `()`, as does `output`.
pub fn expand_derive_method(input: DeriveInput) -> TokenStream2 {
    match derive_method(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    }
}

fn derive_method(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Method` cannot be derived for generic types; methods are plain markers",
        ));
    }

    let options: MethodOptions = helper_options(&input.attrs, "method")?;
    if let Some(args) = &options.args {
        if !matches!(args, Type::Tuple(_)) {
            return Err(syn::Error::new_spanned(
                args,
                "`args` must be a tuple type, e.g. `(u32,)` or `(u32, String)`",
            ));
        }
    }

    let args = options.args.map_or_else(|| quote! { () }, |args| quote! { #args });
    let output = options.output.map_or_else(|| quote! { () }, |output| quote! { #output });
    let name = options.name.map_or(ident.to_string(), |name| name.value());
    let receiver = if options.mutates {
        quote! { ::tola_props::method::Exclusive }
    } else {
        quote! { ::tola_props::method::Shared }
    };

    let (key_ty, key_value) = match Key::resolve(options.key, options.key_type)? {
        Key::Name => (quote! { &'static str }, quote! { #name }),
        Key::Str(lit) => (quote! { &'static str }, quote! { #lit }),
        Key::Value { expr, ty } => (quote! { #ty }, quote! { #expr }),
    };

    Ok(quote! {
        impl ::tola_props::Method for #ident {
            type Receiver = #receiver;
            type Args = #args;
            type Output = #output;
            type Key = #key_ty;

            const KEY: Self::Key = #key_value;
            const NAME: &'static str = #name;
        }
    })
}
