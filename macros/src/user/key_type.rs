use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::declaration_id;

/// #[derive(KeyType)] makes a type usable as an attribute key.
///
/// The namespace hashes the declaration site, so same-named key types in
/// different modules never share key ids. The type is also a runtime key
/// query matching keys of its own type.
pub fn expand_derive_key_type(input: DeriveInput) -> TokenStream2 {
    match derive_key_type(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    }
}

fn derive_key_type(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`KeyType` cannot be derived for generic types; every instantiation would share one namespace",
        ));
    }
    let namespace = declaration_id(&ident.to_string());

    Ok(quote! {
        impl ::tola_props::key::KeyType for #ident {
            const NAMESPACE: u64 = #namespace;
        }

        impl ::tola_props::key::KeyQuery for #ident {
            #[inline]
            fn key_ref(&self) -> ::tola_props::key::KeyRef<'_> {
                ::tola_props::key::KeyRef::Value(self)
            }
        }
    })
}
