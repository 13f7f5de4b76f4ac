//! `peano!(N)`: depth aliases `D0 = Z`, `D1 = S<D0>`, ..., `DN = S<D(N-1)>`.
//!
//! Stream comparison recurses on a Peano depth; the aliases keep that depth
//! readable at the use site (`StreamEq<B, D16>`).

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (1..=input.max).map(|n| {
        let curr = format_ident!("D{}", n);
        let prev = format_ident!("D{}", n - 1);
        let doc = format!("Depth {n}.");
        quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        }
    });

    quote! {
        /// Depth 0.
        pub type D0 = Z;
        #(#aliases)*
    }
}
