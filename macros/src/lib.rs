//! Procedural macros for the tola-props accessor system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Attribute)]` | struct/enum | Attribute descriptor with key identity |
//! | `#[derive(Method)]` | struct/enum | Method descriptor |
//! | `#[derive(KeyType)]` | enum | Key type namespace and runtime query |
//! | `peano!(N)` | - | Depth aliases for stream comparison (internal) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Attribute)]
//! #[attribute(value = String, key = "first_name")]
//! struct FirstName;
//!
//! #[derive(Method)]
//! #[method(args = (u32,), output = bool, mutates)]
//! struct Resize;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive macro implementing the `Attribute` trait.
///
/// # Options
///
/// | Option | Meaning |
/// |--------|---------|
/// | `value = T` | payload type (required) |
/// | `key = "str"` | string key, `Key = &'static str` |
/// | `key = Enum::Variant` / `key = 42` | value key; type inferred from the path or literal, must implement `KeyType` |
/// | `key_type = T` | value key type when it cannot be inferred |
/// | `read_only` | no setter may be bound |
/// | `name = "..."` | display name (defaults to the type name) |
///
/// Without `key`, the name is the key and the identity comes from the
/// declaration site, so two unkeyed attributes never collide.
///
/// # Usage
/// ```ignore
/// #[derive(Attribute)]
/// #[attribute(value = u32, key = Column::Age, read_only)]
/// struct Age;
/// ```
#[proc_macro_derive(Attribute, attributes(attribute))]
pub fn derive_attribute(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_attribute(input).into()
}

/// Derive macro implementing `KeyType` and `KeyQuery`.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, KeyType)]
/// enum Column { Width, Height }
/// ```
#[proc_macro_derive(KeyType)]
pub fn derive_key_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_key_type(input).into()
}

/// Derive macro implementing the `Method` trait.
///
/// # Options
///
/// `args = (A, B)`, `output = T`, `mutates` (receiver is `&mut`), plus
/// `key`, `key_type` and `name` as for `Attribute`.
#[proc_macro_derive(Method, attributes(method))]
pub fn derive_method(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_method(input).into()
}
