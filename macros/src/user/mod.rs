//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Attribute)]` | on marker type | Define an attribute descriptor |
//! | `#[derive(Method)]` | on marker type | Define a method descriptor |
//! | `#[derive(KeyType)]` | on key enum | Give a key type its namespace |

mod attribute;
mod key_type;
mod method;

pub use attribute::expand_derive_attribute;
pub use key_type::expand_derive_key_type;
pub use method::expand_derive_method;
