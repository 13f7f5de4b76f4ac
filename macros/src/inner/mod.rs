// Macros used by tola-props itself

pub mod peano;
