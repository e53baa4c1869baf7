//! Substitution of class names inside JVM descriptors and generic signatures.
//!
//! Mappings are plain obfuscated → official tables; a name without an entry is left as it
//! is. Only malformed input is an error.
#![forbid(unsafe_code)]

mod descriptor;
mod error;
mod key;
mod remapper;
mod signature;

pub use crate::descriptor::{
    remap_descriptor, remap_field_descriptor, remap_method_descriptor, BaseType,
};
pub use crate::error::{RemapError, Result};
pub use crate::key::MethodKey;
pub use crate::remapper::{
    rewrite_generic_signature, rewrite_type_descriptor, rewrite_type_reference, ClassRemapper,
    NameRemapper,
};
pub use crate::signature::{remap_signature, SignatureKind};
