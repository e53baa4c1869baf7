//! Resolution of obfuscated-only names in a merged class tree.
//!
//! A merged tree is adapted in two passes. [`SignatureAdapter`] fills in the official
//! half of owners, superclasses, interfaces, descriptors and generic signatures;
//! [`BouncerAdapter`] then points bridge methods at the real methods they forward to.
//! Each pass reads lookup maps produced by [`collect`] and returns a fresh tree.

#![forbid(unsafe_code)]

mod bouncers;
mod collect;
mod error;
mod pipeline;
mod signatures;

pub use bouncers::{adapt_bouncers, BouncerAdapter};
pub use collect::{collect, method_key, reference_key, IdentityMaps};
pub use error::{AdaptError, Identity, Result};
pub use pipeline::{adapt_types, merge_and_adapt};
pub use signatures::{adapt_signatures, SignatureAdapter};
