//! In-memory model of a source metadata document: classes, methods, fields and
//! bridge links, each named by a dual obfuscated/official [`Named`] record.
#![forbid(unsafe_code)]

mod error;
mod io;
mod merge;
mod metadata;
mod named;
mod version;

pub use crate::error::{MetadataError, Result};
pub use crate::merge::merge_on_obfuscated_names;
pub use crate::metadata::{
    BouncingTargetMetadata, ClassMetadata, FieldMetadata, MetadataStats, MethodMetadata,
    MethodReference, SourceMetadata,
};
pub use crate::named::Named;
pub use crate::version::SpecVersion;
