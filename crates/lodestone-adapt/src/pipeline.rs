use lodestone_metadata::{merge_on_obfuscated_names, SourceMetadata};

use crate::bouncers::BouncerAdapter;
use crate::collect::collect;
use crate::error::Result;
use crate::signatures::SignatureAdapter;

/// Runs both rewriting passes over a merged tree.
///
/// Official method names only settle after the signature pass, so the bouncer pass
/// works from maps collected again on the adapted tree rather than the first snapshot.
pub fn adapt_types(merged: &SourceMetadata) -> Result<SourceMetadata> {
    let maps = collect(merged)?;
    let adapter = SignatureAdapter::new(&maps);
    let classes = merged
        .classes
        .iter()
        .map(|class| adapter.adapt_class(class))
        .collect::<Result<Vec<_>>>()?;
    let adapted = SourceMetadata {
        classes,
        ..merged.clone()
    };
    tracing::debug!(
        unresolved = adapted.stats().unresolved,
        "signature pass finished"
    );

    let maps = collect(&adapted)?;
    let adapter = BouncerAdapter::new(&maps);
    let classes = adapted
        .classes
        .iter()
        .map(|class| adapter.adapt_class(class))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(classes = classes.len(), "bouncer pass finished");

    Ok(SourceMetadata { classes, ..adapted })
}

/// Joins `left` (official-rich) and `right` (structure-rich) on obfuscated names, then
/// adapts the result. Nothing is returned unless every stage succeeds.
pub fn merge_and_adapt(left: &SourceMetadata, right: &SourceMetadata) -> Result<SourceMetadata> {
    let merged = merge_on_obfuscated_names(left, right)?;
    adapt_types(&merged)
}
