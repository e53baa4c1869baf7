//! Joins two documents describing the same class hierarchy on their obfuscated names.
//!
//! The left document is expected to be the official-rich one (e.g. converted from an
//! official mapping file); the right one the structure-rich one (read from the compiled
//! artifact). Name records of matched entries are merged with the left side winning,
//! access flags and bridge links come from the right side when it has them. Entries
//! present on only one side are kept as they are.

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{MetadataError, Result};
use crate::metadata::{ClassMetadata, FieldMetadata, MethodMetadata, SourceMetadata};
use crate::named::Named;

pub fn merge_on_obfuscated_names(
    left: &SourceMetadata,
    right: &SourceMetadata,
) -> Result<SourceMetadata> {
    if !right.minecraft_version.is_empty() && left.minecraft_version != right.minecraft_version {
        tracing::warn!(
            left = %left.minecraft_version,
            right = %right.minecraft_version,
            "merging metadata of different minecraft versions"
        );
    }

    let classes = merge_classes(&left.classes, &right.classes)?;
    tracing::debug!(
        left = left.classes.len(),
        right = right.classes.len(),
        merged = classes.len(),
        "merged top-level classes"
    );

    Ok(SourceMetadata {
        spec_version: left.spec_version,
        minecraft_version: left.minecraft_version.clone(),
        classes,
    })
}

fn merge_classes(left: &[ClassMetadata], right: &[ClassMetadata]) -> Result<Vec<ClassMetadata>> {
    merge_keyed(left, right, class_key, merge_class)
}

fn merge_class(left: &ClassMetadata, right: &ClassMetadata) -> Result<ClassMetadata> {
    Ok(ClassMetadata {
        name: left.name.merge(&right.name),
        super_name: left.super_name.merge(&right.super_name),
        signature: left.signature.merge(&right.signature),
        interfaces: merge_keyed(&left.interfaces, &right.interfaces, interface_key, |l, r| {
            Ok(l.merge(r))
        })?,
        security_specification: pick_access(
            left.security_specification,
            right.security_specification,
        ),
        inner_classes: merge_classes(&left.inner_classes, &right.inner_classes)?,
        methods: merge_keyed(&left.methods, &right.methods, method_key, merge_method)?,
        fields: merge_keyed(&left.fields, &right.fields, field_key, merge_field)?,
    })
}

fn merge_method(left: &MethodMetadata, right: &MethodMetadata) -> Result<MethodMetadata> {
    Ok(MethodMetadata {
        owner: left.owner.merge(&right.owner),
        name: left.name.merge(&right.name),
        descriptor: left.descriptor.merge(&right.descriptor),
        signature: left.signature.merge(&right.signature),
        security_specification: pick_access(
            left.security_specification,
            right.security_specification,
        ),
        bouncing_target: right
            .bouncing_target
            .clone()
            .or_else(|| left.bouncing_target.clone()),
    })
}

fn merge_field(left: &FieldMetadata, right: &FieldMetadata) -> Result<FieldMetadata> {
    Ok(FieldMetadata {
        owner: left.owner.merge(&right.owner),
        name: left.name.merge(&right.name),
        descriptor: left.descriptor.merge(&right.descriptor),
        signature: left.signature.merge(&right.signature),
        security_specification: pick_access(
            left.security_specification,
            right.security_specification,
        ),
    })
}

fn pick_access(left: u32, right: u32) -> u32 {
    if right != 0 {
        right
    } else {
        left
    }
}

/// Pairs entries of `left` and `right` with equal keys and merges them.
///
/// Entries sharing a key are paired in order. Output order is the left order, followed by
/// right-only entries in right order.
fn merge_keyed<T, K>(
    left: &[T],
    right: &[T],
    key: impl Fn(&T) -> Result<K>,
    merge: impl Fn(&T, &T) -> Result<T>,
) -> Result<Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
{
    let mut unmatched: IndexMap<K, VecDeque<(usize, &T)>> = IndexMap::with_capacity(right.len());
    for (index, item) in right.iter().enumerate() {
        unmatched.entry(key(item)?).or_default().push_back((index, item));
    }

    let mut merged = Vec::with_capacity(left.len().max(right.len()));
    for item in left {
        let other = unmatched
            .get_mut(&key(item)?)
            .and_then(|queue| queue.pop_front());
        match other {
            Some((_, other)) => merged.push(merge(item, other)?),
            None => merged.push(item.clone()),
        }
    }

    let mut rest: Vec<(usize, &T)> = unmatched.into_values().flatten().collect();
    rest.sort_by_key(|(index, _)| *index);
    merged.extend(rest.into_iter().map(|(_, item)| item.clone()));
    Ok(merged)
}

fn class_key(class: &ClassMetadata) -> Result<String> {
    join_key(&class.name, "class", &class.name)
}

fn method_key(method: &MethodMetadata) -> Result<(String, String)> {
    Ok((
        join_key(&method.name, "method", &method.name)?,
        join_key(&method.descriptor, "method descriptor of", &method.name)?,
    ))
}

/// Obfuscated fields may share a name and differ only by type, so the descriptor is part of
/// the key whenever it is known.
fn field_key(field: &FieldMetadata) -> Result<(String, Option<String>)> {
    Ok((
        join_key(&field.name, "field", &field.name)?,
        field.descriptor.obfuscated_name().map(str::to_owned),
    ))
}

/// Interfaces without an obfuscated name are keyed by whatever name they carry.
fn interface_key(interface: &Named) -> Result<String> {
    Ok(interface
        .obfuscated_name()
        .or_else(|| interface.official_name())
        .unwrap_or_default()
        .to_owned())
}

fn join_key(named: &Named, kind: &'static str, record: &Named) -> Result<String> {
    named
        .obfuscated_name()
        .map(str::to_owned)
        .ok_or_else(|| MetadataError::MissingJoinKey {
            kind,
            record: record.to_string(),
        })
}
