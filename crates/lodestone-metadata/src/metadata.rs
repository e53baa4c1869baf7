use serde::{Deserialize, Serialize};

use crate::named::Named;
use crate::version::SpecVersion;

/// Root of a metadata document: every top-level class of one game version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetadata {
    #[serde(default)]
    pub spec_version: SpecVersion,
    #[serde(default)]
    pub minecraft_version: String,
    #[serde(default)]
    pub classes: Vec<ClassMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetadata {
    pub name: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub super_name: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub signature: Named,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Named>,
    #[serde(default)]
    pub security_specification: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_classes: Vec<ClassMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodMetadata {
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub owner: Named,
    pub name: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub descriptor: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub signature: Named,
    #[serde(default)]
    pub security_specification: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bouncing_target: Option<BouncingTargetMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub owner: Named,
    pub name: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub descriptor: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub signature: Named,
    #[serde(default)]
    pub security_specification: u32,
}

/// Link from a synthetic bridge method to the method it forwards to (`target`)
/// and/or the method that owns the bridge (`owner`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BouncingTargetMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<MethodReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<MethodReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodReference {
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub owner: Named,
    pub name: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub descriptor: Named,
    #[serde(default, skip_serializing_if = "Named::is_empty")]
    pub signature: Named,
}

impl MethodReference {
    /// Reference pointing at `method`, carrying over all four of its names.
    pub fn to_method(method: &MethodMetadata) -> Self {
        Self {
            owner: method.owner.clone(),
            name: method.name.clone(),
            descriptor: method.descriptor.clone(),
            signature: method.signature.clone(),
        }
    }
}

/// Record counts over a whole document, inner classes included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetadataStats {
    pub classes: usize,
    pub methods: usize,
    pub fields: usize,
    pub bouncers: usize,
    /// Name records that still carry only an obfuscated name.
    pub unresolved: usize,
}

impl SourceMetadata {
    pub fn stats(&self) -> MetadataStats {
        let mut stats = MetadataStats::default();
        for class in &self.classes {
            class.accumulate_stats(&mut stats);
        }
        stats
    }
}

impl ClassMetadata {
    fn accumulate_stats(&self, stats: &mut MetadataStats) {
        let unresolved = |names: &[&Named]| names.iter().filter(|n| n.is_unresolved()).count();

        stats.classes += 1;
        stats.unresolved += unresolved(&[&self.name, &self.super_name, &self.signature]);
        stats.unresolved += self.interfaces.iter().filter(|n| n.is_unresolved()).count();

        for method in &self.methods {
            stats.methods += 1;
            stats.unresolved += unresolved(&[
                &method.owner,
                &method.name,
                &method.descriptor,
                &method.signature,
            ]);
            if method.bouncing_target.is_some() {
                stats.bouncers += 1;
            }
        }
        for field in &self.fields {
            stats.fields += 1;
            stats.unresolved += unresolved(&[
                &field.owner,
                &field.name,
                &field.descriptor,
                &field.signature,
            ]);
        }
        for inner in &self.inner_classes {
            inner.accumulate_stats(stats);
        }
    }
}
