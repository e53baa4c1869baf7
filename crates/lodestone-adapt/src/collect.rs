use std::collections::HashMap;

use lodestone_metadata::{ClassMetadata, MethodMetadata, MethodReference, Named, SourceMetadata};
use lodestone_remap::{MethodKey, NameRemapper};

use crate::error::{AdaptError, Identity, Result};

/// Lookup tables derived from one snapshot of a class tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMaps {
    /// Obfuscated class name → official class name, inner classes included.
    pub classes: HashMap<String, String>,
    /// Every method of the tree, keyed by its obfuscated [`MethodKey`].
    pub methods: HashMap<MethodKey, MethodMetadata>,
}

impl IdentityMaps {
    /// Method key → official method name, or the obfuscated name where no official one is known.
    ///
    /// Descriptors and signatures only carry class names, so the grammars never consult this
    /// map; it only backs `NameRemapper::map_method_name`.
    pub fn method_names(&self) -> HashMap<MethodKey, String> {
        self.methods
            .iter()
            .filter_map(|(key, method)| {
                let name = method
                    .name
                    .official_name()
                    .or_else(|| method.name.obfuscated_name())?;
                Some((key.clone(), name.to_owned()))
            })
            .collect()
    }

    pub fn remapper<'a>(&'a self, method_names: &'a HashMap<MethodKey, String>) -> NameRemapper<'a> {
        NameRemapper::new(&self.classes, method_names)
    }
}

pub fn collect(metadata: &SourceMetadata) -> Result<IdentityMaps> {
    let mut maps = IdentityMaps::default();
    for class in &metadata.classes {
        collect_class(class, &mut maps)?;
    }
    tracing::debug!(
        classes = maps.classes.len(),
        methods = maps.methods.len(),
        "collected identity maps"
    );
    Ok(maps)
}

fn collect_class(class: &ClassMetadata, maps: &mut IdentityMaps) -> Result<()> {
    for inner in &class.inner_classes {
        collect_class(inner, maps)?;
    }

    let obfuscated = require(&class.name, Identity::Obfuscated, "class name", &class.name)?;
    let official = require(&class.name, Identity::Official, "class name", &class.name)?;
    maps.classes.insert(obfuscated.to_owned(), official.to_owned());

    for method in &class.methods {
        let key = method_key(method)?;
        if maps.methods.contains_key(&key) {
            tracing::warn!(%key, "duplicate method key, keeping the last record");
        }
        maps.methods.insert(key, method.clone());
    }
    Ok(())
}

pub fn method_key(method: &MethodMetadata) -> Result<MethodKey> {
    key_of(&method.owner, &method.name, &method.descriptor)
}

pub fn reference_key(reference: &MethodReference) -> Result<MethodKey> {
    key_of(&reference.owner, &reference.name, &reference.descriptor)
}

fn key_of(owner: &Named, name: &Named, descriptor: &Named) -> Result<MethodKey> {
    Ok(MethodKey::new(
        require(owner, Identity::Obfuscated, "method owner", name)?,
        require(name, Identity::Obfuscated, "method name", name)?,
        require(descriptor, Identity::Obfuscated, "method descriptor", name)?,
    ))
}

fn require<'a>(
    named: &'a Named,
    identity: Identity,
    component: &'static str,
    record: &Named,
) -> Result<&'a str> {
    let half = match identity {
        Identity::Obfuscated => named.obfuscated_name(),
        Identity::Official => named.official_name(),
    };
    half.ok_or_else(|| AdaptError::MissingIdentity {
        identity,
        component,
        record: record.to_string(),
    })
}
