//! Second rewriting pass: points every bouncer (synthetic bridge method) at the fully
//! named method it forwards to.

use std::collections::HashMap;

use lodestone_metadata::{BouncingTargetMetadata, ClassMetadata, MethodMetadata, MethodReference};
use lodestone_remap::MethodKey;

use crate::collect::{reference_key, IdentityMaps};
use crate::error::Result;

pub struct BouncerAdapter<'a> {
    maps: &'a IdentityMaps,
    method_names: HashMap<MethodKey, String>,
}

impl<'a> BouncerAdapter<'a> {
    pub fn new(maps: &'a IdentityMaps) -> Self {
        Self {
            maps,
            method_names: maps.method_names(),
        }
    }

    pub fn adapt_class(&self, class: &ClassMetadata) -> Result<ClassMetadata> {
        let inner_classes = class
            .inner_classes
            .iter()
            .map(|inner| self.adapt_class(inner))
            .collect::<Result<Vec<_>>>()?;
        let methods = class
            .methods
            .iter()
            .map(|method| self.adapt_method(method))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassMetadata {
            inner_classes,
            methods,
            ..class.clone()
        })
    }

    fn adapt_method(&self, method: &MethodMetadata) -> Result<MethodMetadata> {
        let Some(bouncer) = &method.bouncing_target else {
            return Ok(method.clone());
        };

        let bouncing_target = BouncingTargetMetadata {
            target: self.resolve_reference(bouncer.target.as_ref())?,
            owner: self.resolve_reference(bouncer.owner.as_ref())?,
        };
        Ok(MethodMetadata {
            bouncing_target: Some(bouncing_target),
            ..method.clone()
        })
    }

    fn resolve_reference(
        &self,
        reference: Option<&MethodReference>,
    ) -> Result<Option<MethodReference>> {
        let Some(reference) = reference else {
            return Ok(None);
        };

        let key = reference_key(reference)?;
        let Some(matched) = self.maps.methods.get(&key) else {
            tracing::trace!(%key, "bouncer reference not found, keeping it unresolved");
            return Ok(Some(reference.clone()));
        };

        let remapper = self.maps.remapper(&self.method_names);
        Ok(Some(MethodReference {
            signature: matched
                .signature
                .resolve_with(|obf| remapper.map_signature(obf, false))?,
            ..MethodReference::to_method(matched)
        }))
    }
}

pub fn adapt_bouncers(class: &ClassMetadata, maps: &IdentityMaps) -> Result<ClassMetadata> {
    BouncerAdapter::new(maps).adapt_class(class)
}
