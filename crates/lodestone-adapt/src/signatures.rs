//! First rewriting pass: gives every obfuscated-only owner, superclass, interface,
//! descriptor and generic signature its official counterpart.

use std::collections::HashMap;

use lodestone_metadata::{ClassMetadata, FieldMetadata, MethodMetadata, Named};
use lodestone_remap::{ClassRemapper, MethodKey, NameRemapper, RemapError};

use crate::collect::IdentityMaps;
use crate::error::Result;

pub struct SignatureAdapter<'a> {
    maps: &'a IdentityMaps,
    method_names: HashMap<MethodKey, String>,
}

impl<'a> SignatureAdapter<'a> {
    pub fn new(maps: &'a IdentityMaps) -> Self {
        Self {
            maps,
            method_names: maps.method_names(),
        }
    }

    fn remapper(&self) -> NameRemapper<'_> {
        self.maps.remapper(&self.method_names)
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
        let fields = class
            .fields
            .iter()
            .map(|field| self.adapt_field(field))
            .collect::<Result<Vec<_>>>()?;

        let remapper = self.remapper();
        let interfaces = class
            .interfaces
            .iter()
            .map(|interface| interface.resolve_with(|obf| remapper.map_type(obf)))
            .collect::<Result<Vec<_>, RemapError>>()?;

        Ok(ClassMetadata {
            name: class.name.clone(),
            super_name: self.resolve_class(&class.super_name),
            signature: class
                .signature
                .resolve_with(|obf| remapper.map_signature(obf, false))?,
            interfaces,
            security_specification: class.security_specification,
            inner_classes,
            methods,
            fields,
        })
    }

    fn adapt_method(&self, method: &MethodMetadata) -> Result<MethodMetadata> {
        let remapper = self.remapper();
        Ok(MethodMetadata {
            owner: self.resolve_class(&method.owner),
            name: method.name.clone(),
            descriptor: method
                .descriptor
                .resolve_with(|obf| remapper.map_descriptor(obf))?,
            signature: method
                .signature
                .resolve_with(|obf| remapper.map_signature(obf, false))?,
            security_specification: method.security_specification,
            bouncing_target: method.bouncing_target.clone(),
        })
    }

    fn adapt_field(&self, field: &FieldMetadata) -> Result<FieldMetadata> {
        let remapper = self.remapper();
        Ok(FieldMetadata {
            owner: self.resolve_class(&field.owner),
            name: field.name.clone(),
            descriptor: field
                .descriptor
                .resolve_with(|obf| remapper.map_descriptor(obf))?,
            signature: field
                .signature
                .resolve_with(|obf| remapper.map_signature(obf, true))?,
            security_specification: field.security_specification,
        })
    }

    /// Classes outside the tree (e.g. `java/lang/Object`) resolve to their obfuscated name.
    fn resolve_class(&self, name: &Named) -> Named {
        match name {
            Named::Obfuscated(obf) => {
                let official = self.maps.classes.map_class_fail(obf).unwrap_or_else(|| {
                    tracing::trace!(class = %obf, "class not in class map, keeping obfuscated name");
                    obf.as_str()
                });
                name.with_official(official)
            }
            other => other.clone(),
        }
    }
}

pub fn adapt_signatures(class: &ClassMetadata, maps: &IdentityMaps) -> Result<ClassMetadata> {
    SignatureAdapter::new(maps).adapt_class(class)
}
