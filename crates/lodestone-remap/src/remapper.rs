use std::collections::HashMap;

use crate::descriptor::{remap_descriptor, remap_field_descriptor};
use crate::error::Result;
use crate::key::MethodKey;
use crate::signature::{remap_signature, SignatureKind};

/// Answers "what is the official internal name of this obfuscated class?".
pub trait ClassRemapper {
    /// Returns `None` when the class is not known to this remapper.
    fn map_class_fail(&self, internal_name: &str) -> Option<&str>;

    /// Unknown classes keep their name.
    fn map_class<'a>(&'a self, internal_name: &'a str) -> &'a str {
        self.map_class_fail(internal_name).unwrap_or(internal_name)
    }
}

impl ClassRemapper for HashMap<String, String> {
    fn map_class_fail(&self, internal_name: &str) -> Option<&str> {
        self.get(internal_name).map(String::as_str)
    }
}

/// Class-name and method-name substitution over descriptors and generic signatures.
#[derive(Debug, Clone, Copy)]
pub struct NameRemapper<'a> {
    classes: &'a HashMap<String, String>,
    methods: &'a HashMap<MethodKey, String>,
}

impl<'a> NameRemapper<'a> {
    pub fn new(
        classes: &'a HashMap<String, String>,
        methods: &'a HashMap<MethodKey, String>,
    ) -> Self {
        Self { classes, methods }
    }

    /// Maps an internal class name, or an array descriptor such as `[La;`.
    pub fn map_type(&self, internal_name: &str) -> Result<String> {
        if internal_name.starts_with('[') {
            remap_field_descriptor(internal_name, self)
        } else {
            Ok(self.map_class(internal_name).to_owned())
        }
    }

    pub fn map_descriptor(&self, desc: &str) -> Result<String> {
        remap_descriptor(desc, self)
    }

    /// `is_field` selects the single-reference-type grammar of field signatures; otherwise
    /// the input is read as a class signature or a method signature.
    pub fn map_signature(&self, signature: &str, is_field: bool) -> Result<String> {
        let kind = if is_field {
            SignatureKind::Field
        } else {
            SignatureKind::ClassOrMethod
        };
        remap_signature(signature, kind, self)
    }

    pub fn map_method_name<'n>(&'n self, owner: &str, name: &'n str, descriptor: &str) -> &'n str {
        self.methods
            .get(&MethodKey::new(owner, name, descriptor))
            .map(String::as_str)
            .unwrap_or(name)
    }
}

impl ClassRemapper for NameRemapper<'_> {
    fn map_class_fail(&self, internal_name: &str) -> Option<&str> {
        self.classes.map_class_fail(internal_name)
    }
}

/// Rewrites every class reference embedded in a field or method descriptor.
pub fn rewrite_type_descriptor(desc: &str, classes: &HashMap<String, String>) -> Result<String> {
    remap_descriptor(desc, classes)
}

pub fn rewrite_generic_signature(
    signature: &str,
    classes: &HashMap<String, String>,
    methods: &HashMap<MethodKey, String>,
    is_field: bool,
) -> Result<String> {
    NameRemapper::new(classes, methods).map_signature(signature, is_field)
}

pub fn rewrite_type_reference(
    internal_name: &str,
    classes: &HashMap<String, String>,
) -> Result<String> {
    let methods = HashMap::new();
    NameRemapper::new(classes, &methods).map_type(internal_name)
}
