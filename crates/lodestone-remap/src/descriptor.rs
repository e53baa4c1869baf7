use crate::error::{RemapError, Result};
use crate::remapper::ClassRemapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl BaseType {
    pub fn from_descriptor_char(c: u8) -> Option<Self> {
        match c {
            b'B' => Some(BaseType::Byte),
            b'C' => Some(BaseType::Char),
            b'D' => Some(BaseType::Double),
            b'F' => Some(BaseType::Float),
            b'I' => Some(BaseType::Int),
            b'J' => Some(BaseType::Long),
            b'S' => Some(BaseType::Short),
            b'Z' => Some(BaseType::Boolean),
            _ => None,
        }
    }
}

/// Rewrites a field descriptor (`I`, `[La;`, ...) or a method descriptor (`(La;I)Lb;`),
/// substituting every embedded class name.
pub fn remap_descriptor<R: ClassRemapper + ?Sized>(desc: &str, classes: &R) -> Result<String> {
    if desc.starts_with('(') {
        remap_method_descriptor(desc, classes)
    } else {
        remap_field_descriptor(desc, classes)
    }
}

pub fn remap_field_descriptor<R: ClassRemapper + ?Sized>(desc: &str, classes: &R) -> Result<String> {
    let mut out = String::with_capacity(desc.len());
    let rest = remap_field_type(desc, desc, classes, &mut out)?;
    if !rest.is_empty() {
        return Err(RemapError::InvalidDescriptor(desc.to_string()));
    }
    Ok(out)
}

pub fn remap_method_descriptor<R: ClassRemapper + ?Sized>(
    desc: &str,
    classes: &R,
) -> Result<String> {
    let Some(mut rest) = desc.strip_prefix('(') else {
        return Err(RemapError::InvalidDescriptor(desc.to_string()));
    };

    let mut out = String::with_capacity(desc.len());
    out.push('(');
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        if rest.is_empty() {
            return Err(RemapError::InvalidDescriptor(desc.to_string()));
        }
        rest = remap_field_type(rest, desc, classes, &mut out)?;
    }
    out.push(')');

    let rest = if let Some(rest) = rest.strip_prefix('V') {
        out.push('V');
        rest
    } else {
        remap_field_type(rest, desc, classes, &mut out)?
    };

    if !rest.is_empty() {
        return Err(RemapError::InvalidDescriptor(desc.to_string()));
    }
    Ok(out)
}

/// Copies one field type from the front of `input` into `out`, mapping object types,
/// and returns the unconsumed remainder. `full` is only used for error reporting.
fn remap_field_type<'a, R: ClassRemapper + ?Sized>(
    input: &'a str,
    full: &str,
    classes: &R,
    out: &mut String,
) -> Result<&'a str> {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Err(RemapError::InvalidDescriptor(full.to_string()));
    }
    match bytes[0] {
        c if BaseType::from_descriptor_char(c).is_some() => {
            out.push(c as char);
            Ok(&input[1..])
        }
        b'L' => {
            let Some(end) = input.find(';') else {
                return Err(RemapError::InvalidDescriptor(full.to_string()));
            };
            let name = &input[1..end];
            if name.is_empty() {
                return Err(RemapError::InvalidDescriptor(full.to_string()));
            }
            out.push('L');
            out.push_str(classes.map_class(name));
            out.push(';');
            Ok(&input[end + 1..])
        }
        b'[' => {
            out.push('[');
            remap_field_type(&input[1..], full, classes, out)
        }
        _ => Err(RemapError::InvalidDescriptor(full.to_string())),
    }
}
