//! Class-name substitution over JVM generic signatures (JVMS §4.7.9.1).
//!
//! The input is walked once with a small recursive-descent reader that copies every
//! token to the output, replacing only the class names inside class type signatures.
//! Type variables, wildcards, bounds and primitive types pass through untouched.

use crate::descriptor::BaseType;
use crate::error::{RemapError, Result};
use crate::remapper::ClassRemapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    /// A single reference type signature, as attached to fields.
    Field,
    /// A class signature (`<T:..>Lsuper;Liface;..`) or a method signature
    /// (`<T:..>(params)ret^throws`), told apart by what follows the type parameters.
    ClassOrMethod,
}

pub fn remap_signature<R: ClassRemapper + ?Sized>(
    signature: &str,
    kind: SignatureKind,
    classes: &R,
) -> Result<String> {
    let mut reader = SignatureRemapper {
        sig: signature,
        pos: 0,
        out: String::with_capacity(signature.len()),
        classes,
    };

    match kind {
        SignatureKind::Field => reader.field_type_signature()?,
        SignatureKind::ClassOrMethod => reader.class_or_method_signature()?,
    }

    if reader.pos != signature.len() {
        return Err(reader.invalid());
    }
    Ok(reader.out)
}

struct SignatureRemapper<'s, 'r, R: ?Sized> {
    sig: &'s str,
    pos: usize,
    out: String,
    classes: &'r R,
}

impl<'s, R: ClassRemapper + ?Sized> SignatureRemapper<'s, '_, R> {
    fn invalid(&self) -> RemapError {
        RemapError::InvalidSignature(self.sig.to_string())
    }

    fn peek(&self) -> Option<u8> {
        self.sig.as_bytes().get(self.pos).copied()
    }

    /// Consumes `expected` and copies it to the output.
    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.peek() != Some(expected) {
            return Err(self.invalid());
        }
        self.pos += 1;
        self.out.push(expected as char);
        Ok(())
    }

    /// Consumes a non-empty run of bytes up to (not including) the first of `stops`.
    fn identifier(&mut self, stops: &[u8]) -> Result<&'s str> {
        let sig = self.sig;
        let start = self.pos;
        let len = sig.as_bytes()[start..]
            .iter()
            .position(|b| stops.contains(b))
            .ok_or_else(|| self.invalid())?;
        if len == 0 {
            return Err(self.invalid());
        }
        self.pos += len;
        Ok(&sig[start..start + len])
    }

    fn class_or_method_signature(&mut self) -> Result<()> {
        if self.peek() == Some(b'<') {
            self.formal_type_parameters()?;
        }

        if self.peek() == Some(b'(') {
            return self.method_rest();
        }

        // Superclass, then any number of interfaces.
        self.class_type_signature()?;
        while self.peek().is_some() {
            self.class_type_signature()?;
        }
        Ok(())
    }

    fn formal_type_parameters(&mut self) -> Result<()> {
        self.expect(b'<')?;
        loop {
            let name = self.identifier(b":")?;
            self.out.push_str(name);

            // Class bound, possibly empty (`T::Ljava/lang/Comparable;`).
            self.expect(b':')?;
            if matches!(self.peek(), Some(b'L' | b'[' | b'T')) {
                self.field_type_signature()?;
            }
            // Interface bounds.
            while self.peek() == Some(b':') {
                self.expect(b':')?;
                self.field_type_signature()?;
            }

            if self.peek() == Some(b'>') {
                return self.expect(b'>');
            }
        }
    }

    fn method_rest(&mut self) -> Result<()> {
        self.expect(b'(')?;
        while self.peek() != Some(b')') {
            self.type_signature()?;
        }
        self.expect(b')')?;

        if self.peek() == Some(b'V') {
            self.expect(b'V')?;
        } else {
            self.type_signature()?;
        }

        while self.peek() == Some(b'^') {
            self.expect(b'^')?;
            match self.peek() {
                Some(b'L') => self.class_type_signature()?,
                Some(b'T') => self.type_variable()?,
                _ => return Err(self.invalid()),
            }
        }
        Ok(())
    }

    fn type_signature(&mut self) -> Result<()> {
        match self.peek() {
            Some(c) if BaseType::from_descriptor_char(c).is_some() => self.expect(c),
            _ => self.field_type_signature(),
        }
    }

    fn field_type_signature(&mut self) -> Result<()> {
        match self.peek() {
            Some(b'L') => self.class_type_signature(),
            Some(b'[') => {
                self.expect(b'[')?;
                self.type_signature()
            }
            Some(b'T') => self.type_variable(),
            _ => Err(self.invalid()),
        }
    }

    fn type_variable(&mut self) -> Result<()> {
        self.expect(b'T')?;
        let name = self.identifier(b";")?;
        self.out.push_str(name);
        self.expect(b';')
    }

    fn class_type_signature(&mut self) -> Result<()> {
        self.expect(b'L')?;
        let mut obfuscated = self.identifier(b"<.;")?.to_string();
        let mapped = self.classes.map_class(&obfuscated).to_string();
        self.out.push_str(&mapped);
        if self.peek() == Some(b'<') {
            self.type_arguments()?;
        }

        while self.peek() == Some(b'.') {
            self.expect(b'.')?;
            let inner = self.identifier(b"<.;")?;

            // Inner classes are named `Outer$Inner`; emit the mapped simple name relative
            // to the mapped outer class.
            let outer_prefix = format!("{}$", self.classes.map_class(&obfuscated));
            obfuscated = format!("{obfuscated}${inner}");
            let mapped = self.classes.map_class(&obfuscated);
            let simple = match mapped.strip_prefix(outer_prefix.as_str()) {
                Some(simple) => simple,
                None => mapped
                    .rsplit(|c| c == '/' || c == '$')
                    .next()
                    .unwrap_or(mapped),
            };
            self.out.push_str(simple);

            if self.peek() == Some(b'<') {
                self.type_arguments()?;
            }
        }

        self.expect(b';')
    }

    fn type_arguments(&mut self) -> Result<()> {
        self.expect(b'<')?;
        loop {
            match self.peek() {
                Some(b'*') => self.expect(b'*')?,
                Some(c @ (b'+' | b'-')) => {
                    self.expect(c)?;
                    self.field_type_signature()?;
                }
                _ => self.field_type_signature()?,
            }
            if self.peek() == Some(b'>') {
                return self.expect(b'>');
            }
        }
    }
}
