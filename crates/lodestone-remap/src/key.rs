use std::fmt;

/// Identifies a method within one class tree as `owner/name` immediately followed by the
/// descriptor, e.g. `a/b(La;)V`. All three components are obfuscated names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodKey(String);

impl MethodKey {
    pub fn new(owner: &str, name: &str, descriptor: &str) -> Self {
        Self(format!("{owner}/{name}{descriptor}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
