//! Identifier of a single secret inside the password store.

use std::fmt;

/// A secret's location in the store: the directory it lives in and its
/// file name with the secret extension stripped.
///
/// `group` is relative to the store root with `/` separators, and is empty
/// for secrets that sit directly in the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretId {
    pub group: String,
    pub title: String,
}

impl SecretId {
    pub fn new(group: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            title: title.into(),
        }
    }

    /// The name `pass` knows this secret by, e.g. `personal/email`.
    pub fn pass_name(&self) -> String {
        if self.group.is_empty() {
            self.title.clone()
        } else {
            format!("{}/{}", self.group, self.title)
        }
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pass_name())
    }
}
