//! Secret module — obtaining the plaintext of a secret.
//!
//! Decryption is never done in-process. A `SecretSource` hands back the
//! plaintext for a `SecretId`; the production source shells out to `pass`,
//! tests substitute an in-memory fake.

pub mod pass_command;

pub use pass_command::PassCommand;

use zeroize::Zeroizing;

use crate::errors::Result;
use crate::store::SecretId;

/// Anything that can turn a secret id into its decrypted plaintext.
pub trait SecretSource {
    /// Decrypt one secret. The plaintext is wiped from memory on drop.
    fn decrypt(&self, id: &SecretId) -> Result<Zeroizing<String>>;
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
    fn decrypt(&self, id: &SecretId) -> Result<Zeroizing<String>> {
        (**self).decrypt(id)
    }
}
