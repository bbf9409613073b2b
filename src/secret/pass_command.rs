//! `pass show` — decrypt a secret with the external `pass` tool.

use std::process::{Command, Stdio};

use zeroize::Zeroizing;

use crate::errors::{PassExportError, Result};
use crate::secret::SecretSource;
use crate::store::SecretId;

/// Decrypts secrets by running `<program> show <group>/<title>`.
///
/// Stdin is inherited so gpg-agent can still prompt for a passphrase.
#[derive(Debug, Clone)]
pub struct PassCommand {
    program: String,
}

impl PassCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SecretSource for PassCommand {
    fn decrypt(&self, id: &SecretId) -> Result<Zeroizing<String>> {
        let name = id.pass_name();
        tracing::debug!(program = %self.program, secret = %name, "decrypting");

        let output = Command::new(&self.program)
            .arg("show")
            .arg(&name)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| PassExportError::CollaboratorUnavailable {
                program: self.program.clone(),
                source,
            })?;

        // Wrap immediately so the bytes are wiped on every exit path.
        let stdout = Zeroizing::new(output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                format!("exit code {}", output.status.code().unwrap_or(-1))
            } else {
                stderr
            };
            return Err(PassExportError::DecryptionFailed { id: name, stderr });
        }

        match std::str::from_utf8(&stdout) {
            Ok(text) => Ok(Zeroizing::new(text.to_owned())),
            Err(_) => Err(PassExportError::SecretNotUtf8 { id: name }),
        }
    }
}
