//! Export module — turn a whole password store into a KeePass 2 CSV file.
//!
//! The export is one pass over the store: walk, decrypt, parse, write a
//! row. The first error stops everything; rows already written stay in the
//! output file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::errors::{PassExportError, Result};
use crate::secret::SecretSource;
use crate::store::{walk_store, SecretWalker};

/// Result of a finished export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of data rows written (the header is not counted).
    pub entries: usize,
}

/// Drives a full export of one store through a `SecretSource`.
pub struct Exporter<S> {
    store_root: PathBuf,
    extension: String,
    source: S,
}

impl<S: SecretSource> Exporter<S> {
    pub fn new(store_root: impl Into<PathBuf>, extension: impl Into<String>, source: S) -> Self {
        Self {
            store_root: store_root.into(),
            extension: extension.into(),
            source,
        }
    }

    /// Export the store to the file at `path`.
    ///
    /// The store is opened before the output is touched, so an unreadable
    /// store leaves no file behind. A new file is created owner-only; an
    /// existing one is truncated.
    pub fn export_to_path(&self, path: &Path) -> Result<ExportSummary> {
        let secrets = walk_store(&self.store_root, &self.extension)?;

        let file = create_output_file(path).map_err(|source| PassExportError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

        self.write_rows(secrets, file)
            .map_err(|err| into_output_error(path, err))
    }

    /// Export the store as CSV into any writer.
    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<ExportSummary> {
        let secrets = walk_store(&self.store_root, &self.extension)?;
        self.write_rows(secrets, writer)
    }

    fn write_rows<W: Write>(&self, secrets: SecretWalker, writer: W) -> Result<ExportSummary> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        csv.write_record(Entry::FIELDS)?;

        let mut entries = 0;
        for id in secrets {
            let id = id?;
            let plaintext = self.source.decrypt(&id)?;
            let entry = Entry::parse(&id, &plaintext);
            csv.serialize(&entry)?;

            tracing::debug!(group = %id.group, title = %id.title, "exported entry");
            entries += 1;
        }

        csv.flush()?;
        tracing::info!(entries, store = %self.store_root.display(), "export complete");
        Ok(ExportSummary { entries })
    }
}

/// Create (or truncate) the output file, readable by the owner only.
///
/// The mode is applied at creation time; no process-wide umask is touched.
fn create_output_file(path: &Path) -> std::io::Result<fs::File> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
    }

    #[cfg(not(unix))]
    {
        fs::File::create(path)
    }
}

/// Attribute I/O failures raised while writing rows to the output file.
fn into_output_error(path: &Path, err: PassExportError) -> PassExportError {
    match err {
        PassExportError::Io(source) => PassExportError::OutputWrite {
            path: path.to_path_buf(),
            source,
        },
        PassExportError::Csv(e) if e.is_io_error() => {
            let source = match e.into_kind() {
                csv::ErrorKind::Io(source) => source,
                kind => std::io::Error::other(format!("{kind:?}")),
            };
            PassExportError::OutputWrite {
                path: path.to_path_buf(),
                source,
            }
        }
        other => other,
    }
}
