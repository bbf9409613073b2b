//! `pass2keepass <OUTPUT_FILE>` — export the password store to CSV.

use crate::cli::{output, Cli};
use crate::config::{home_dir, Settings};
use crate::errors::Result;
use crate::export::Exporter;
use crate::secret::PassCommand;

/// Execute the export.
pub fn execute(cli: &Cli) -> Result<()> {
    let home = home_dir()?;
    let settings = Settings::load(&home)?;
    let store_root = settings.store_root(&home);

    tracing::debug!(
        store = %store_root.display(),
        program = %settings.pass_program,
        "resolved settings"
    );

    let dest = &cli.output_file;
    output::info(&format!("File to write: {}", dest.display()));
    if dest.exists() {
        output::warning(&format!(
            "{} already exists and will be overwritten",
            dest.display()
        ));
    }

    let source = PassCommand::new(settings.pass_program.as_str());
    let exporter = Exporter::new(store_root, settings.secret_extension.as_str(), source);
    let summary = exporter.export_to_path(dest)?;

    let noun = if summary.entries == 1 { "entry" } else { "entries" };
    output::success(&format!(
        "Export finished: {} {noun} written to {}",
        summary.entries,
        dest.display()
    ));

    Ok(())
}
