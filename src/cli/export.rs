//! Export command: rooms file in, spreadsheet/document/JSON out.

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{JsonExporter, PdfExporter, TableExporter, XlsxExporter};
use crate::ledger::RoomLedger;
use crate::services::RoomsFile;

/// Output format of the `export` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet workbook (.xlsx)
    Xlsx,
    /// Paginated landscape document (.pdf)
    Pdf,
    /// Flat table snapshot (.json)
    Json,
}

impl ExportFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Json => "json",
        }
    }

    fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "xlsx" => Some(Self::Xlsx),
            "pdf" => Some(Self::Pdf),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn exporter(self) -> Box<dyn TableExporter> {
        match self {
            Self::Xlsx => Box::new(XlsxExporter),
            Self::Pdf => Box::new(PdfExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

/// Export a rooms file to a spreadsheet, document, or JSON snapshot
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to the rooms TOML file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output path (defaults to dimensionamento_[date].[ext] in the
    /// configured output directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let file = RoomsFile::load(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load rooms file: {e:#}")))?;

        let mut ledger = RoomLedger::new();
        file.populate(&mut ledger)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let snapshot = ledger.snapshot();
        snapshot
            .require_rows()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let format = self.resolve_format()?;
        let output_path = self.resolve_output_path(format);
        let exporter = format.exporter();

        exporter
            .export(&snapshot, &output_path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "✓ Exported {} room{} as {} to: {}",
            ledger.len(),
            if ledger.len() == 1 { "" } else { "s" },
            exporter.format_name(),
            output_path.display()
        );

        Ok(())
    }

    /// Explicit `--format` wins; otherwise the output extension decides.
    fn resolve_format(&self) -> CliResult<ExportFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        match &self.output {
            Some(path) => ExportFormat::from_extension(path).ok_or_else(|| {
                CliError::validation(format!(
                    "Cannot infer format from '{}'; use --format or an xlsx/pdf/json extension",
                    path.display()
                ))
            }),
            None => Ok(ExportFormat::Xlsx),
        }
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn resolve_output_path(&self, format: ExportFormat) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: dimensionamento_[date].[ext]
        let config = Config::load().unwrap_or_default();
        let date = chrono::Local::now().format("%Y-%m-%d");
        config
            .output_dir()
            .join(format!("dimensionamento_{}.{}", date, format.extension()))
    }
}
