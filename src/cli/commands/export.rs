//! Extract, convert and init-config command handlers

use crate::cli::error::CliError;
use crate::config::{AppSchemaConfig, CONFIG_FILENAME, sample_config};
use crate::export::{ExportFormat, ExportResult, export_schema};
use crate::extractor::{ExtractError, SchemaExtractor};
use crate::source::{FileSchemaSource, HttpSchemaSource, SchemaLookup, parse_document};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Arguments shared by the rendering commands
#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    /// Format token; `None` uses the configured default
    pub format: Option<String>,
    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,
    /// Overwrite an existing output file
    pub force: bool,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
}

impl ExportArgs {
    fn load_config(&self) -> Result<AppSchemaConfig, CliError> {
        let config = match &self.config {
            Some(path) => AppSchemaConfig::load_file(path)?,
            None => AppSchemaConfig::load(Path::new("."))?,
        };
        Ok(config)
    }

    fn resolve_format(&self, config: &AppSchemaConfig) -> ExportFormat {
        self.format
            .as_deref()
            .map(ExportFormat::from_token)
            .unwrap_or(config.export.default_format)
    }
}

/// Check if file exists and handle overwrite
pub fn check_file_overwrite(output_path: &Path, force: bool) -> Result<(), CliError> {
    if output_path.exists() && !force {
        return Err(CliError::InvalidArgument(format!(
            "Output file exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }
    Ok(())
}

/// Write export output to file
pub fn write_export_output(output_path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::FileWriteError(
                output_path.to_path_buf(),
                format!("Failed to create directory: {}", e),
            )
        })?;
    }

    std::fs::write(output_path, content)
        .map_err(|e| CliError::FileWriteError(output_path.to_path_buf(), e.to_string()))
}

/// Output path with the format's conventional extension when none was given
pub fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.file_extension())
    }
}

fn emit(result: &ExportResult, format: ExportFormat, args: &ExportArgs) -> Result<(), CliError> {
    match &args.output {
        Some(path) => {
            let path = output_path(path, format);
            check_file_overwrite(&path, args.force)?;
            write_export_output(&path, &result.content)?;
            eprintln!(
                "Exported {} ({}) to {}",
                format,
                format.content_kind(),
                path.display()
            );
        }
        None => println!("{}", result.content.trim_end()),
    }
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::IoError(format!("Failed to create runtime: {}", e)))
}

/// Handle the extract command: fetch a hosted application's schema and render it
pub fn handle_extract(address: &str, args: &ExportArgs) -> Result<(), CliError> {
    let config = args.load_config()?;
    let format = args.resolve_format(&config);
    let extractor = SchemaExtractor::new(HttpSchemaSource::new(config.source.clone()));

    let result = runtime()?.block_on(extractor.extract(address, format))?;
    emit(&result, format, args)
}

/// Handle the convert command: render a raw schema document from a file or stdin
pub fn handle_convert(input: &str, args: &ExportArgs) -> Result<(), CliError> {
    let config = args.load_config()?;
    let format = args.resolve_format(&config);

    let result = if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::IoError(format!("Failed to read stdin: {}", e)))?;
        convert_content(&content, format, config.source.types_key())?
    } else {
        let mut source = FileSchemaSource::new();
        if let Some(key) = config.source.types_key() {
            source = source.with_types_key(key);
        }
        let extractor = SchemaExtractor::new(source);
        runtime()?.block_on(extractor.extract(input, format))?
    };

    emit(&result, format, args)
}

/// Render a schema document held in memory
pub fn convert_content(
    content: &str,
    format: ExportFormat,
    types_key: Option<&str>,
) -> Result<ExportResult, CliError> {
    let document: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| CliError::InvalidArgument(format!("Input is not JSON: {}", e)))?;

    match parse_document(document, types_key).map_err(ExtractError::from)? {
        SchemaLookup::Found(raw) => Ok(export_schema(&raw, format)?),
        SchemaLookup::NotFound => Err(ExtractError::NotFound("stdin".to_string()).into()),
    }
}

/// Handle the init-config command: write a sample `.app-schema.toml`
pub fn handle_init_config(dir: &Path, force: bool) -> Result<(), CliError> {
    let path = dir.join(CONFIG_FILENAME);
    check_file_overwrite(&path, force)?;
    write_export_output(&path, sample_config())?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
