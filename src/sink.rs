//! Result formatting and emission
//!
//! Every outcome becomes exactly one record: a plain/colored line or a JSON
//! object. The record is printed to stdout and, when an output file is
//! configured, appended to it under a lock so records from concurrent tasks
//! never interleave.

use crate::{ClassificationOutcome, InspectorError, JsonStyle, Mode, OutputFormat, OutputSettings, OutputTarget};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    host: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    data: JsonData<'a>,
}

/// Zero and empty values are left out of the serialized object.
#[derive(Debug, Default, Serialize)]
struct JsonData<'a> {
    #[serde(skip_serializing_if = "is_zero_status")]
    status_code: u16,
    #[serde(skip_serializing_if = "is_zero_length")]
    content_length: i64,
    #[serde(skip_serializing_if = "str::is_empty")]
    content_type: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    suffix: &'a str,
}

fn is_zero_status(value: &u16) -> bool {
    *value == 0
}

fn is_zero_length(value: &i64) -> bool {
    *value == 0
}

/// Render one outcome as a record, without the trailing newline.
pub fn format_outcome(outcome: &ClassificationOutcome, settings: &OutputSettings) -> Result<String, InspectorError> {
    match settings.format {
        OutputFormat::Json => format_json(outcome, settings.json_style),
        OutputFormat::Plain => Ok(format_text(outcome, settings.verbose, false)),
        OutputFormat::Color => Ok(format_text(outcome, settings.verbose, true)),
    }
}

fn format_json(outcome: &ClassificationOutcome, style: JsonStyle) -> Result<String, InspectorError> {
    let data = match outcome {
        ClassificationOutcome::Passive { label, .. } => JsonData {
            suffix: label,
            ..Default::default()
        },
        ClassificationOutcome::Active {
            label,
            status_code,
            content_length,
            content_type,
            ..
        } => JsonData {
            status_code: *status_code,
            content_length: *content_length,
            content_type,
            suffix: label,
        },
    };
    let record = JsonRecord {
        host: outcome.url(),
        kind: outcome.mode().as_str(),
        data,
    };

    let rendered = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&record)?,
        JsonStyle::Compact => serde_json::to_string(&record)?,
    };
    Ok(rendered)
}

fn format_text(outcome: &ClassificationOutcome, verbose: bool, color: bool) -> String {
    let body = match outcome {
        ClassificationOutcome::Passive { url, label } => {
            let label = format!("[{label}]");
            if color {
                format!("{} {}", url, label.yellow())
            } else {
                format!("{url} {label}")
            }
        }
        ClassificationOutcome::Active {
            url,
            label,
            status_code,
            content_length,
            content_type,
        } => {
            let status = format!("[{status_code}]");
            let length = format!("[{content_length}]");
            let content_type = format!("[{content_type}]");
            let label = format!("[{label}]");
            if color {
                format!(
                    "{} {} {} {} {}",
                    url,
                    status.green(),
                    length.magenta(),
                    content_type.magenta(),
                    label.yellow()
                )
            } else {
                format!("{url} {status} {length} {content_type} {label}")
            }
        }
    };

    if !verbose {
        return body;
    }

    let mode = outcome.mode().as_str();
    let prefix = match (color, outcome.mode()) {
        (false, _) => mode.to_string(),
        (true, Mode::Active) => mode.blue().bold().to_string(),
        (true, Mode::Passive) => mode.cyan().to_string(),
    };
    format!("{prefix}: {body}")
}

/// Shared writer for all tasks. Owns zero or one output file.
#[derive(Debug)]
pub struct OutputSink {
    settings: OutputSettings,
    file: Option<Mutex<File>>,
}

impl OutputSink {
    /// Open the configured output file, truncating or appending as requested.
    pub async fn open(settings: OutputSettings) -> Result<Self, InspectorError> {
        let file = match &settings.target {
            None => None,
            Some(target) => {
                let mut options = OpenOptions::new();
                options.create(true);
                match target {
                    OutputTarget::Overwrite(_) => options.write(true).truncate(true),
                    OutputTarget::Append(_) => options.append(true),
                };
                let file = options
                    .open(target.path())
                    .await
                    .map_err(|e| InspectorError::output_file(target.path(), e))?;
                Some(Mutex::new(file))
            }
        };

        Ok(Self { settings, file })
    }

    /// Sink that only prints to stdout.
    pub fn stdout_only(mut settings: OutputSettings) -> Self {
        settings.target = None;
        Self {
            settings,
            file: None,
        }
    }

    /// Format and write one outcome. Each destination receives the record in a
    /// single write.
    pub async fn emit(&self, outcome: &ClassificationOutcome) -> Result<(), InspectorError> {
        let mut record = format_outcome(outcome, &self.settings)?;
        record.push('\n');

        {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(record.as_bytes())?;
        }

        if let Some(file) = &self.file {
            let mut file = file.lock().await;
            file.write_all(record.as_bytes()).await?;
            file.flush().await?;
        }

        Ok(())
    }

    /// Flush and sync the output file, if any.
    pub async fn finish(&self) -> Result<(), InspectorError> {
        if let Some(file) = &self.file {
            let mut file = file.lock().await;
            file.flush().await?;
            file.sync_all().await?;
        }
        Ok(())
    }
}
