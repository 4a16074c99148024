//! CSV interchange for samples and stats reports.
//!
//! Samples: `mode,sut,latency,path`. Stats: `mode,sut,mean,median,min,max`.
//! Fields are quoted only when they contain a comma, quote or line break.
//! Files are rendered in memory first, so a failed run never leaves a
//! partial file behind.

use super::write_text;
use crate::parser::schema::{Sample, Stats};
use crate::utils::config::{SAMPLE_HEADER, STATS_HEADER};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::borrow::Cow;
use std::path::Path;

/// One parsed CSV record and the line it started on
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Write samples to a CSV interchange file
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty or a directory
/// * `OutputError::IoError` - write failed
pub fn write_samples(samples: &[Sample], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing {} samples to: {}", samples.len(), output_path.display());
    write_text(output_path, &samples_to_string(samples))
}

/// Read samples from a CSV interchange file
///
/// # Errors
/// * `OutputError::IoError` - read failed
/// * `OutputError::MalformedRecord` - bad header, field count or latency
pub fn read_samples(input_path: impl AsRef<Path>) -> Result<Vec<Sample>, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading samples from: {}", input_path.display());

    let text = std::fs::read_to_string(input_path)?;
    let samples = parse_samples(&text)?;

    debug!("Loaded {} samples", samples.len());
    Ok(samples)
}

/// Write stats to a CSV report, in the order given
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty or a directory
/// * `OutputError::IoError` - write failed
pub fn write_stats<'a, I>(stats: I, output_path: impl AsRef<Path>) -> Result<(), OutputError>
where
    I: IntoIterator<Item = &'a Stats>,
{
    let output_path = output_path.as_ref();
    info!("Writing stats to: {}", output_path.display());
    write_text(output_path, &stats_to_string(stats))
}

/// Render samples as CSV text, header included
pub fn samples_to_string(samples: &[Sample]) -> String {
    let mut out = format_row(SAMPLE_HEADER.iter().copied());
    for sample in samples {
        let latency = sample.latency().to_string();
        out.push_str(&format_row([
            sample.mode(),
            sample.sut(),
            latency.as_str(),
            sample.source(),
        ]));
    }
    out
}

/// Render stats as CSV text, header included
pub fn stats_to_string<'a, I>(stats: I) -> String
where
    I: IntoIterator<Item = &'a Stats>,
{
    let mut out = format_row(STATS_HEADER.iter().copied());
    for stat in stats {
        let numbers = [stat.mean(), stat.median(), stat.min(), stat.max()].map(|n| n.to_string());
        out.push_str(&format_row(
            [stat.mode(), stat.sut()]
                .into_iter()
                .chain(numbers.iter().map(String::as_str)),
        ));
    }
    out
}

/// Parse CSV interchange text into samples
///
/// Each row maps field by field onto `Sample::new`; the latency is re-rounded.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, OutputError> {
    let mut records = parse_records(text)?.into_iter();

    let header = records.next().ok_or_else(|| OutputError::MalformedRecord {
        line: 1,
        message: "missing header".to_string(),
    })?;
    if header.fields != SAMPLE_HEADER {
        return Err(OutputError::MalformedRecord {
            line: header.line,
            message: format!(
                "expected header '{}', found '{}'",
                SAMPLE_HEADER.join(","),
                header.fields.join(",")
            ),
        });
    }

    records.map(|record| sample_from_record(&record)).collect()
}

/// Map one data record onto a sample
///
/// **Private** - explicit schema mapping
fn sample_from_record(record: &Record) -> Result<Sample, OutputError> {
    let malformed = |message: String| OutputError::MalformedRecord {
        line: record.line,
        message,
    };

    let [mode, sut, latency, path] = record.fields.as_slice() else {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            SAMPLE_HEADER.len(),
            record.fields.len()
        )));
    };

    let latency: f64 = latency
        .trim()
        .parse()
        .map_err(|_| malformed(format!("invalid latency '{}'", latency)))?;

    Sample::new(mode.as_str(), sut.as_str(), latency, path.as_str())
        .map_err(|e| malformed(e.to_string()))
}

/// Split CSV text into records
///
/// Accepts `\n` or `\r\n` line endings, quoted fields with doubled quotes
/// and line breaks inside quotes. Blank lines are dropped.
///
/// # Errors
/// * `OutputError::MalformedRecord` - a quoted field never closes
pub fn parse_records(text: &str) -> Result<Vec<Record>, OutputError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut record_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quoted = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if !fields.is_empty() || !field.is_empty() || quoted {
                    fields.push(std::mem::take(&mut field));
                    records.push(Record {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                quoted = false;
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(OutputError::MalformedRecord {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }

    if !fields.is_empty() || !field.is_empty() || quoted {
        fields.push(field);
        records.push(Record {
            line: record_line,
            fields,
        });
    }

    Ok(records)
}

/// Join fields into one CSV line, newline included
fn format_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let mut row = fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Escape CSV field (handle commas, quotes, newlines)
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
