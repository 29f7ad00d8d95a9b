//! Pipeline: decode → recognize → normalize → emit, one line at a time.
//!
//! Output is one JSON object per normalized event: the raw event name and
//! device timestamp (when configured and known) followed by the flattened
//! [`NormalizedEvent`] with its `event` tag.

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use routenorm_core::config::{Config, Policy};
use routenorm_core::{normalize, NormalizeError, NormalizedEvent};
use routenorm_feeds::{decode, RawRecord};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Per-run counters. `lines == normalized + ignored + unrecognized + failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub lines: u64,
    pub normalized: u64,
    /// Blank or non-event lines.
    pub ignored: u64,
    /// Event names no rule claims.
    pub unrecognized: u64,
    /// Lines that failed to decode or normalize.
    pub failed: u64,
}

#[derive(Serialize)]
struct OutputRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    utc: Option<DateTime<Utc>>,
    #[serde(flatten)]
    event: &'a NormalizedEvent,
}

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize every line of `reader` into `writer`.
    ///
    /// Lines are UTF-8 lossy converted, so stray bytes from a device never end
    /// the run. With a `fail` policy the first offending line aborts the run;
    /// output already written for earlier lines stays written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> anyhow::Result<Summary> {
        let format = self.config.input.format;
        let mut summary = Summary::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed to read line {}", line_no + 1))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            summary.lines += 1;

            let line = String::from_utf8_lossy(trim_line_ending(&buf));

            let record = match decode(format, &line) {
                Ok(Some(record)) => record,
                Ok(None) => {
                    summary.ignored += 1;
                    continue;
                }
                Err(err) => {
                    summary.failed += 1;
                    self.reject(line_no, err.into())?;
                    continue;
                }
            };

            match normalize(&record.event, &record.location) {
                Ok(event) => {
                    self.emit(&mut writer, &record, &event)
                        .with_context(|| format!("failed to write event from line {line_no}"))?;
                    summary.normalized += 1;
                }
                Err(NormalizeError::UnrecognizedEvent(name)) => {
                    summary.unrecognized += 1;
                    if self.config.pipeline.on_unknown == Policy::Fail {
                        bail!("line {line_no}: unrecognized event name {name:?}");
                    }
                    tracing::debug!(line = line_no, event = %name, "skipping unrecognized event");
                }
                Err(err) => {
                    summary.failed += 1;
                    self.reject(line_no, err.into())?;
                }
            }
        }

        writer.flush().context("failed to flush output")?;
        tracing::debug!(?summary, "pipeline finished");
        Ok(summary)
    }

    fn reject(&self, line_no: usize, err: anyhow::Error) -> anyhow::Result<()> {
        if self.config.pipeline.on_error == Policy::Fail {
            return Err(err.context(format!("line {line_no}")));
        }
        tracing::warn!(line = line_no, error = %err, "skipping malformed event");
        Ok(())
    }

    fn emit<W: Write>(
        &self,
        writer: &mut W,
        record: &RawRecord,
        event: &NormalizedEvent,
    ) -> anyhow::Result<()> {
        let include_name = self.config.output.include_name;
        let out = OutputRecord {
            name: include_name.then_some(record.event.name.as_str()),
            utc: if include_name { record.utc } else { None },
            event,
        };
        if self.config.output.pretty {
            serde_json::to_writer_pretty(&mut *writer, &out)?;
        } else {
            serde_json::to_writer(&mut *writer, &out)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest;
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
    }
    line
}
