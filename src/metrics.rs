//! Run summary: the single aggregation point for dispatch results.

use anyhow::Context;
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use ingest_dispatch::DispatchResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Tally of a finished (or in-progress) run.
///
/// Successes are results in `[200, 300)`; everything else, including
/// transport errors, counts as an error.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Units the run was asked to execute
    pub total: u64,
    /// Results in the success band
    pub successes: u64,
    /// Non-2xx statuses and transport errors
    pub errors: u64,
    /// Results that never got a status code
    pub transport_errors: u64,
    /// Count per HTTP status code
    pub status_counts: BTreeMap<u16, u64>,
    /// Wall clock duration in milliseconds
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl RunSummary {
    /// Start an empty summary for a run of `total` units.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            successes: 0,
            errors: 0,
            transport_errors: 0,
            status_counts: BTreeMap::new(),
            duration_ms: 0,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Fold one result into the tally.
    pub fn record(&mut self, result: &DispatchResult) {
        if result.is_success() {
            self.successes += 1;
        } else {
            self.errors += 1;
        }

        match result {
            DispatchResult::Status(code) => *self.status_counts.entry(*code).or_insert(0) += 1,
            DispatchResult::Error(_) => self.transport_errors += 1,
        }
    }

    /// Results recorded so far.
    pub fn completed(&self) -> u64 {
        self.successes + self.errors
    }

    /// Stamp the run as finished.
    pub fn finish(&mut self, elapsed: Duration) {
        self.duration_ms = elapsed.as_millis() as u64;
        self.completed_at = Some(Utc::now());
    }

    pub fn requests_per_second(&self) -> f64 {
        if self.duration_ms > 0 {
            self.completed() as f64 / (self.duration_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }

    /// Write the summary as pretty JSON.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write metrics to {path:?}"))?;
        Ok(())
    }

    /// Render the summary as a table for terminal output.
    pub fn format_table(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Outcome", "Count"]);

        for (code, count) in &self.status_counts {
            let label = Cell::new(format!("HTTP {code}"));
            let label = if (200..300).contains(code) {
                label.fg(Color::Green)
            } else {
                label.fg(Color::Red)
            };
            table.add_row(vec![label, Cell::new(format_number(*count))]);
        }
        if self.transport_errors > 0 {
            table.add_row(vec![
                Cell::new("Transport error").fg(Color::Red),
                Cell::new(format_number(self.transport_errors)),
            ]);
        }
        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(format!(
                "{} ({} ok / {} failed)",
                format_number(self.completed()),
                format_number(self.successes),
                format_number(self.errors)
            )),
        ]);

        format!(
            "{table}\nDuration: {:.1}s  Throughput: {:.1} req/s\n",
            self.duration_ms as f64 / 1000.0,
            self.requests_per_second()
        )
    }
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
