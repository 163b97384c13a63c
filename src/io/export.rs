use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::LedgerService;
use crate::domain::{format_cents, Cents, Entry};

/// Ledger snapshot for full JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub balance_cents: Cents,
    pub entries: Vec<Entry>,
}

/// Exporter for converting ledger data to external formats.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export entries to CSV. Malformed stored lines are skipped under the
    /// same policy as the balance fold.
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let entries = self.service.entries();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["sign", "amount", "comment"])?;

        let mut count = 0;
        for entry in &entries {
            csv_writer.write_record([
                entry.sign.as_char().to_string(),
                format_cents(entry.amount_cents),
                entry.comment.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export a full snapshot (entries + balance) as pretty JSON.
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let entries = self.service.entries();
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            balance_cents: self.service.balance(),
            entries,
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot.entries.len())
    }
}
