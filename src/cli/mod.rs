use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::application::LedgerService;
use crate::domain::format_cents;
use crate::io::Exporter;
use crate::storage::DEFAULT_DATA_FILE;

/// Tally - flat-file income/expense notebook
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses in a flat text file")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an income entry
    Credit {
        /// Amount (e.g., "50.00" or "50")
        amount: String,

        /// Comment (defaults to a placeholder when omitted)
        comment: Option<String>,
    },

    /// Record an expense entry
    Debit {
        /// Amount (e.g., "50.00" or "50")
        amount: String,

        /// Comment (defaults to a placeholder when omitted)
        comment: Option<String>,
    },

    /// Show the current balance with a finance tip
    Balance,

    /// Show the entry history
    History,

    /// Delete all entries and persist the empty ledger
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export ledger data to CSV or JSON
    Export {
        /// What to export
        #[arg(value_enum)]
        export_type: ExportType,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportType {
    /// Entries as CSV rows
    Entries,
    /// Full snapshot (entries + balance) as JSON
    Snapshot,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = LedgerService::open(&self.file)?;

        match self.command {
            Commands::Credit { amount, comment } => {
                let entry = service.add_credit(&amount, comment.as_deref().unwrap_or(""))?;
                service.save()?;
                println!("Recorded: {}", entry.describe());
            }

            Commands::Debit { amount, comment } => {
                let entry = service.add_debit(&amount, comment.as_deref().unwrap_or(""))?;
                service.save()?;
                println!("Recorded: {}", entry.describe());
            }

            Commands::Balance => {
                let report = service.balance_report();
                println!("Current balance: {}", format_cents(report.balance));
                println!("Tip: {}", report.tip);
            }

            Commands::History => {
                let history = service.history();
                if history.is_empty() {
                    println!("History is empty.");
                } else {
                    for line in history {
                        println!("{}", line);
                    }
                }
            }

            Commands::Clear { yes } => {
                if !yes && !confirm("Delete all entries?")? {
                    println!("Aborted.");
                    return Ok(());
                }
                service.clear()?;
                println!("All entries deleted.");
            }

            Commands::Export {
                export_type,
                output,
            } => {
                run_export_command(&service, export_type, output)?;
            }
        }

        Ok(())
    }
}

fn run_export_command(
    service: &LedgerService,
    export_type: ExportType,
    output: Option<String>,
) -> Result<()> {
    let exporter = Exporter::new(service);

    let count = match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {}", path))?;
            let count = match export_type {
                ExportType::Entries => exporter.export_entries_csv(file)?,
                ExportType::Snapshot => exporter.export_snapshot_json(file)?,
            };
            eprintln!("Exported {} entries to {}", count, path);
            count
        }
        None => {
            let stdout = std::io::stdout();
            match export_type {
                ExportType::Entries => exporter.export_entries_csv(stdout.lock())?,
                ExportType::Snapshot => exporter.export_snapshot_json(stdout.lock())?,
            }
        }
    };

    tracing::debug!(count, "export finished");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
