use crate::domain::{parse_cents, random_tip, Cents, Entry, Ledger, Sign};
use crate::storage::FileStore;

use super::AppError;

/// Application service providing high-level operations over the ledger.
/// This is the primary interface for any client (CLI, GUI, test harness);
/// the client owns no ledger data itself.
///
/// Mutating operations touch memory only, except `clear`, which persists
/// the empty state immediately. Callers decide when to `save` (the CLI
/// does so before exiting; a long-lived GUI would do it on close).
pub struct LedgerService {
    store: FileStore,
    ledger: Ledger,
}

/// Result of a balance query: the net total plus a finance tip.
pub struct BalanceReport {
    pub balance: Cents,
    pub tip: &'static str,
}

impl LedgerService {
    /// Open the ledger backed by the given file path, loading any existing
    /// entries. A missing file starts an empty ledger.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self, AppError> {
        let store = FileStore::new(path);
        let ledger = Ledger::from_lines(store.load()?);
        Ok(Self { store, ledger })
    }

    /// Record an income entry. The amount string is validated here; invalid
    /// input never reaches stored form.
    pub fn add_credit(&mut self, amount: &str, comment: &str) -> Result<Entry, AppError> {
        self.add_entry(Sign::Credit, amount, comment)
    }

    /// Record an expense entry.
    pub fn add_debit(&mut self, amount: &str, comment: &str) -> Result<Entry, AppError> {
        self.add_entry(Sign::Debit, amount, comment)
    }

    fn add_entry(&mut self, sign: Sign, amount: &str, comment: &str) -> Result<Entry, AppError> {
        let amount_cents = parse_cents(amount)
            .map_err(|err| AppError::InvalidAmount(format!("'{}': {}", amount, err)))?;

        let entry = Entry::new(sign, amount_cents, comment);
        self.ledger.append(entry.clone());
        Ok(entry)
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    /// Balance plus a motivational finance tip.
    pub fn balance_report(&self) -> BalanceReport {
        BalanceReport {
            balance: self.ledger.balance(),
            tip: random_tip(),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.ledger.history()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.ledger.entries()
    }

    pub fn entry_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Empty the ledger and immediately persist the empty state.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.ledger.clear();
        self.store.save(self.ledger.lines())?;
        Ok(())
    }

    /// Persist the full sequence, overwriting prior state. This is the
    /// explicit save point on exit.
    pub fn save(&self) -> Result<(), AppError> {
        self.store.save(self.ledger.lines())?;
        Ok(())
    }
}
