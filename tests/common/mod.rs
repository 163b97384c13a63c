// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use tally::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary ledger file
pub fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("finance_data.txt");
    let service = LedgerService::open(path)?;
    Ok((service, temp_dir))
}

/// Helper to reopen a service at the same path, simulating a restart
pub fn reopen(temp_dir: &TempDir) -> Result<LedgerService> {
    let path = temp_dir.path().join("finance_data.txt");
    Ok(LedgerService::open(path)?)
}

/// Test fixture: a small ledger with one income and one expense entry
pub fn seed_basic(service: &mut LedgerService) -> Result<()> {
    service.add_credit("100.00", "salary")?;
    service.add_debit("40.00", "rent")?;
    Ok(())
}
