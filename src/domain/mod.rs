mod entry;
mod ledger;
mod money;
mod tips;

pub use entry::*;
pub use ledger::*;
pub use money::*;
pub use tips::*;
