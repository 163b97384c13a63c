mod store;

pub use store::*;

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "finance_data.txt";
