pub mod error;
mod service;

pub use error::*;
pub use service::*;
