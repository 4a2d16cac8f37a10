pub mod dataset;
pub mod error;
pub mod filters;
pub mod output;
pub mod stats;

pub use error::{Error, Result};
