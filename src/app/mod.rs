pub mod error;

pub use error::{AppcastError, Result};
