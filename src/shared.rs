pub mod types;
pub mod settings;
pub mod error;
pub mod logging;


pub use error::{AppError, AppResult, ConversionError, ConversionResult};
