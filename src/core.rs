//! Converter core
//!
//! - `features`: the unit converter (catalog, engine, formatting, parsing)
//! - `history`: bounded conversion log
//! - `session`: caller-owned converter state
//! - `state`: mutex-guarded session shared by the command layer

pub mod features;
pub mod history;
pub mod session;
pub mod state;

pub use history::{ConversionHistory, ConversionRecord, MAX_HISTORY_SIZE};
pub use session::ConverterSession;
pub use state::AppState;
