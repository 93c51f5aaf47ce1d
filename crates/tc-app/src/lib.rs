//! tc-app: input/output shell for the temperature converter.
//!
//! Owns everything between the terminal and `tc-core`: the menu, parsing of the
//! choice and value lines, result formatting, and the piped/interactive sessions.
//! The CLI binary is a thin dispatcher over this crate.

pub mod error;
pub mod format;
pub mod menu;
pub mod session;

pub use error::{AppError, AppResult};
pub use format::{format_reading, format_result, format_value};
pub use menu::{parse_choice, parse_value, render_menu};
pub use session::{Outcome, Reading, SessionOptions, evaluate, run_interactive, run_piped};
