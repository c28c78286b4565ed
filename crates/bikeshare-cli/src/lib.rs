//! Interactive bike-share explorer.
//!
//! The session reads one answer per line from any [`BufRead`](std::io::BufRead)
//! and writes prompts to any [`Write`](std::io::Write), so whole sessions can
//! be scripted in tests.

pub mod console;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod logging;
pub mod report;
pub mod session;

pub use console::{Console, QUIT_KEYWORDS, TYPO_NOTICE, is_quit_keyword};
pub use error::{Result, SessionError};
pub use session::{SessionConfig, run_round, run_session};
