//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod check;
mod list;
mod output;

pub use check::CheckReport;
pub use list::{ListReport, TypeSummary};
pub use output::{Report, TerminalOutput};
