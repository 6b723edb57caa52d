//! Terminal adapters for the command-line tools.

mod interviewer;

pub use interviewer::{read_description, ConsoleInterviewer};
