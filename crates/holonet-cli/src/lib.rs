//! Holonet CLI library.
//!
//! Terminal styling, logging setup, and output formatting shared by the
//! `holonet` binary's subcommands.

pub mod logging;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
