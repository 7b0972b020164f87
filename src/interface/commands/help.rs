//! # Help Command
//!
//! Handles the `/help` command.

use crate::domain::types::Catalog;

pub fn handle_help(catalog: &Catalog) -> String {
    crate::strings::help::overview(catalog.names())
}
