//! Library side of the `decksmith` command-line tool.

#![allow(missing_docs)]
#![allow(clippy::needless_pass_by_value)]

pub mod editing;
pub mod generate;
pub mod logging;
