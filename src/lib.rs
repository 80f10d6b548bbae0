//! textree: composite text tree with embedded expression evaluation.
//!
//! Raw text is read, arithmetic/bitwise expressions inside it are replaced
//! by their values, and the result is parsed into a
//! document → paragraph → sentence → lexeme → word/sign/letter tree that
//! the analytics walk.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
