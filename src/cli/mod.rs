//! Command-line interface layer.

pub mod args;
pub mod run;

pub use args::{Arguments, Command};
pub use run::run;
