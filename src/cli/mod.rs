//! Command-line interface

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::Cli;
pub use commands::Commands;
pub use handlers::handle_casts_command;
pub use handlers::handle_threads_command;
