// ABOUTME: Command implementations for the exporter CLI
// ABOUTME: Exports the export and check commands

pub mod check;
pub mod export;

pub use check::check;
pub use export::export;
