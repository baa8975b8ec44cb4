pub mod kde;
pub mod loader;
pub mod plot;
pub mod stats;
