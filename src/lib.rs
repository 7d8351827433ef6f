pub mod changes;
pub mod cli;
pub mod config;
pub mod graph;
pub mod impact;
pub mod util;
