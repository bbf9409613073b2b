pub mod cli;
pub mod config;
pub mod entry;
pub mod errors;
pub mod export;
pub mod secret;
pub mod store;
