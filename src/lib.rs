pub mod config;
pub mod logger;
pub mod remote;
pub mod sync;
mod content;
mod writer;
