pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod kattis;
pub mod lang;
pub mod namer;
pub mod problem;
pub mod server;
pub mod storage;
pub mod submission;

pub use error::{CompanionError, Result};
pub use server::Companion;
