pub mod bot;
pub mod config;
pub mod error;
pub mod gemini;
pub mod router;
pub mod types;

pub use bot::run;
