//! Multi-step channel workflows built on the gateway

pub mod parse;

pub use parse::{ParseOutcome, parse_channel};
