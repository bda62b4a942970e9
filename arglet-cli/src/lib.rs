pub mod error;
pub mod output;
