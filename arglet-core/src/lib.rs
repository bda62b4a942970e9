//! # arglet: command-line parsing front end
//!
//! arglet provides the front end of a command-line argument parsing framework:
//! it turns a raw command-line string into discrete tokens and normalizes the
//! declared names (aliases) of commands, options, and arguments so that later
//! matching against those tokens is well-defined.
//!
//! ## Processing Pipeline
//!
//! arglet covers the first two stages of the pipeline; matching, binding, and
//! help rendering are downstream consumers:
//!
//! ```text
//! Command Line → Splitter → [Matcher → Binder → Invocation]
//! Symbol Definitions → ParserConfig (root synthesis + alias normalization) ↗
//! ```
//!
//! ### Stage 1: Splitting (Lexical Analysis)
//!
//! The [`tokenizer`] module splits a single input string into shell-style
//! words while honoring double-quoting and backslash-escaped quotes. It is
//! total over all inputs: malformed quoting degrades gracefully instead of
//! raising an error.
//!
//! ### Stage 2: Configuration (Alias Normalization)
//!
//! The [`config`] module aggregates declared [`symbol::Symbol`]s, the accepted
//! option prefixes, and argument-value delimiters. At construction it
//! synthesizes an implicit root command when no command was declared and runs
//! the [`aliases`] normalizer exactly once over the declared symbols.
//!
//! ## Error Handling
//!
//! Construction of a [`config::ParserConfig`] is the only fallible core
//! operation; it reports programmer errors (bad setup) through
//! [`error::Error::InvalidConfiguration`], distinct from the runtime parse
//! failures that belong to the downstream matching engine.
//!
//! ## Usage Example
//!
//! ```rust
//! use arglet_core::config::ParserConfig;
//! use arglet_core::symbol::Symbol;
//! use arglet_core::tokenizer::splitter::Splitter;
//!
//! let tokens: Vec<String> = Splitter::new()
//!     .split(r#"move --from "a b" --to "c d""#)
//!     .collect();
//! assert_eq!(tokens, ["move", "--from", "a b", "--to", "c d"]);
//!
//! let config = ParserConfig::with_defaults(vec![
//!     Symbol::option("verbose"),
//! ]).unwrap();
//! assert!(config.root_is_implicit());
//! ```

pub mod aliases;
pub mod config;
pub mod error;
pub mod symbol;
pub mod tokenizer;

// Re-exports
pub use aliases::*;
pub use config::*;
pub use error::*;
pub use symbol::*;

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
