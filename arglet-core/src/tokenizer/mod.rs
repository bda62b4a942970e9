//! # Tokenizer Component
//!
//! The Tokenizer component performs lexical analysis of a raw command-line
//! string, transforming it into an ordered stream of shell-style word tokens
//! for the downstream matching engine.
//!
//! ## Design Principles
//!
//! * **Totality**: every input string produces a token sequence. Malformed or
//!   unbalanced quoting degrades gracefully instead of raising an error.
//! * **Two-axis state machine**: word boundaries and quote boundaries are
//!   tracked independently, which keeps the many interacting edge cases
//!   (quoted whitespace, escaped quotes, dangling quotes, JSON-like payloads)
//!   individually reviewable and testable.
//! * **Per-call state**: each [`splitter::Splitter::split`] call returns an
//!   iterator owning its own cursor, so concurrent calls on distinct inputs
//!   never share state.
//!
//! ## Quoting Rules
//!
//! * Unicode whitespace separates tokens, except inside a double-quoted
//!   region, where it is preserved verbatim.
//! * `\"` denotes a literal double quote; it never opens, closes, or toggles
//!   a quoted region, and collapses to `"` in the emitted token.
//! * Any other `"` delimits a quoted region and never appears in a token.
//!
//! ## Integration Points
//!
//! The output token sequence is consumed by the token-to-symbol matching
//! engine; this crate attaches no position information to tokens, only their
//! input order.

pub mod splitter;

pub use splitter::Splitter;
