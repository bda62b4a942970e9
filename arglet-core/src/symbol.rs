//! Symbol definitions consumed by the parser configuration.
//!
//! A [`Symbol`] describes one configurable element of a command line: a
//! command, an option, or a positional argument. The core only needs two
//! things from a symbol: its insertion-ordered set of raw aliases (mutated
//! once, at configuration-build time, by the alias normalizer) and, for
//! commands, its child symbols. Everything else about symbol definition
//! belongs to the definition DSL layered on top of this crate.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Name given to the implicit root command synthesized when no command-kind
/// symbol was declared.
pub const ROOT_COMMAND_NAME: &str = "root";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Command,
    Option,
    Argument,
}

/// A declared command, option, or argument.
///
/// Raw aliases are kept in insertion order so that downstream output (help
/// rendering, diagnostics) is stable. Only commands carry children; the
/// nesting is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    kind: SymbolKind,
    raw_aliases: Vec<String>,
    #[serde(default)]
    children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, alias: impl Into<String>) -> Self {
        Self {
            kind,
            raw_aliases: vec![alias.into()],
            children: Vec::new(),
        }
    }

    pub fn command(name: impl Into<String>) -> Self {
        Self::new(SymbolKind::Command, name)
    }

    pub fn option(name: impl Into<String>) -> Self {
        Self::new(SymbolKind::Option, name)
    }

    pub fn argument(name: impl Into<String>) -> Self {
        Self::new(SymbolKind::Argument, name)
    }

    /// Synthesizes the implicit root command wrapping `children`.
    ///
    /// Kept separate from alias normalization so that the root-or-not decision
    /// stays isolated in one place.
    pub fn root(children: Vec<Symbol>) -> Self {
        Symbol::command(ROOT_COMMAND_NAME).with_children(children)
    }

    /// Attaches child symbols. Meaningful for commands only.
    pub fn with_children(mut self, children: Vec<Symbol>) -> Self {
        self.children = children;
        self
    }

    /// Appends an alias. Existing aliases are never removed or rewritten, and
    /// no de-duplication is performed.
    pub fn add_alias(&mut self, alias: impl Into<String>) {
        self.raw_aliases.push(alias.into());
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.add_alias(alias);
        self
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn is_command(&self) -> bool {
        self.kind == SymbolKind::Command
    }

    pub fn raw_aliases(&self) -> &[String] {
        &self.raw_aliases
    }

    pub fn children(&self) -> &[Symbol] {
        &self.children
    }
}
