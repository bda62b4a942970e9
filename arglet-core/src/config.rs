//! Parser configuration: the composition point for the matching engine.
//!
//! [`ParserSettings`] carries the tunable knobs (prefixes, argument
//! delimiters, unbundling, prefix policy) with serde defaults and JSON
//! loaders. [`ParserConfig`] validates the declared symbols, synthesizes an
//! implicit root command when none was declared, runs alias normalization
//! exactly once, and is immutable afterwards.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::aliases::{PrefixPolicy, normalize_aliases};
use crate::error::{Error, Result};
use crate::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Leading markers that distinguish option-like aliases from bare words.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    /// Characters accepted between an option alias and its inline value,
    /// as in `--level=3` or `/level:3`.
    #[serde(default = "default_argument_delimiters")]
    pub argument_delimiters: Vec<char>,

    /// Whether `-abc` may stand for `-a -b -c`.
    #[serde(default = "default_true")]
    pub allow_unbundling: bool,

    #[serde(default)]
    pub prefix_policy: PrefixPolicy,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            argument_delimiters: default_argument_delimiters(),
            allow_unbundling: default_true(),
            prefix_policy: PrefixPolicy::default(),
        }
    }
}

impl ParserSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        from_file(path)
    }

    pub fn from_str(s: &str) -> Result<Self> {
        from_str(s)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| Error::Internal(format!("Failed to open settings file: {}", e)))?;
    let reader = BufReader::new(file);
    let settings = serde_json::from_reader(reader)
        .map_err(|e| Error::Internal(format!("Failed to parse settings file: {}", e)))?;
    Ok(settings)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> Result<T> {
    let settings = serde_json::from_str(s)
        .map_err(|e| Error::Internal(format!("Failed to parse settings: {}", e)))?;
    Ok(settings)
}

// デフォルト値の定義
fn default_prefixes() -> Vec<String> {
    vec!["-".to_string(), "--".to_string(), "/".to_string()]
}
fn default_argument_delimiters() -> Vec<char> {
    vec![':', '=']
}
fn default_true() -> bool {
    true
}

/// Finalized configuration consumed by the matching engine and the help
/// renderer. Built once per parser; symbol aliases are mutated only here,
/// during construction.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    settings: ParserSettings,
    symbols: Vec<Symbol>,
    root_is_implicit: bool,
}

impl ParserConfig {
    /// Builds a configuration with default settings.
    pub fn with_defaults(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols, ParserSettings::default())
    }

    /// Builds a configuration from declared symbols and settings.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `symbols` is empty.
    /// When no declared symbol is a command, all of them are wrapped under a
    /// single implicit root command; there is never more than one.
    ///
    /// Normalization runs over the originally declared symbols only: the
    /// synthesized root keeps its own alias as-is, and children nested under
    /// explicitly declared commands belong to their declaring scope.
    #[tracing::instrument(level = "debug", skip(symbols, settings))]
    pub fn new(mut symbols: Vec<Symbol>, settings: ParserSettings) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one symbol must be defined".to_string(),
            ));
        }

        normalize_aliases(&mut symbols, &settings.prefixes, settings.prefix_policy);

        let root_is_implicit = !symbols.iter().any(Symbol::is_command);
        let symbols = if root_is_implicit {
            vec![Symbol::root(symbols)]
        } else {
            symbols
        };

        Ok(Self {
            settings,
            symbols,
            root_is_implicit,
        })
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn prefixes(&self) -> &[String] {
        &self.settings.prefixes
    }

    pub fn argument_delimiters(&self) -> &[char] {
        &self.settings.argument_delimiters
    }

    pub fn allow_unbundling(&self) -> bool {
        self.settings.allow_unbundling
    }

    pub fn prefix_policy(&self) -> PrefixPolicy {
        self.settings.prefix_policy
    }

    /// Top-level symbols: either the declared commands as given, or the single
    /// synthesized root.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn root_is_implicit(&self) -> bool {
        self.root_is_implicit
    }
}
