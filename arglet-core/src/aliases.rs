//! Prefix expansion over declared symbol aliases.
//!
//! Before any matching happens, every declared symbol gets prefixed variants
//! of its raw aliases appended (`verbose` → `-verbose`, `--verbose`,
//! `/verbose`), so that the matching engine only ever compares tokens against
//! a closed alias set. The pass runs exactly once, at configuration-build
//! time, and never removes or rewrites an existing alias.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::symbol::Symbol;

/// Decides when a raw alias already carries an acceptable prefix and
/// therefore needs no expansion.
///
/// `RequireAll` reproduces the historically observed predicate: an alias is
/// acceptable only if it starts with *every* configured prefix, which for
/// multi-character prefixes is almost never true, so expansion over-triggers.
/// `RequireAny` is the corrected reading. The choice is a configuration-level
/// decision; the default favors behavioral compatibility.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    #[default]
    RequireAll,
    RequireAny,
}

impl PrefixPolicy {
    fn is_acceptable(&self, alias: &str, prefixes: &[String]) -> bool {
        match self {
            PrefixPolicy::RequireAll => prefixes.iter().all(|p| alias.starts_with(p.as_str())),
            PrefixPolicy::RequireAny => prefixes.iter().any(|p| alias.starts_with(p.as_str())),
        }
    }
}

/// Appends prefixed alias variants to every symbol whose raw alias fails the
/// prefix predicate.
///
/// Each raw alias is inspected exactly once: the alias set is snapshotted
/// before mutation so that freshly appended variants are not themselves
/// expanded. New aliases are appended in prefix-declaration order, after all
/// pre-existing aliases.
#[tracing::instrument(level = "debug", skip(symbols))]
pub fn normalize_aliases(symbols: &mut [Symbol], prefixes: &[String], policy: PrefixPolicy) {
    for symbol in symbols.iter_mut() {
        let snapshot = symbol.raw_aliases().to_vec();
        for alias in &snapshot {
            if !policy.is_acceptable(alias, prefixes) {
                for prefix in prefixes {
                    symbol.add_alias(format!("{prefix}{alias}"));
                }
            }
        }
    }
}
