//! End-to-end front-end flow: split a command line, build a configuration,
//! and check that the emitted tokens line up with normalized aliases.

use arglet_core::config::{ParserConfig, ParserSettings};
use arglet_core::symbol::Symbol;
use arglet_core::tokenizer::splitter::Splitter;
use pretty_assertions::assert_eq;

#[test]
fn tokens_match_normalized_aliases() {
    let config = ParserConfig::with_defaults(vec![
        Symbol::option("verbose").with_alias("v"),
        Symbol::argument("path"),
    ])
    .unwrap();

    let tokens: Vec<String> = Splitter::new()
        .split(r#"--verbose "C:\Program Files\app""#)
        .collect();
    assert_eq!(tokens, ["--verbose", r"C:\Program Files\app"]);

    // the option token produced by the splitter is directly matchable
    // against the normalized alias set
    let root = &config.symbols()[0];
    let option = &root.children()[0];
    assert!(option.raw_aliases().contains(&tokens[0]));
}

#[test]
fn explicit_commands_flow_through_unchanged() {
    let settings = ParserSettings::from_str(r#"{"prefix_policy": "require_any"}"#).unwrap();
    let config = ParserConfig::new(
        vec![
            Symbol::command("move").with_children(vec![
                Symbol::option("--from"),
                Symbol::option("--to"),
            ]),
            Symbol::option("--verbose"),
        ],
        settings,
    )
    .unwrap();

    assert!(!config.root_is_implicit());

    let tokens: Vec<String> = Splitter::new()
        .split(r#"move --from "a b" --to "c d" --verbose"#)
        .collect();
    assert_eq!(tokens, ["move", "--from", "a b", "--to", "c d", "--verbose"]);

    // under require_any the already-prefixed aliases stay untouched, while
    // the bare command name is still expanded
    assert_eq!(
        config.symbols()[0].raw_aliases(),
        ["move", "-move", "--move", "/move"]
    );
    assert_eq!(config.symbols()[1].raw_aliases(), ["--verbose"]);
    assert!(config.symbols()[1].raw_aliases().contains(&tokens[5]));
}
