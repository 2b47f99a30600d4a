// core/tests/look_source.rs
//
// Integration tests for LookSource::gather against an in-memory lookup.
//
// Tests cover:
// - Arguments handed to the lookup for default and custom dictionaries
// - Skipping the lookup when the query is too short
// - Case conversion and deduplication of returned words
// - Error propagation from the lookup

use look_complete_core::{Item, LookSource, Lookup, SourceOptions, SourceParams};
use std::cell::RefCell;
use std::path::PathBuf;

// Mock lookup: case-insensitive prefix search over a sorted word list
#[derive(Debug, Default)]
struct MockLook {
    words: Vec<&'static str>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockLook {
    fn new(words: &[&'static str]) -> Self {
        let mut words = words.to_vec();
        words.sort_by_key(|w| w.to_ascii_lowercase());
        Self {
            words,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Lookup for MockLook {
    fn lookup(&self, args: &[String]) -> anyhow::Result<String> {
        self.calls.borrow_mut().push(args.to_vec());
        let sep = args
            .iter()
            .position(|a| a == "--")
            .ok_or_else(|| anyhow::anyhow!("missing -- separator"))?;
        let query = args[sep + 1].to_ascii_lowercase();
        let mut out = String::new();
        for w in &self.words {
            if w.to_ascii_lowercase().starts_with(&query) {
                out.push_str(w);
                out.push('\n');
            }
        }
        Ok(out)
    }
}

struct FailingLook;

impl Lookup for FailingLook {
    fn lookup(&self, _args: &[String]) -> anyhow::Result<String> {
        anyhow::bail!("look: not found")
    }
}

fn words(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.word.as_str()).collect()
}

fn dictionary() -> MockLook {
    MockLook::new(&[
        "az",
        "azadrachta",
        "azafrin",
        "AZ",
        "Azalea",
        "assemblable",
        "assemblage",
        "assemble",
        "assembler",
        "assembly",
        "assemblyman",
        "zebra",
    ])
}

#[test]
fn test_upper_query_recases_and_dedups() {
    let look = dictionary();
    let source = LookSource::with_lookup(&look);
    let items = source
        .gather("AZ", &SourceParams::default(), &SourceOptions::default())
        .unwrap();

    assert_eq!(words(&items), ["AZ", "AZadrachta", "AZafrin", "AZalea"]);
    assert_eq!(look.calls(), vec![vec!["--".to_string(), "AZ".to_string()]]);
}

#[test]
fn test_mixed_query_recases_prefix_only() {
    let source = LookSource::with_lookup(dictionary());
    let items = source
        .gather("AsSem", &SourceParams::default(), &SourceOptions::default())
        .unwrap();

    assert_eq!(
        words(&items),
        [
            "AsSemblable",
            "AsSemblage",
            "AsSemble",
            "AsSembler",
            "AsSembly",
            "AsSemblyman"
        ]
    );
}

#[test]
fn test_short_query_skips_lookup() {
    let look = dictionary();
    let source = LookSource::with_lookup(&look);
    let options = SourceOptions {
        min_keyword_length: 3,
    };

    let items = source.gather("a-z", &SourceParams::default(), &options).unwrap();
    assert!(items.is_empty());
    assert!(look.calls().is_empty(), "lookup must not run for short queries");
}

#[test]
fn test_custom_dictionary_arguments() {
    let look = dictionary();
    let source = LookSource::with_lookup(&look);
    let params = SourceParams {
        dict: Some(PathBuf::from("/tmp/d")),
        dflag: true,
        ..SourceParams::default()
    };
    let options = SourceOptions {
        min_keyword_length: 3,
    };

    source.gather("ab!c", &params, &options).unwrap();
    assert_eq!(
        look.calls(),
        vec![vec![
            "-d".to_string(),
            "--".to_string(),
            "ab!c".to_string(),
            "/tmp/d".to_string()
        ]]
    );
}

#[test]
fn test_custom_dictionary_without_fold_ignores_min_length() {
    let look = dictionary();
    let source = LookSource::with_lookup(&look);
    let params = SourceParams {
        dict: Some(PathBuf::from("/tmp/d")),
        ..SourceParams::default()
    };
    let options = SourceOptions {
        min_keyword_length: 10,
    };

    let items = source.gather("ze", &params, &options).unwrap();
    assert_eq!(words(&items), ["zebra"]);
    assert_eq!(look.calls().len(), 1);
}

#[test]
fn test_empty_query_returns_words_unchanged() {
    let source = LookSource::with_lookup(MockLook::new(&["Beta", "alpha"]));
    let items = source
        .gather("", &SourceParams::default(), &SourceOptions::default())
        .unwrap();
    assert_eq!(words(&items), ["alpha", "Beta"]);
}

#[test]
fn test_no_matches_is_not_an_error() {
    let source = LookSource::with_lookup(dictionary());
    let items = source
        .gather("qqq", &SourceParams::default(), &SourceOptions::default())
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_lookup_failure_propagates() {
    let source = LookSource::with_lookup(FailingLook);
    let err = source
        .gather("abc", &SourceParams::default(), &SourceOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}
