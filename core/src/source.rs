//! The completion source: query in, cased `{word}` records out.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::build_lookup_args;
use crate::case::convert;
use crate::config::{SourceOptions, SourceParams};
use crate::lookup::{parse_output, LookCommand, Lookup};

/// A completion record handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub word: String,
}

impl Item {
    pub fn new<T: Into<String>>(word: T) -> Self {
        Item { word: word.into() }
    }
}

/// Completion source backed by a `Lookup`.
///
/// The source keeps no per-request state; one instance can serve any
/// number of requests, concurrently if the lookup allows it.
#[derive(Debug, Clone, Default)]
pub struct LookSource<L = LookCommand> {
    lookup: L,
}

impl LookSource<LookCommand> {
    pub fn new() -> Self {
        Self::with_lookup(LookCommand::new())
    }
}

impl<L: Lookup> LookSource<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Gather candidates for `complete_str`.
    ///
    /// Returns an empty list without running the lookup when the query is
    /// too short for a case-folded search. Words are recased and
    /// deduplicated only when `convert_case` is set.
    pub fn gather(
        &self,
        complete_str: &str,
        params: &SourceParams,
        options: &SourceOptions,
    ) -> Result<Vec<Item>> {
        let Some(args) = build_lookup_args(complete_str, params, options.min_keyword_length)
        else {
            debug!(
                query = complete_str,
                min_keyword_length = options.min_keyword_length,
                "query too short, skipping lookup"
            );
            return Ok(Vec::new());
        };

        let stdout = self.lookup.lookup(&args)?;
        let words = parse_output(&stdout);
        let words = if params.convert_case {
            convert(complete_str, &words)
        } else {
            words
        };
        debug!(query = complete_str, count = words.len(), "gathered candidates");

        Ok(words.into_iter().map(Item::new).collect())
    }
}
