//! Case templates for recasing completion candidates.
//!
//! A query such as `"AsSem"` is summarized as a run-length sequence of case
//! classes (`Upper 1, Lower 1, Upper 1, Lower 2`). Applying that template to a
//! dictionary word recases its prefix to match what the user typed and leaves
//! the tail untouched, so `"assemblable"` becomes `"AsSemblable"`.
//!
//! Only the English alphabet takes part in classification; every other
//! character is neutral and passes through unchanged.

use ahash::AHashSet;

/// Case class of a single query character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseClass {
    /// `a`..=`z`
    Lower,
    /// `A`..=`Z`
    Upper,
    /// Digits, punctuation, non-English letters.
    Neutral,
}

impl CaseClass {
    /// Classify a single character by English-alphabet case.
    pub fn of(ch: char) -> Self {
        match ch {
            'a'..='z' => CaseClass::Lower,
            'A'..='Z' => CaseClass::Upper,
            _ => CaseClass::Neutral,
        }
    }

    /// Recase `ch` according to this class. Neutral leaves it alone.
    fn recase(self, ch: char) -> char {
        match self {
            CaseClass::Lower => ch.to_ascii_lowercase(),
            CaseClass::Upper => ch.to_ascii_uppercase(),
            CaseClass::Neutral => ch,
        }
    }
}

/// A maximal run of one case class. `len` counts characters and is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRun {
    pub class: CaseClass,
    pub len: usize,
}

impl CaseRun {
    pub fn new(class: CaseClass, len: usize) -> Self {
        Self { class, len }
    }
}

/// Run-length casing pattern derived from a query.
///
/// Adjacent runs always differ in class and the run lengths add up to the
/// query length. The empty query yields an empty template, which applies as
/// the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTemplate {
    runs: Vec<CaseRun>,
}

impl CaseTemplate {
    /// Classify every character of `query` and merge equal neighbours.
    pub fn classify(query: &str) -> Self {
        let mut runs: Vec<CaseRun> = Vec::new();
        for ch in query.chars() {
            let class = CaseClass::of(ch);
            match runs.last_mut() {
                Some(last) if last.class == class => last.len += 1,
                _ => runs.push(CaseRun::new(class, 1)),
            }
        }
        Self { runs }
    }

    /// Build a template from explicit runs.
    ///
    /// Zero-length runs are dropped and neighbours of the same class are
    /// merged, so the result upholds the same invariants as `classify`.
    pub fn from_runs<I: IntoIterator<Item = CaseRun>>(runs: I) -> Self {
        let mut merged: Vec<CaseRun> = Vec::new();
        for run in runs.into_iter().filter(|r| r.len > 0) {
            match merged.last_mut() {
                Some(last) if last.class == run.class => last.len += run.len,
                _ => merged.push(run),
            }
        }
        Self { runs: merged }
    }

    pub fn runs(&self) -> &[CaseRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total number of characters covered by the template.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.len).sum()
    }

    /// Recase the prefix of `word` covered by the template.
    ///
    /// A word shorter than the template is recased as far as it goes; the
    /// part of a longer word past the template is copied verbatim.
    pub fn apply(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        let mut chars = word.chars();
        for run in &self.runs {
            out.extend(chars.by_ref().take(run.len).map(|ch| run.class.recase(ch)));
        }
        out.extend(chars);
        out
    }
}

/// Remove duplicates, keeping the first occurrence of each value in order.
pub fn dedup_preserve_order<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = AHashSet::new();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Recase every word to the casing of `query` and drop the duplicates this
/// produces (`"az"` and `"AZ"` both become `"AZ"` for query `"AZ"`).
pub fn convert<I, S>(query: &str, words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let template = CaseTemplate::classify(query);
    dedup_preserve_order(words.into_iter().map(|w| template.apply(w.as_ref())))
}
