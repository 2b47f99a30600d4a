//! Command-line arguments for look(1).
//!
//! look searches the default dictionary case-folded (its `-d` and `-f` are
//! implied there), so a query made only of punctuation would match almost
//! anything. Case-folded lookups are therefore skipped until the query has
//! enough alphanumeric characters.

use crate::config::SourceParams;

/// Separator placed before the query so a leading `-` is never read as a flag.
pub const END_OF_OPTIONS: &str = "--";

/// Number of ASCII alphanumeric characters in `query`.
pub fn alphanumeric_len(query: &str) -> usize {
    query.chars().filter(char::is_ascii_alphanumeric).count()
}

/// Arguments to run look with, or `None` when the lookup should be skipped.
///
/// `None` means the query is too short for a case-folded search and the
/// caller should produce no candidates without spawning look. It is distinct
/// from a lookup that ran and matched nothing.
///
/// The dictionary path is passed as text; bytes of a non-UTF-8 path are
/// replaced with U+FFFD, so such a dictionary will not be found by look.
pub fn build_lookup_args(
    query: &str,
    params: &SourceParams,
    min_keyword_length: usize,
) -> Option<Vec<String>> {
    if params.case_fold() && alphanumeric_len(query) < min_keyword_length {
        return None;
    }

    let args = match &params.dict {
        Some(dict) => {
            let mut args = Vec::with_capacity(5);
            if params.dflag {
                args.push("-d".to_string());
            }
            if params.fflag {
                args.push("-f".to_string());
            }
            args.push(END_OF_OPTIONS.to_string());
            args.push(query.to_string());
            args.push(dict.to_string_lossy().into_owned());
            args
        }
        None => vec![END_OF_OPTIONS.to_string(), query.to_string()],
    };
    Some(args)
}
