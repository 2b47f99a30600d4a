//! look-complete-core
//!
//! Case-aware word completion backed by look(1). The query's casing is
//! captured as a run-length template and reapplied to every word look
//! returns, so typing `AsSem` completes to `AsSemblable` rather than
//! `assemblable`.
//!
//! Public API:
//! - `CaseTemplate`, `convert`, `dedup_preserve_order` - casing of candidates
//! - `build_lookup_args` - look arguments, or `None` to skip the lookup
//! - `Lookup` / `LookCommand` - the external word-list search
//! - `LookSource` - one completion request end to end
//! - `SourceParams`, `SourceOptions`, `LookConfig` - configuration

pub mod case;
pub use case::{convert, dedup_preserve_order, CaseClass, CaseRun, CaseTemplate};

pub mod args;
pub use args::{alphanumeric_len, build_lookup_args};

pub mod config;
pub use config::{LookConfig, SourceOptions, SourceParams};

pub mod lookup;
pub use lookup::{parse_output, LookCommand, Lookup};

pub mod source;
pub use source::{Item, LookSource};
