//! "certs-cli" utility

//! Reads the OpenShift certificate expiry report (JSON), produced by the
//! `certificate_expiry` playbook, and reports certificates about to expire.

#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    unstable_features,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true,
    unused_extern_crates
)]

// For development:
// #![allow(dead_code, unused_imports, unused_variables, deprecated)]


/// Use MiMalloc as default allocator:
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;


pub use crate::api::*;
pub use crate::checks::{expiry::*, staleness::*};
pub use crate::config::*;
pub use crate::configuration::*;
pub use crate::inputs::file::*;
pub use crate::products::{notice::*, unexpected::*};
pub use crate::report::*;
pub use crate::reporter::*;
pub use tracing::{debug, error, info, instrument, trace, warn};


//
// Public modules:
//

/// Configuration defaults:
pub mod configuration;

/// Runtime config (command line):
pub mod config;

/// Report model (decoded JSON):
pub mod report;

/// Report inputs:
pub mod inputs;

/// Checks:
pub mod checks;

/// Check products:
pub mod products;

/// Notice sinks:
pub mod reporter;

/// Public API functions:
pub mod api;

/// Logger setup:
pub mod logger;

/// Syslog writer:
#[cfg(unix)]
pub mod syslog;

//
// Private modules:
//
