//! "certs-cli" command

//! Reports certificates close to expiry, found in OpenShift cert-expiry-report.json

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


use certs_cli::{logger::setup_logger, run, Config, TracingReporter};
use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;


fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(err) = setup_logger(&config) {
        eprintln!("Couldn't initialize logger. Details: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&config, Local::now().naive_local(), &mut TracingReporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
