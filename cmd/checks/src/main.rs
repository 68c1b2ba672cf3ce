//! Error record walkthrough
//!
//! Threads one record through a few fallible calls, with the stderr
//! reporter on, then inspects and resets it.
//!
//! # Environment Variables
//!
//! - `DC_ERROR_REPORTING=0` - Start with reporting off
//! - `DC_ERROR_LOG_LEVEL=trace` - Trace every raise
// DC_ERROR_LOG_LEVEL=trace cargo run -p dc-error-checks

use dc_error::env::env_get_bool;
use dc_error::{check, config::REPORTING_VAR, raise_errno, raise_user};
use dc_error::{ErrorKind, ErrorRecord, RecordConfig};

fn parse_percent(err: &mut ErrorRecord, raw: &str) -> Option<u8> {
    let value: i32 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            raise_user!(err, "not a number", 1);
            return None;
        }
    };
    if !check::greater_than(err, value, -1) || !check::less_than(err, value, 101) {
        return None;
    }
    Some(value as u8)
}

fn read_config(err: &mut ErrorRecord, path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            raise_errno!(err, e.raw_os_error().unwrap_or(0));
            None
        }
    }
}

fn main() {
    println!("=== dc-error checks ===\n");

    let config = RecordConfig::new().reporting(env_get_bool(REPORTING_VAR, true));
    let mut err = ErrorRecord::from_config(&config);

    for raw in ["42", "250", "lots"] {
        match parse_percent(&mut err, raw) {
            Some(v) => println!("{:>6} -> {}%", raw, v),
            None => {
                println!("{:>6} -> {}", raw, err);
                err.reset();
            }
        }
    }

    if read_config(&mut err, "/nonexistent/dc-error.conf").is_none() {
        assert_eq!(err.kind(), ErrorKind::ErrnoDerived);
        println!("config -> {}", err);
        if err.matches_errno(libc::ENOENT) {
            println!("config -> missing, using defaults");
        }
        err.reset();
    }

    err.set_reporting(false);
    let missing: Option<&str> = None;
    if !check::not_null(&mut err, &missing) {
        println!("silent -> {}", err);
    }
    err.reset();

    assert!(err.is_ok());
    println!("\nfinal state: {}", err);
}

