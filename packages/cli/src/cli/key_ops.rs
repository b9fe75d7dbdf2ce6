//! Key operations for CLI commands

use keygate_common::LoggingTransformer;
use keygate_key::{KeyGenerator, KeyRecord, KeyStore, ValidationOutcome};
use serde_json::json;
use std::io::Write;

pub fn handle_create<G: KeyGenerator>(
    store: &KeyStore<G>,
    count: usize,
    use_json: bool,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let keys = store
        .create(count)
        .inspect_err(|e| LoggingTransformer::log_command_failure("create", e))?;

    if use_json {
        writeln!(out, "{}", json!({ "keys": keys }))?;
    } else {
        write_created(out, &keys)?;
    }
    Ok(())
}

pub fn handle_list<G: KeyGenerator>(
    store: &KeyStore<G>,
    use_json: bool,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = store
        .list()
        .inspect_err(|e| LoggingTransformer::log_command_failure("list", e))?;

    if use_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        write_record(out, &record)?;
    }
    Ok(())
}

/// Redeem `key`, rejecting blank input before the store is touched
pub fn handle_validate<G: KeyGenerator>(
    store: &KeyStore<G>,
    key: &str,
    use_json: bool,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if key.trim().is_empty() {
        return Err("access key must not be empty".into());
    }

    // The store logs the outcome against the key hash
    let outcome = store
        .validate(key)
        .inspect_err(|e| LoggingTransformer::log_command_failure("validate", e))?;

    if use_json {
        writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
    } else {
        write_outcome(out, &outcome)?;
    }
    Ok(())
}

fn write_created(out: &mut dyn Write, keys: &[String]) -> std::io::Result<()> {
    writeln!(out, "Created keys:")?;
    for key in keys {
        writeln!(out, "  {key}")?;
    }
    Ok(())
}

fn write_record(out: &mut dyn Write, record: &KeyRecord) -> std::io::Result<()> {
    writeln!(out, "Active keys ({}):", record.active_count())?;
    for key in &record.active {
        writeln!(out, "  {key}")?;
    }
    writeln!(out)?;
    writeln!(out, "Used keys ({}):", record.used_count())?;
    for key in &record.used {
        writeln!(out, "  {key}")?;
    }
    Ok(())
}

fn write_outcome(out: &mut dyn Write, outcome: &ValidationOutcome) -> std::io::Result<()> {
    writeln!(out, "{}", outcome.message)
}
