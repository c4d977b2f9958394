//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::Settings;
use crate::error::AppError;
use crate::hashers::PROVIDERS;
use crate::output::Record;
use crate::script::Interpreter;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum script file size (16 MB).
///
/// This prevents memory exhaustion from accidental large files.
const MAX_SCRIPT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Validate a script path and its size before reading.
///
/// Canonicalizes the path (resolving symlinks and "..") and requires a
/// regular file no larger than `MAX_SCRIPT_FILE_SIZE`.
fn validate_script_path(path: &Path) -> Result<PathBuf, AppError> {
    let canonical = path.canonicalize().map_err(|e| AppError::Path {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !canonical.is_file() {
        return Err(AppError::Path {
            path: path.to_path_buf(),
            message: "not a regular file".to_string(),
        });
    }

    let size = std::fs::metadata(&canonical)?.len();
    if size > MAX_SCRIPT_FILE_SIZE {
        return Err(AppError::Path {
            path: path.to_path_buf(),
            message: format!(
                "file size {} bytes exceeds maximum allowed {} bytes",
                size, MAX_SCRIPT_FILE_SIZE
            ),
        });
    }

    Ok(canonical)
}

fn emit(out: &mut impl Write, record: &Record, json: bool) -> Result<(), AppError> {
    writeln!(out, "{}", record.render(json)?)?;
    Ok(())
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Execute a script file and print one result per command.
pub fn cmd_run(file: &Path, settings: &Settings) -> Result<(), AppError> {
    let path = validate_script_path(file)?;
    let source = std::fs::read_to_string(&path)?;

    tracing::info!(script = %path.display(), "running script");

    let mut interp = Interpreter::new(settings.default_hash.as_str())?;
    let records = interp.run_script(&source)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        emit(&mut out, record, settings.json)?;
    }

    let stats = interp.registry().stats();
    tracing::info!(
        commands = records.len(),
        sets = stats.sets,
        sequences = stats.sequences,
        "script finished"
    );
    Ok(())
}

// =============================================================================
// REPL COMMAND
// =============================================================================

/// Read commands from stdin until EOF.
pub fn cmd_repl(settings: &Settings) -> Result<(), AppError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl_loop(stdin.lock(), &mut stdout.lock(), settings)
}

/// Drive an interpreter from `input`, writing results to `out`.
///
/// Parse errors and unknown hash names are reported on `out` and the loop
/// continues. Only I/O failures end it early.
pub fn repl_loop(
    input: impl BufRead,
    out: &mut impl Write,
    settings: &Settings,
) -> Result<(), AppError> {
    let mut interp = Interpreter::new(settings.default_hash.as_str())?;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match interp.execute_line(index + 1, &line) {
            Ok(Some(record)) => emit(out, &record, settings.json)?,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("{}", e);
                if settings.json {
                    let error = serde_json::json!({ "line": index + 1, "error": e.to_string() });
                    writeln!(out, "{}", error)?;
                } else {
                    writeln!(out, "error: {}", e)?;
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}

// =============================================================================
// HASHES COMMAND
// =============================================================================

#[derive(Serialize)]
struct ProviderJson<'a> {
    name: &'a str,
    description: &'a str,
    present: bool,
}

/// List the built-in hash function providers.
pub fn cmd_hashes(json: bool) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    write_hashes(&mut stdout.lock(), json)
}

fn write_hashes(out: &mut impl Write, json: bool) -> Result<(), AppError> {
    if json {
        let list: Vec<ProviderJson<'_>> = PROVIDERS
            .iter()
            .map(|p| ProviderJson {
                name: p.name,
                description: p.description,
                present: p.function.is_some(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
    } else {
        for p in PROVIDERS {
            writeln!(out, "  {:<10} {}", p.name, p.description)?;
        }
    }
    Ok(())
}
