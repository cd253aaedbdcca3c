use std::fmt::Write as _;
use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use regform_validate::ValidationResult;
use serde::Serialize;

/// JSON document written for one `regform validate` run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub run_id: String,
    pub validated_at: DateTime<Utc>,
    pub current_year: i32,
    pub valid: bool,
    pub steps: &'a [ValidationResult],
}

impl<'a> RunReport<'a> {
    pub fn new(run_id: String, current_year: i32, steps: &'a [ValidationResult]) -> Self {
        Self {
            run_id,
            validated_at: Utc::now(),
            current_year,
            valid: steps.iter().all(ValidationResult::is_ok),
            steps,
        }
    }
}

/// Human-readable rendering: one line per step, then the displayed message of
/// each failing field.
pub fn render_text(steps: &[ValidationResult]) -> String {
    let mut out = String::new();
    for result in steps {
        if result.is_ok() {
            let _ = writeln!(out, "{}: ok", result.step);
            continue;
        }

        let failing = result.failing_fields().count();
        let _ = writeln!(out, "{}: {failing} invalid field(s)", result.step);
        for outcome in &result.fields {
            if let Some(error) = outcome.first_error() {
                let _ = writeln!(
                    out,
                    "  {} [{}]: {}",
                    outcome.field, error.kind, error.message
                );
            }
        }
    }
    out
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    write_bytes_atomic(path, &data)
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    Ok(())
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for report output")
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
