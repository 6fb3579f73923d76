use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::builder::ZonePlan;
use crate::model::{Zone, ZoneSet};

/// Errors that can occur while writing configuration output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create, write, or move the output file into place.
    #[error("failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render zones and their zoneset as switch configuration lines.
pub fn render(zoneset: &ZoneSet, zones: &[Zone], vsan: &str) -> Vec<String> {
    let member_lines: usize = zones.iter().map(|zone| zone.members.len() + 2).sum();
    let mut lines = Vec::with_capacity(member_lines + zoneset.zones.len() + 1);

    for zone in zones {
        lines.push(format!("zone name {} vsan {vsan}", zone.name));
        for wwn in &zone.members {
            lines.push(format!("    member pwwn {wwn}"));
        }
        lines.push("exit".to_string());
    }

    lines.push(format!("zoneset name {} vsan {vsan}", zoneset.name));
    for name in &zoneset.zones {
        lines.push(format!("    member {name}"));
    }

    lines
}

/// Render a whole [`ZonePlan`] using its zoneset VSAN.
pub fn render_plan(plan: &ZonePlan) -> Vec<String> {
    render(&plan.zoneset, &plan.zones, &plan.zoneset.vsan)
}

/// Join rendered lines into newline-terminated text.
pub fn write(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Contents written to a temporary file beside `path`, not yet visible there.
///
/// Dropping a `StagedFile` without calling [`StagedFile::commit`] removes the
/// temporary file and leaves `path` untouched.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    path: PathBuf,
}

impl StagedFile {
    /// Final location the contents will be moved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the staged contents over the final path.
    pub fn commit(self) -> Result<(), WriteError> {
        let StagedFile { tmp, path } = self;
        tmp.persist(&path).map_err(|err| err.error)?;
        info!(path = %path.display(), "committed staged file");
        Ok(())
    }
}

/// Write `contents` to a temporary file in the directory of `path`.
///
/// Fails if the directory does not exist or is not writable. Nothing appears
/// at `path` until the returned file is committed.
pub fn stage_file(contents: &str, path: &Path) -> Result<StagedFile, WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    Ok(StagedFile {
        tmp,
        path: path.to_path_buf(),
    })
}

/// Write rendered lines to `path`.
///
/// The text is staged beside `path` and renamed over it only once fully
/// written, so a failure never leaves a truncated configuration behind.
pub fn write_file(lines: &[String], path: &Path) -> Result<(), WriteError> {
    stage_file(&write(lines), path)?.commit()
}
