//! Keeps a run from writing over its own WWN lists, or from sending the
//! configuration and the plan to the same file.

use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse any output that resolves to an input list or to an earlier output.
///
/// `outputs` pairs each path with the name used in messages (`output`, `plan`).
/// Paths are compared after resolution, so `out/../zones.cfg` and
/// `./zones.cfg` count as the same file whether or not it exists yet.
pub fn ensure_outputs_distinct(outputs: &[(&str, &Path)], inputs: &[&Path]) -> Result<()> {
    let mut resolved_inputs = Vec::with_capacity(inputs.len());
    for &input in inputs {
        resolved_inputs.push((input, resolve(input)?));
    }

    let mut claimed: Vec<(&str, &Path, PathBuf)> = Vec::with_capacity(outputs.len());
    for &(label, path) in outputs {
        let target = resolve(path)?;
        if let Some((input, _)) = resolved_inputs
            .iter()
            .find(|(_, resolved)| *resolved == target)
        {
            bail!(
                "refusing to overwrite WWN list: {label} {} matches input {}",
                path.display(),
                input.display()
            );
        }
        if let Some((other, other_path, _)) =
            claimed.iter().find(|(_, _, resolved)| *resolved == target)
        {
            bail!(
                "refusing to write {label} {} over {other} {}: both name the same file",
                path.display(),
                other_path.display()
            );
        }
        claimed.push((label, path, target));
    }
    Ok(())
}

/// Absolute, `..`-free form of `path`.
///
/// The deepest existing ancestor is canonicalized; components below it are
/// appended as written.
fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to read current directory")?
            .join(path)
    };
    let lexical = normalize_lexically(&absolute);

    let mut existing = lexical.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => return Ok(lexical),
        }
    }

    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", existing.display()))?;
    resolved.extend(missing.into_iter().rev());
    Ok(resolved)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
