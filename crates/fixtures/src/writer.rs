//! Writing fixture documents to disk
//!
//! Output is all-or-nothing per run. All four documents are rendered, then
//! each is staged in a synced temporary file inside the target directory,
//! then every target path is checked. Only when all of that succeeds are the
//! staged files renamed over the final names.

use crate::error::{FixtureError, Result};
use crate::record::{Category, FixtureSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Render every category of `set`
pub fn render_fixture_set(set: &FixtureSet) -> Result<Vec<(Category, String)>> {
    Category::ALL
        .iter()
        .map(|&category| -> Result<(Category, String)> { Ok((category, set.render(category)?)) })
        .collect()
}

/// Write `set` into `dir`, replacing existing fixture files
///
/// Creates `dir` if needed. Returns the paths written, in category order.
/// No existing file is replaced unless every document was staged and every
/// target can take a plain file.
pub fn write_fixture_set(dir: &Path, set: &FixtureSet) -> Result<Vec<PathBuf>> {
    let documents = render_fixture_set(set)?;

    fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;

    let staged = documents
        .iter()
        .map(|(category, document)| -> Result<(PathBuf, NamedTempFile)> {
            let path = dir.join(category.file_name());
            Ok((path, stage(dir, document.as_bytes())?))
        })
        .collect::<Result<Vec<_>>>()?;

    for (path, _) in &staged {
        check_target(path)?;
    }

    let mut written = Vec::with_capacity(staged.len());
    for (path, tmp) in staged {
        tmp.persist(&path)
            .map_err(|e| FixtureError::io(path.as_path(), e.error))?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }

    info!("Wrote {} fixture files to {}", written.len(), dir.display());
    Ok(written)
}

fn stage(dir: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FixtureError::io(dir, e))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| FixtureError::io(tmp.path(), e))?;

    // NamedTempFile creates files as 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o644))
            .map_err(|e| FixtureError::io(tmp.path(), e))?;
    }

    Ok(tmp)
}

/// A target must be absent or a regular file
fn check_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(FixtureError::io(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "target is not a regular file"),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FixtureError::io(path, e)),
    }
}
