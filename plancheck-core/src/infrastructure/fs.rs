use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DRAWING_EXTENSION: &str = "dwg";

/// Write content to a file atomically using a temporary file.
///
/// The temporary file lives in the target's directory so the final rename never
/// crosses filesystems; readers see either the old report or the complete new one.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// All drawing files under `folder`, sorted by path.
///
/// The extension match ignores case (`PLAN.DWG` counts). A missing folder yields no drawings.
pub fn discover_drawings(folder: &Path, recursive: bool) -> Vec<PathBuf> {
    if !folder.is_dir() {
        tracing::warn!(folder = ?folder, "Drawing folder does not exist");
        return Vec::new();
    }

    let mut walker = WalkDir::new(folder).follow_links(true);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut drawings: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(DRAWING_EXTENSION))
        })
        .collect();

    drawings.sort();
    drawings
}
