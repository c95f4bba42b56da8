//! Image discovery and loading for CLI path arguments.
//!
//! Folder arguments are expanded one level deep and sorted by file name;
//! plain file arguments are taken as-is so deliberate selections are kept
//! even when the extension is unusual (the intake validator still decides).

use crate::error::{CarAiError, Result};
use crate::selection::SelectedFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
];

/// MIME type for a file extension, case-insensitive.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let lower = ext.to_lowercase();
    IMAGE_MIME_TYPES
        .iter()
        .find(|(e, _)| *e == lower)
        .map(|(_, mime)| *mime)
}

fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .unwrap_or("application/octet-stream")
}

/// Expands a mix of file and folder arguments into image file paths.
pub fn collect_image_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(CarAiError::FileNotFound(input.display().to_string()));
        }

        if input.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(input)
                .max_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .and_then(mime_for_extension)
                        .is_some()
                {
                    found.push(path.to_path_buf());
                }
            }
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }

    Ok(paths)
}

/// Reads one file into an intake candidate.
pub fn load_candidate(path: &Path) -> Result<SelectedFile> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(SelectedFile {
        file_name,
        mime_type: mime_for_path(path).to_string(),
        bytes,
    })
}
