//! Reference-photo selection for the contact form.
//!
//! A selection is accepted or rejected as a whole: one oversized or non-image
//! file clears the entire batch. Accepted files are listed in a preview with
//! their human-readable size.
//!
//! Removing a single file from a selection is not supported. The preview still
//! shows a remove button per row; pressing it only tells the visitor so.

use crate::config::UploadLimits;
use crate::notify::{Notifier, Severity};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REMOVAL_UNSUPPORTED: &str =
    "File removal feature needs to be implemented for production use.";

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// A user-selected file pending submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub size_bytes: u64,
    pub mime_type: String,
    /// Where the contents live on disk, when the selection came from a path.
    pub path: Option<PathBuf>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            size_bytes,
            mime_type: mime_type.into(),
            path: None,
        }
    }

    /// Describe a file on disk. The MIME type is derived from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let size_bytes = std::fs::metadata(path)?.len();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            mime_type: mime_for_path(path).to_string(),
            filename,
            size_bytes,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Guess a MIME type from a file extension, the way a browser labels a `File`.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Why a selection was rejected. The display text is what the visitor sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadViolation {
    #[error("Maximum {max} files allowed.")]
    TooManyFiles { max: usize },
    #[error("File \"{name}\" is too large. Maximum size is {limit}.")]
    TooLarge { name: String, limit: String },
    #[error("File \"{name}\" is not an image.")]
    NotAnImage { name: String },
}

/// Check a whole selection. Count first, then each file in order, size before type.
pub fn check_attachments(
    files: &[Attachment],
    limits: &UploadLimits,
) -> Result<(), UploadViolation> {
    if files.len() > limits.max_files {
        return Err(UploadViolation::TooManyFiles {
            max: limits.max_files,
        });
    }
    for file in files {
        if file.size_bytes > limits.max_file_size {
            return Err(UploadViolation::TooLarge {
                name: file.filename.clone(),
                limit: format_file_size(limits.max_file_size).replace(' ', ""),
            });
        }
        if !file.is_image() {
            return Err(UploadViolation::NotAnImage {
                name: file.filename.clone(),
            });
        }
    }
    Ok(())
}

/// Human-readable size at 1024 scale, at most two decimals, trailing zeros dropped.
///
/// - `0` → `"0 Bytes"`
/// - `1536` → `"1.5 KB"`
/// - `10485760` → `"10 MB"`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }
    let value = bytes as f64 / 1024f64.powi(unit as i32);
    // Ties round up: 1152 bytes is 1.13 KB, not 1.12 KB.
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// One line of the file preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub index: usize,
    pub filename: String,
    pub size_label: String,
}

/// The contact form's file input plus its preview list.
#[derive(Debug, Clone)]
pub struct FileUpload {
    limits: UploadLimits,
    selected: Vec<Attachment>,
}

impl FileUpload {
    pub fn new(limits: UploadLimits) -> Self {
        Self {
            limits,
            selected: Vec::new(),
        }
    }

    /// Replace the selection (`change` event).
    ///
    /// On any violation the selection ends up empty and one error is shown.
    pub fn select(&mut self, files: Vec<Attachment>, notifier: &mut dyn Notifier) -> bool {
        match check_attachments(&files, &self.limits) {
            Ok(()) => {
                tracing::debug!(count = files.len(), "attachments accepted");
                self.selected = files;
                true
            }
            Err(violation) => {
                tracing::debug!(%violation, "attachments rejected");
                notifier.notify(&violation.to_string(), Severity::Error);
                self.selected.clear();
                false
            }
        }
    }

    pub fn selected(&self) -> &[Attachment] {
        &self.selected
    }

    pub fn preview(&self) -> Vec<PreviewRow> {
        self.selected
            .iter()
            .enumerate()
            .map(|(index, file)| PreviewRow {
                index,
                filename: file.filename.clone(),
                size_label: format_file_size(file.size_bytes),
            })
            .collect()
    }

    /// Remove button on a preview row. The selection is left as it is.
    pub fn remove(&self, index: usize, notifier: &mut dyn Notifier) {
        tracing::debug!(index, "single-file removal requested");
        notifier.notify(REMOVAL_UNSUPPORTED, Severity::Info);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
