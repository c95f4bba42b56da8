//! File intake validation and the selected-image set.
//!
//! Rules applied in order on every intake call:
//! 1. Each candidate is filtered individually (type, size); a rejected file
//!    never blocks valid siblings in the same call.
//! 2. Nothing valid ⇒ silent no-op.
//! 3. Admitting the valid subset would exceed the 10-image cap ⇒ the whole
//!    batch is rejected, the set stays unchanged.
//! 4. Otherwise the valid files are appended in arrival order.

pub const MAX_IMAGES: usize = 10;
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

pub const LIMIT_MESSAGE: &str = "Maximum 10 images allowed. Please remove some images first.";

/// An in-memory handle to one user-chosen image.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Outcome of one intake call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intake {
    /// Valid files appended. `last_rejection` carries the most recent
    /// per-file rejection from the same call, if any.
    Accepted { last_rejection: Option<String> },
    /// Every candidate was rejected; the set and any prior error are untouched.
    Ignored,
    /// The batch would exceed the image cap; nothing was added.
    Overflow,
}

/// Ordered set of selected files, capped at [`MAX_IMAGES`].
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    files: Vec<SelectedFile>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedFile> {
        self.files.iter()
    }

    /// Applies the intake rules to a batch of candidates.
    pub fn admit(&mut self, candidates: Vec<SelectedFile>) -> Intake {
        let mut last_rejection = None;
        let mut accepted = Vec::new();

        for file in candidates {
            if !file.is_image() {
                last_rejection = Some(format!("{} is not an image file", file.file_name));
            } else if file.size() > MAX_FILE_SIZE {
                last_rejection = Some(format!("{} is larger than 10MB", file.file_name));
            } else {
                accepted.push(file);
            }
        }

        if accepted.is_empty() {
            return Intake::Ignored;
        }

        if self.files.len() + accepted.len() > MAX_IMAGES {
            return Intake::Overflow;
        }

        self.files.extend(accepted);
        Intake::Accepted { last_rejection }
    }

    /// Drops the file at `index`, preserving the order of the rest.
    /// Shrinking never violates the set invariants, so no re-validation.
    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
