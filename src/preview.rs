//! Concurrent preview probing of selected images.
//!
//! Each file is decoded on the blocking pool with its own copy of the bytes,
//! so previews never touch shared selection state and carry no ordering
//! guarantee among themselves. Results are joined back in selection order.

use crate::error::{CarAiError, Result};
use crate::selection::SelectionSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

pub async fn decode_previews(selection: &SelectionSet) -> Vec<Result<Preview>> {
    let handles: Vec<_> = selection
        .iter()
        .map(|file| {
            let file_name = file.file_name.clone();
            let bytes = file.bytes.clone();
            tokio::task::spawn_blocking(move || {
                let image = image::load_from_memory(&bytes)
                    .map_err(|e| CarAiError::ImageLoad(format!("{file_name}: {e}")))?;
                Ok(Preview {
                    file_name,
                    width: image.width(),
                    height: image.height(),
                })
            })
        })
        .collect();

    let mut previews = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(result) => previews.push(result),
            Err(e) => previews.push(Err(CarAiError::ImageLoad(e.to_string()))),
        }
    }
    previews
}
