//! Live analysis server integration test.
//!
//! Runs only when CAR_AI_SERVER_URL points at a reachable server;
//! skipped otherwise so the suite stays offline-safe.

use car_ai_rust::api::AnalysisClient;
use car_ai_rust::selection::{SelectedFile, SelectionSet};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

fn tiny_png(name: &str) -> SelectedFile {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(8, 8))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode test image");

    SelectedFile {
        file_name: name.to_string(),
        mime_type: "image/png".to_string(),
        bytes,
    }
}

#[tokio::test]
async fn live_single_analysis() {
    let base_url = match std::env::var("CAR_AI_SERVER_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("CAR_AI_SERVER_URL not set; skipping integration test");
            return;
        }
    };

    let client = AnalysisClient::new(base_url).expect("client");

    let mut selection = SelectionSet::new();
    selection.admit(vec![tiny_png("integration-test.png")]);

    let outcome = client
        .analyze(&selection)
        .await
        .expect("analysis request failed");

    assert!(!outcome.is_batch(), "one file must use the single strategy");
    assert!(
        !outcome.characteristics().is_empty(),
        "server returned no characteristics"
    );
}

#[tokio::test]
async fn live_batch_analysis() {
    let base_url = match std::env::var("CAR_AI_SERVER_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("CAR_AI_SERVER_URL not set; skipping integration test");
            return;
        }
    };

    let client = AnalysisClient::new(base_url).expect("client");

    let mut selection = SelectionSet::new();
    selection.admit(vec![tiny_png("front.png"), tiny_png("rear.png")]);

    let outcome = client
        .analyze(&selection)
        .await
        .expect("batch analysis request failed");

    assert!(outcome.is_batch(), "two files must use the batch strategy");
}
