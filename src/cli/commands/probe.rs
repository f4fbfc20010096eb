use crate::core::ImageTransformer;
use crate::services::ImageCrateTransformer;
use crate::storage::{FileSelector, LocalFileSelector};
use anyhow::Result;
use std::path::PathBuf;

/// Execute probe command
///
/// 読み込めないファイルはエラーを表示して次へ進む。
/// 戻り値は読み込めなかったファイル数。
pub async fn execute_probe(inputs: Vec<PathBuf>, recursive: bool) -> Result<usize> {
    let selector = if recursive {
        LocalFileSelector::recursive()
    } else {
        LocalFileSelector::new()
    };
    let files = selector.select(&inputs).await?;
    let transformer = ImageCrateTransformer::new();

    let mut failures = 0;
    for file in &files {
        match transformer.probe(file).await {
            Ok(metadata) => {
                println!("📐 {}: {} x {}", file.display(), metadata.width, metadata.height)
            }
            Err(error) => {
                failures += 1;
                eprintln!("❌ {}: {error:#}", file.display());
            }
        }
    }

    Ok(failures)
}
