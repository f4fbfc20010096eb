// エラーハンドリングの統合テスト
use crate::fixtures::{write_corrupted, write_png};
use anyhow::Result;
use image_resizer::{
    core::{ProcessingOptions, ResizeError},
    engine::resize_files_quiet,
    services::{load_options_file, validate_options, ImageCrateTransformer, NoOpProgressSink},
    storage::LocalFileSelector,
    App,
};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_nonexistent_input_is_batch_level_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let app = App::new(LocalFileSelector::new(), ImageCrateTransformer::new());

    let result = app
        .run(
            &[temp_dir.path().join("does_not_exist.png")],
            &ProcessingOptions::pixels(Some(10), None),
            &NoOpProgressSink::new(),
        )
        .await;

    match result {
        Err(ResizeError::FileSelectionError { path, .. }) => {
            assert!(path.contains("does_not_exist.png"));
        }
        other => panic!("FileSelectionError が期待されます: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_corrupted_file_does_not_abort_batch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let files = vec![
        write_png(temp_dir.path(), "first.png", 8, 8),
        write_corrupted(temp_dir.path(), "corrupted.png"),
        write_png(temp_dir.path(), "last.png", 8, 8),
    ];

    let results = resize_files_quiet(&files, &ProcessingOptions::percentage(50.0)).await?;

    assert_eq!(results.len(), 3);
    assert!(results[0].success);
    assert!(!results[1].success);
    assert!(results[2].success);
    assert!(!temp_dir.path().join("corrupted-resized.png").exists());
    Ok(())
}

#[tokio::test]
async fn test_unsupported_output_format_fails_per_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let files = vec![
        write_png(temp_dir.path(), "a.png", 8, 8),
        write_png(temp_dir.path(), "b.png", 8, 8),
    ];

    let results = resize_files_quiet(&files, &ProcessingOptions::default().with_format("heic")).await?;

    assert_eq!(results.len(), 2);
    for result in &results {
        assert!(!result.success);
        assert!(result.error.as_deref().unwrap().contains("heic"));
    }
    Ok(())
}

#[tokio::test]
async fn test_output_directory_blocked_by_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_png(temp_dir.path(), "a.png", 8, 8);
    let blocker = temp_dir.path().join("out");
    fs::write(&blocker, b"not a directory")?;

    let result = resize_files_quiet(
        &[input],
        &ProcessingOptions::default().with_output_directory(&blocker),
    )
    .await;

    assert!(matches!(result, Err(ResizeError::BatchSetupError { .. })));
    Ok(())
}

#[tokio::test]
async fn test_input_without_extension_fails_per_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("noext");
    image::RgbImage::new(4, 4).save_with_format(&input, image::ImageFormat::Png)?;

    let results = resize_files_quiet(&[input], &ProcessingOptions::default()).await?;

    assert_eq!(results.len(), 1);
    assert!(!results[0].success);
    Ok(())
}

#[test]
fn test_invalid_options_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("options.json");
    fs::write(&path, r#"{"resizeMode": "stretch"}"#)?;

    let error = load_options_file(&path).unwrap_err();

    assert!(matches!(error, ResizeError::ConfigError { .. }));
    assert!(error.context().suggestion.is_some());
    Ok(())
}

#[test]
fn test_validation_rejects_out_of_range_quality() {
    let error = validate_options(&ProcessingOptions::pixels(Some(10), None).with_quality(0))
        .unwrap_err();

    assert!(matches!(error, ResizeError::ValidationError { .. }));
    assert_eq!(error.context().operation, "validation");
}

#[tokio::test]
async fn test_oversized_target_fails_only_its_own_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let large = write_png(temp_dir.path(), "large.png", 10, 10);
    let tiny = write_png(temp_dir.path(), "tiny.png", 1, 1);

    let results =
        resize_files_quiet(&[large, tiny], &ProcessingOptions::percentage(100_000.0)).await?;

    assert_eq!(results.len(), 2);
    assert!(!results[0].success);
    assert!(results[0].error.as_deref().unwrap().contains("10000x10000"));
    assert!(!temp_dir.path().join("large-resized.png").exists());

    assert!(results[1].success);
    assert_eq!(
        image::image_dimensions(temp_dir.path().join("tiny-resized.png"))?,
        (1000, 1000)
    );
    Ok(())
}
