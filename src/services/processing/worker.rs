// Worker - 単一ファイル処理機能

use crate::core::{FileResult, ImageTransformer, ProcessingOptions, ResizeError, ResizeResult};
use crate::services::resolver::resolve;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 単一ファイルの変換を試み、出力パスかエラーを返す
pub async fn attempt_single_file<T>(
    transformer: &T,
    options: &ProcessingOptions,
    file_path: &Path,
) -> ResizeResult<PathBuf>
where
    T: ImageTransformer + ?Sized,
{
    let metadata = transformer
        .probe(file_path)
        .await
        .map_err(|e| ResizeError::probe(file_path, e))?;

    let plan = resolve(options, &metadata, file_path);
    debug!(
        file = %file_path.display(),
        source_width = metadata.width,
        source_height = metadata.height,
        target_width = ?plan.target_width,
        target_height = ?plan.target_height,
        format = %plan.output_format,
        quality = plan.quality,
        "resolved plan"
    );

    transformer
        .transform(file_path, &plan)
        .await
        .map_err(|e| ResizeError::transform(file_path, e))
}

/// 単一ファイルの処理
///
/// 失敗はエラーとして伝播させず、FileResult に記録する。
pub async fn process_single_file<T>(
    transformer: &T,
    options: &ProcessingOptions,
    file_path: &Path,
) -> FileResult
where
    T: ImageTransformer + ?Sized,
{
    match attempt_single_file(transformer, options, file_path).await {
        Ok(output_path) => FileResult::succeeded(file_path, output_path),
        Err(error) => {
            warn!(file = %file_path.display(), "{error}");
            FileResult::failed(file_path, error.file_message())
        }
    }
}
