// 高レベル公開API
// BatchRunnerを簡単に使用できるようにするための便利な関数

use super::BatchRunner;
use crate::{
    core::{FileResult, ImageTransformer, ProcessingOptions, ProgressEvent, ProgressSink, ResizeResult},
    services::{ChannelProgressSink, ImageCrateTransformer, NoOpProgressSink},
};
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

// ========================================
// DI対応API - BatchRunnerベース
// ========================================

/// 設定済みBatchRunnerでファイルリストを処理（DI推奨）
pub async fn resize_files_with_runner<T>(
    files: &[PathBuf],
    options: &ProcessingOptions,
    runner: &BatchRunner<T>,
    sink: &dyn ProgressSink,
) -> ResizeResult<Vec<FileResult>>
where
    T: ImageTransformer + 'static,
{
    runner.run(files, options, sink).await
}

/// BatchRunner作成のヘルパー関数
///
/// `image` クレートによる変換実装を使用する
pub fn create_default_batch_runner() -> BatchRunner<ImageCrateTransformer> {
    BatchRunner::new(ImageCrateTransformer::new())
}

/// 静音版（テストやバックグラウンド処理用）
pub async fn resize_files_quiet(
    files: &[PathBuf],
    options: &ProcessingOptions,
) -> ResizeResult<Vec<FileResult>> {
    let runner = create_default_batch_runner();
    runner.run(files, options, &NoOpProgressSink::new()).await
}

/// バッチを別タスクで実行し、進捗をチャンネルで受け取る
///
/// 受信側は呼び出し元のタスクから即座に読み出せる。
/// バッチが終わると送信側が破棄され、受信は `None` で終了する。
pub fn resize_files_with_progress<T>(
    runner: std::sync::Arc<BatchRunner<T>>,
    files: Vec<PathBuf>,
    options: ProcessingOptions,
) -> (
    JoinHandle<ResizeResult<Vec<FileResult>>>,
    UnboundedReceiver<ProgressEvent>,
)
where
    T: ImageTransformer + 'static,
{
    let (sink, receiver) = ChannelProgressSink::channel();

    let handle = tokio::spawn(async move { runner.run(&files, &options, &sink).await });

    (handle, receiver)
}
