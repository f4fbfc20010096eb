// BatchRunner - 逐次バッチリサイズエンジン
// 変換ケイパビリティはコンストラクタで注入し、ファイル単位でエラーを隔離する

use crate::core::{
    BatchSummary, FileResult, ImageTransformer, ProcessingOptions, ProgressEvent, ProgressSink,
    ResizeError, ResizeResult,
};
use crate::services::process_single_file;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

/// 入力ファイルを1件ずつ順番に処理するバッチランナー
///
/// - 結果は入力と同じ順序・同じ件数で返る
/// - 進捗は各ファイルの変換開始前に1回だけ通知される
/// - 1ファイルの失敗は記録されるだけで、残りのファイルの処理は続く
///
/// 同一インスタンスで同時に `run` が呼ばれた場合、後続のバッチは
/// 先行バッチの完了を待ってから開始する。
pub struct BatchRunner<T> {
    transformer: Arc<T>,
    batch_lock: Mutex<()>,
}

impl<T> BatchRunner<T>
where
    T: ImageTransformer + 'static,
{
    pub fn new(transformer: T) -> Self {
        Self::from_arc(Arc::new(transformer))
    }

    /// 共有済みの変換実装からランナーを作成
    pub fn from_arc(transformer: Arc<T>) -> Self {
        Self {
            transformer,
            batch_lock: Mutex::new(()),
        }
    }

    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    /// バッチを実行
    ///
    /// `Err` になるのはバッチ全体の準備に失敗した場合のみ。
    /// 個々のファイルの失敗は `FileResult` に記録される。
    pub async fn run(
        &self,
        files: &[PathBuf],
        options: &ProcessingOptions,
        sink: &dyn ProgressSink,
    ) -> ResizeResult<Vec<FileResult>> {
        self.run_with_cancel(files, options, sink, &CancellationToken::new())
            .await
    }

    /// キャンセル可能なバッチ実行
    ///
    /// キャンセルはファイルの境界でのみ確認する。未着手のファイルは
    /// 進捗を通知せずにキャンセル扱いの失敗として記録する。
    pub async fn run_with_cancel(
        &self,
        files: &[PathBuf],
        options: &ProcessingOptions,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> ResizeResult<Vec<FileResult>> {
        let _guard = self.batch_lock.lock().await;

        run_batch_with_cancel(files, options, self.transformer.as_ref(), sink, cancel).await
    }
}

/// 依存関係をすべて引数で受け取るバッチ実行
pub async fn run_batch<T>(
    files: &[PathBuf],
    options: &ProcessingOptions,
    transformer: &T,
    sink: &dyn ProgressSink,
) -> ResizeResult<Vec<FileResult>>
where
    T: ImageTransformer + ?Sized,
{
    run_batch_with_cancel(files, options, transformer, sink, &CancellationToken::new()).await
}

/// キャンセル可能な `run_batch`
pub async fn run_batch_with_cancel<T>(
    files: &[PathBuf],
    options: &ProcessingOptions,
    transformer: &T,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> ResizeResult<Vec<FileResult>>
where
    T: ImageTransformer + ?Sized,
{
    let total = files.len();
    let span = info_span!("batch", total, backend = transformer.backend_name());

    async move {
        prepare_output_directory(options).await?;
        info!("starting batch of {total} file(s)");

        let mut results = Vec::with_capacity(total);

        for (index, file) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!(file = %file.display(), "skipped after cancellation");
                results.push(FileResult::failed(
                    file,
                    ResizeError::Cancelled.file_message(),
                ));
                continue;
            }

            sink.report(&ProgressEvent::new(index, total, file));

            let result = process_single_file(transformer, options, file).await;
            results.push(result);
        }

        let summary = BatchSummary::from_results(&results);
        if summary.all_succeeded() {
            info!(succeeded = summary.succeeded, "batch finished");
        } else {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "batch finished with failures"
            );
        }

        Ok(results)
    }
    .instrument(span)
    .await
}

/// 出力先ディレクトリの準備
async fn prepare_output_directory(options: &ProcessingOptions) -> ResizeResult<()> {
    let Some(dir) = options.output_directory.as_deref() else {
        return Ok(());
    };

    if dir.exists() && !dir.is_dir() {
        return Err(ResizeError::batch_setup(format!(
            "出力先がディレクトリではありません: {}",
            dir.display()
        )));
    }

    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        ResizeError::batch_setup(format!(
            "出力ディレクトリを作成できません: {} ({e})",
            dir.display()
        ))
    })
}
