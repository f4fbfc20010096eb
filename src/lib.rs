pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod storage;

use crate::core::{FileResult, ImageTransformer, ProcessingOptions, ProgressSink, ResizeResult};
use engine::BatchRunner;
use storage::FileSelector;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

// DIコンテナの役割を果たすジェネリックなApp構造体
// ファイル選択と変換の実装を直接所有する
pub struct App<S, T>
where
    S: FileSelector,
    T: ImageTransformer + 'static,
{
    pub selector: S,
    pub runner: BatchRunner<T>,
}

impl<S, T> App<S, T>
where
    S: FileSelector,
    T: ImageTransformer + 'static,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(selector: S, transformer: T) -> Self {
        Self {
            selector,
            runner: BatchRunner::new(transformer),
        }
    }

    /// 変換バックエンド名
    pub fn backend_name(&self) -> &'static str {
        self.runner.transformer().backend_name()
    }

    /// 入力パスを展開してバッチを実行
    pub async fn run(
        &self,
        inputs: &[PathBuf],
        options: &ProcessingOptions,
        sink: &dyn ProgressSink,
    ) -> ResizeResult<Vec<FileResult>> {
        self.run_with_cancel(inputs, options, sink, &CancellationToken::new())
            .await
    }

    /// キャンセル可能なバッチ実行
    pub async fn run_with_cancel(
        &self,
        inputs: &[PathBuf],
        options: &ProcessingOptions,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> ResizeResult<Vec<FileResult>> {
        let files = self.selector.select(inputs).await?;
        self.runner
            .run_with_cancel(&files, options, sink, cancel)
            .await
    }
}
