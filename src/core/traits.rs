// バッチリサイズのトレイト定義
// バッチランナーが依存する外部ケイパビリティの抽象化

use super::types::{ImageMetadata, ProgressEvent, ResolvedPlan};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

/// 画像のプローブと変換（デコード→リサイズ→エンコード→書き込み）を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ImageTransformer: Send + Sync {
    /// ヘッダーを読んで元画像のサイズを取得
    async fn probe(&self, path: &Path) -> Result<ImageMetadata>;

    /// 計画に従って変換し、書き込んだ出力パスを返す
    async fn transform(&self, path: &Path, plan: &ResolvedPlan) -> Result<PathBuf>;

    /// バックエンド名を取得
    fn backend_name(&self) -> &'static str;
}

// ImageTransformer for Box<dyn ImageTransformer>
#[async_trait]
impl ImageTransformer for Box<dyn ImageTransformer> {
    async fn probe(&self, path: &Path) -> Result<ImageMetadata> {
        self.as_ref().probe(path).await
    }

    async fn transform(&self, path: &Path, plan: &ResolvedPlan) -> Result<PathBuf> {
        self.as_ref().transform(path, plan).await
    }

    fn backend_name(&self) -> &'static str {
        self.as_ref().backend_name()
    }
}

/// 進捗通知の受け口
///
/// バッチランナーから同期的に、各ファイルの変換開始前に1回ずつ呼ばれる。
#[automock]
pub trait ProgressSink: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn report(&self, event: &ProgressEvent) {
        self(event)
    }
}
