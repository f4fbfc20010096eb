use crate::core::ResizeResult;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

pub use local::LocalFileSelector;

/// 一括選択で受け付ける画像拡張子
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// 入力パスからバッチ対象のファイル一覧を作るトレイト
#[automock]
#[async_trait]
pub trait FileSelector: Send + Sync {
    /// 入力パスをファイル一覧に展開する（入力順を保持）
    async fn select(&self, inputs: &[PathBuf]) -> ResizeResult<Vec<PathBuf>>;
}

// FileSelector for Box<dyn FileSelector>
#[async_trait]
impl FileSelector for Box<dyn FileSelector> {
    async fn select(&self, inputs: &[PathBuf]) -> ResizeResult<Vec<PathBuf>> {
        self.as_ref().select(inputs).await
    }
}

/// 画像ファイルかどうかを拡張子で判定（大文字小文字は区別しない）
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
