use super::{is_image_file, FileSelector};
use crate::core::{ResizeError, ResizeResult};
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// ローカルファイルシステム用のファイル選択実装
///
/// ファイルはそのまま採用し、ディレクトリは画像ファイルに展開する。
#[derive(Clone, Debug, Default)]
pub struct LocalFileSelector {
    recursive: bool,
}

impl LocalFileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// サブディレクトリまで展開する
    pub fn recursive() -> Self {
        Self { recursive: true }
    }

    /// ディレクトリ内の画像ファイルをパス順に列挙
    fn expand_directory(&self, directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let walker = if self.recursive {
            WalkDir::new(directory)
        } else {
            WalkDir::new(directory).max_depth(1)
        };

        let mut files = Vec::new();
        for entry in walker.sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to read directory: {}", directory.display()))?;

            if entry.file_type().is_file() && is_image_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn select_blocking(&self, inputs: &[PathBuf]) -> ResizeResult<Vec<PathBuf>> {
        let mut selected = Vec::new();

        for input in inputs {
            let metadata = std::fs::metadata(input)
                .with_context(|| format!("Failed to get metadata for: {}", input.display()))
                .map_err(|e| ResizeError::file_selection(input, e))?;

            if metadata.is_dir() {
                let mut files = self
                    .expand_directory(input)
                    .map_err(|e| ResizeError::file_selection(input, e))?;
                debug!(directory = %input.display(), count = files.len(), "expanded directory");
                selected.append(&mut files);
            } else {
                selected.push(input.clone());
            }
        }

        Ok(selected)
    }
}

#[async_trait]
impl FileSelector for LocalFileSelector {
    async fn select(&self, inputs: &[PathBuf]) -> ResizeResult<Vec<PathBuf>> {
        let this = self.clone();
        let inputs = inputs.to_vec();

        tokio::task::spawn_blocking(move || this.select_blocking(&inputs)).await?
    }
}
