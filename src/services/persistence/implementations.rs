// バッチ結果レポートの具象実装

use crate::core::{BatchSummary, FileResult, ProcessingOptions, ResizeError, ResizeResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// バッチ1回分の結果レポート
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: String,
    pub backend: String,
    pub options: ProcessingOptions,
    pub summary: BatchSummary,
    pub results: Vec<FileResult>,
}

impl BatchReport {
    pub fn new(
        options: &ProcessingOptions,
        results: Vec<FileResult>,
        backend: impl Into<String>,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            backend: backend.into(),
            options: options.clone(),
            summary: BatchSummary::from_results(&results),
            results,
        }
    }
}

/// レポートを整形済みJSONとして書き出す
pub async fn write_report(report: &BatchReport, path: &Path) -> ResizeResult<()> {
    let result = async {
        // 親ディレクトリが存在しない場合は作成
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_vec_pretty(report).context("Failed to serialize report")?;

        let mut file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        file.write_all(&json).await.context("Failed to write report")?;
        file.flush().await.context("Failed to flush report")?;

        anyhow::Ok(())
    }
    .await;

    result.map_err(|e| ResizeError::report(path, e))
}
