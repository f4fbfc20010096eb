// バッチリサイズ処理に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 品質が指定されなかった場合に使用する既定値
pub const DEFAULT_QUALITY: u32 = 90;

/// リサイズ方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// 幅・高さをピクセルで指定
    #[default]
    Pixels,
    /// 元画像サイズに対する百分率で指定
    Percentage,
}

/// バッチ全体で共有される処理オプション
///
/// 数値が欠けている・不正な場合でもエラーにはせず「未指定」として扱う。
/// 値の検証は入力収集側（CLI）で `services::config::validate_options` が行う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingOptions {
    pub resize_mode: ResizeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Percentageモードでのみ使用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// 出力エンコード（未指定なら入力ファイルの拡張子を引き継ぐ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    /// 出力先（未指定なら各入力ファイルと同じディレクトリ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// ピクセル指定のオプションを作成
    pub fn pixels(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            resize_mode: ResizeMode::Pixels,
            width,
            height,
            ..Self::default()
        }
    }

    /// 百分率指定のオプションを作成
    pub fn percentage(percentage: f64) -> Self {
        Self {
            resize_mode: ResizeMode::Percentage,
            percentage: Some(percentage),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = Some(dir.into());
        self
    }
}

/// プローブで得られる元画像のサイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

impl ImageMetadata {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// ファイル単位で確定した変換計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub output_format: String,
    pub output_path: PathBuf,
    pub quality: u32,
}

impl ResolvedPlan {
    /// 幾何変換が必要かどうか（どちらも未設定ならエンコードのみ）
    pub fn requests_resize(&self) -> bool {
        self.target_width.is_some() || self.target_height.is_some()
    }
}

/// 1ファイル分の処理結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file: PathBuf,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    pub fn succeeded(file: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            success: true,
            output_path: Some(output_path.into()),
            error: None,
        }
    }

    pub fn failed(file: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            success: false,
            output_path: None,
            error: Some(error.into()),
        }
    }
}

/// 各ファイルの処理開始直前に通知される進捗
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    /// 1始まりの位置
    pub current: usize,
    pub total: usize,
    pub filename: String,
}

impl ProgressEvent {
    pub fn new(index: usize, total: usize, path: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            current: index + 1,
            total,
            filename,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64) * 100.0
    }
}

/// バッチ全体のサマリー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[FileResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
