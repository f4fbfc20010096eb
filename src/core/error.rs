// Custom error types for batch resizing
// バッチリサイズ専用のカスタムエラー型定義

use std::path::Path;
use thiserror::Error;

/// バッチリサイズ固有のエラー型
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("バッチ準備エラー: {message}")]
    BatchSetupError { message: String },

    #[error("ファイル選択エラー: {path} - {source}")]
    FileSelectionError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("メタデータ取得エラー: {path} - {source}")]
    ProbeError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("変換エラー: {path} - {source}")]
    TransformError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("未対応の出力形式: {format}")]
    UnsupportedFormatError { format: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("設定エラー: {path} - {source}")]
    ConfigError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("バッチがキャンセルされました")]
    Cancelled,

    #[error("レポート出力エラー: {path} - {source}")]
    ReportError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ResizeError {
    /// バッチ準備エラーの作成
    pub fn batch_setup(message: impl Into<String>) -> Self {
        Self::BatchSetupError {
            message: message.into(),
        }
    }

    /// ファイル選択エラーの作成
    pub fn file_selection(path: &Path, source: anyhow::Error) -> Self {
        Self::FileSelectionError {
            path: path.display().to_string(),
            source,
        }
    }

    /// メタデータ取得エラーの作成
    pub fn probe(path: &Path, source: anyhow::Error) -> Self {
        Self::ProbeError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 変換エラーの作成
    pub fn transform(path: &Path, source: anyhow::Error) -> Self {
        Self::TransformError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 未対応形式エラーの作成
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormatError {
            format: format.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 設定エラーの作成
    pub fn config(path: &Path, source: anyhow::Error) -> Self {
        Self::ConfigError {
            path: path.display().to_string(),
            source,
        }
    }

    /// レポート出力エラーの作成
    pub fn report(path: &Path, source: anyhow::Error) -> Self {
        Self::ReportError {
            path: path.display().to_string(),
            source,
        }
    }

    /// FileResultに記録するメッセージ
    ///
    /// 外部ケイパビリティ由来のエラーはメッセージをそのまま残す
    pub fn file_message(&self) -> String {
        match self {
            Self::ProbeError { source, .. } | Self::TransformError { source, .. } => {
                format!("{source:#}")
            }
            other => other.to_string(),
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::BatchSetupError { .. } => ErrorContext::new("batch_setup")
                .with_suggestion("出力ディレクトリのパスと書き込み権限を確認してください"),
            Self::FileSelectionError { path, .. } => ErrorContext::new("file_selection")
                .with_resource(path.clone())
                .with_suggestion("入力パスが存在するか確認してください"),
            Self::ProbeError { path, .. } => ErrorContext::new("probe")
                .with_resource(path.clone())
                .with_suggestion("画像ファイルの形式と整合性を確認してください"),
            Self::TransformError { path, .. } => ErrorContext::new("transform")
                .with_resource(path.clone()),
            Self::UnsupportedFormatError { format } => ErrorContext::new("encode")
                .with_resource(format.clone())
                .with_suggestion("`formats` コマンドで対応形式を確認してください"),
            Self::ValidationError { field, .. } => ErrorContext::new("validation")
                .with_resource(field.clone()),
            Self::ConfigError { path, .. } => ErrorContext::new("configuration")
                .with_resource(path.clone())
                .with_suggestion("オプションファイルのJSON形式を確認してください"),
            Self::ReportError { path, .. } => ErrorContext::new("report")
                .with_resource(path.clone()),
            Self::Cancelled | Self::TaskError { .. } => ErrorContext::new("batch"),
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（ファイルパス等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// バッチリサイズの結果型
pub type ResizeResult<T> = std::result::Result<T, ResizeError>;

impl From<tokio::task::JoinError> for ResizeError {
    fn from(error: tokio::task::JoinError) -> Self {
        ResizeError::TaskError { source: error }
    }
}
