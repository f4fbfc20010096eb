// 処理オプションの読み込みと検証

use crate::core::{ProcessingOptions, ResizeError, ResizeMode, ResizeResult};
use crate::services::transform::{OutputFormat, MAX_TARGET_DIMENSION};
use anyhow::Context;
use std::path::Path;

/// JSON形式のオプションファイルを読み込む
///
/// デスクトップ版のリクエストと同じ camelCase のキーを受け付ける。
pub fn load_options_file(path: &Path) -> ResizeResult<ProcessingOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))
        .map_err(|e| ResizeError::config(path, e))?;

    serde_json::from_str(&content)
        .context("Failed to parse options JSON")
        .map_err(|e| ResizeError::config(path, e))
}

/// 入力収集時の検証
///
/// リゾルバ自体は寛容に動作するため、ユーザー入力はここで弾く。
pub fn validate_options(options: &ProcessingOptions) -> ResizeResult<()> {
    match options.resize_mode {
        ResizeMode::Pixels => {
            if options.width.is_none() && options.height.is_none() {
                return Err(ResizeError::validation(
                    "width/height",
                    "幅または高さのどちらか一方以上を指定してください",
                ));
            }
            if options.width == Some(0) {
                return Err(ResizeError::validation("width", "幅は1以上である必要があります"));
            }
            if options.height == Some(0) {
                return Err(ResizeError::validation("height", "高さは1以上である必要があります"));
            }
            for (field, value) in [("width", options.width), ("height", options.height)] {
                if value.is_some_and(|v| v > MAX_TARGET_DIMENSION) {
                    return Err(ResizeError::validation(
                        field,
                        format!("{MAX_TARGET_DIMENSION}以下で指定してください"),
                    ));
                }
            }
        }
        ResizeMode::Percentage => match options.percentage {
            Some(p) if p.is_finite() && p > 0.0 => {}
            _ => {
                return Err(ResizeError::validation(
                    "percentage",
                    "百分率は0より大きい値を指定してください",
                ))
            }
        },
    }

    if let Some(quality) = options.quality {
        if !(1..=100).contains(&quality) {
            return Err(ResizeError::validation(
                "quality",
                "品質は1から100の範囲で指定してください",
            ));
        }
    }

    if let Some(format) = options.format.as_deref().filter(|f| !f.trim().is_empty()) {
        format.parse::<OutputFormat>()?;
    }

    Ok(())
}
