// Option Resolver - 処理オプションとメタデータからファイル単位の変換計画を確定
// I/Oなしの純粋関数。不正な数値は「未指定」として扱い、失敗しない

use crate::core::{ImageMetadata, ProcessingOptions, ResizeMode, ResolvedPlan, DEFAULT_QUALITY};
use std::path::{Path, PathBuf};

/// 出力ファイル名に付与するサフィックス
pub const OUTPUT_SUFFIX: &str = "-resized";

/// 1ファイル分の変換計画を確定する
pub fn resolve(
    options: &ProcessingOptions,
    metadata: &ImageMetadata,
    input_path: &Path,
) -> ResolvedPlan {
    let output_format = resolve_output_format(options.format.as_deref(), input_path);
    let output_path = resolve_output_path(
        options.output_directory.as_deref(),
        input_path,
        &output_format,
    );

    let (target_width, target_height) = match options.resize_mode {
        ResizeMode::Percentage => scale_by_percentage(metadata, options.percentage),
        ResizeMode::Pixels => (
            options.width.filter(|w| *w > 0),
            options.height.filter(|h| *h > 0),
        ),
    };

    ResolvedPlan {
        target_width,
        target_height,
        output_format,
        output_path,
        quality: resolve_quality(options.quality),
    }
}

/// 出力形式を決定（指定がなければ入力の拡張子を小文字で引き継ぐ）
pub fn resolve_output_format(format: Option<&str>, input_path: &Path) -> String {
    let requested = format
        .map(|f| f.trim().trim_start_matches('.'))
        .filter(|f| !f.is_empty());

    match requested {
        Some(f) => f.to_lowercase(),
        None => input_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    }
}

/// `<出力先>/<元のファイル名>-resized.<形式>` を組み立てる
///
/// 同名の出力が重なった場合は後のファイルが上書きする。
pub fn resolve_output_path(
    output_directory: Option<&Path>,
    input_path: &Path,
    output_format: &str,
) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let directory = match output_directory {
        Some(dir) => dir.to_path_buf(),
        None => input_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    directory.join(format!("{stem}{OUTPUT_SUFFIX}.{output_format}"))
}

/// 品質を決定（未指定・範囲外は既定値）
pub fn resolve_quality(quality: Option<u32>) -> u32 {
    quality
        .filter(|q| (1..=100).contains(q))
        .unwrap_or(DEFAULT_QUALITY)
}

// 0に丸まる寸法は1に切り上げる
fn scale_by_percentage(metadata: &ImageMetadata, percentage: Option<f64>) -> (Option<u32>, Option<u32>) {
    let Some(percentage) = percentage.filter(|p| p.is_finite() && *p > 0.0) else {
        return (None, None);
    };

    let scale = |dimension: u32| -> u32 {
        let scaled = (f64::from(dimension) * percentage / 100.0).round();
        // `as` は u32 の範囲に飽和する
        (scaled as u32).max(1)
    };

    (Some(scale(metadata.width)), Some(scale(metadata.height)))
}
