// 画像変換の具象実装
// デコード→リサイズ→エンコードをメモリ上で行い、成功時のみ出力ファイルへ書き込む

use super::formats::OutputFormat;
use crate::core::{ImageMetadata, ImageTransformer, ResolvedPlan};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// 出力画像の一辺の上限
pub const MAX_TARGET_DIMENSION: u32 = 65_535;

/// リサイズ中に確保するバッファの画素数上限
pub const MAX_WORKING_PIXELS: u64 = 40_000_000;

/// `image` クレートによる変換実装
#[derive(Clone, Debug)]
pub struct ImageCrateTransformer {
    filter: FilterType,
}

impl Default for ImageCrateTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCrateTransformer {
    /// Lanczos3 フィルタで変換する実装を作成
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// 計画に従ってリサイズ
    ///
    /// 幅・高さ両方指定時は全体を覆うよう拡大縮小して中央で切り抜く。
    /// 片方のみの場合はもう片方を縦横比から求める。
    fn apply_plan(&self, image: DynamicImage, plan: &ResolvedPlan) -> DynamicImage {
        let (width, height) = (image.width(), image.height());

        match (plan.target_width, plan.target_height) {
            (Some(w), Some(h)) => image.resize_to_fill(w, h, self.filter),
            (Some(w), None) => {
                let h = proportional(height, w, width);
                image.resize_exact(w, h, self.filter)
            }
            (None, Some(h)) => {
                let w = proportional(width, h, height);
                image.resize_exact(w, h, self.filter)
            }
            (None, None) => image,
        }
    }

    fn run_blocking(&self, input: &Path, plan: &ResolvedPlan) -> Result<PathBuf> {
        let format: OutputFormat = plan.output_format.parse()?;

        let image = image::open(input)
            .with_context(|| format!("Failed to load image from path: {}", input.display()))?;

        let resized = if plan.requests_resize() {
            check_working_size((image.width(), image.height()), plan)?;
            self.apply_plan(image, plan)
        } else {
            image
        };

        let encoded = encode(&resized, format, plan.quality)
            .with_context(|| format!("Failed to encode image as {format}"))?;

        std::fs::write(&plan.output_path, encoded).with_context(|| {
            format!("Failed to write output file: {}", plan.output_path.display())
        })?;

        Ok(plan.output_path.clone())
    }
}

#[async_trait]
impl ImageTransformer for ImageCrateTransformer {
    async fn probe(&self, path: &Path) -> Result<ImageMetadata> {
        let (width, height) = tokio::task::spawn_blocking({
            let path = path.to_path_buf();
            move || image::image_dimensions(&path)
        })
        .await
        .context("Failed to spawn blocking task for image probing")?
        .with_context(|| format!("Failed to read image header: {}", path.display()))?;

        Ok(ImageMetadata::new(width, height))
    }

    async fn transform(&self, path: &Path, plan: &ResolvedPlan) -> Result<PathBuf> {
        tokio::task::spawn_blocking({
            let this = self.clone();
            let path = path.to_path_buf();
            let plan = plan.clone();
            move || this.run_blocking(&path, &plan)
        })
        .await
        .context("Failed to spawn blocking task for image transform")?
    }

    fn backend_name(&self) -> &'static str {
        "image"
    }
}

/// 出力形式ごとにメモリ上へエンコード
fn encode(
    image: &DynamicImage,
    format: OutputFormat,
    quality: u32,
) -> image::ImageResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpeg => {
            // JPEG はアルファ非対応
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality_u8(quality));
            DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut buffer,
                png_compression(quality),
                PngFilterType::Adaptive,
            );
            // 浮動小数点画像は 16bit に落とす
            match image.color() {
                ColorType::Rgb32F => {
                    DynamicImage::ImageRgb16(image.to_rgb16()).write_with_encoder(encoder)?
                }
                ColorType::Rgba32F => {
                    DynamicImage::ImageRgba16(image.to_rgba16()).write_with_encoder(encoder)?
                }
                _ => image.write_with_encoder(encoder)?,
            }
        }
        _ => DynamicImage::ImageRgba8(image.to_rgba8())
            .write_to(&mut buffer, format.image_format())?,
    }

    Ok(buffer.into_inner())
}

/// リサイズ前に作業バッファの大きさを確認する
///
/// 中間バッファは元画像と出力のうち大きい方の辺で確保される。
fn check_working_size(source: (u32, u32), plan: &ResolvedPlan) -> Result<()> {
    let (source_width, source_height) = source;
    let (width, height) = match (plan.target_width, plan.target_height) {
        (Some(w), Some(h)) => cover_dimensions(source, w, h),
        (Some(w), None) => (w, proportional(source_height, w, source_width)),
        (None, Some(h)) => (proportional(source_width, h, source_height), h),
        (None, None) => source,
    };

    if width > MAX_TARGET_DIMENSION || height > MAX_TARGET_DIMENSION {
        bail!(
            "Target size {width}x{height} exceeds the maximum dimension of {MAX_TARGET_DIMENSION}"
        );
    }

    let working = u64::from(source_width.max(width)) * u64::from(source_height.max(height));
    if working > MAX_WORKING_PIXELS {
        bail!("Target size {width}x{height} requires more than {MAX_WORKING_PIXELS} pixels");
    }

    Ok(())
}

/// 指定サイズ全体を覆うように拡大縮小したときのサイズ
fn cover_dimensions(source: (u32, u32), width: u32, height: u32) -> (u32, u32) {
    let (source_width, source_height) = (f64::from(source.0.max(1)), f64::from(source.1.max(1)));
    let ratio = (f64::from(width) / source_width).max(f64::from(height) / source_height);

    (
        ((source_width * ratio).round() as u32).max(width),
        ((source_height * ratio).round() as u32).max(height),
    )
}

fn proportional(other: u32, target: u32, source: u32) -> u32 {
    let scaled = (f64::from(other) * f64::from(target) / f64::from(source.max(1))).round();
    (scaled as u32).max(1)
}

fn quality_u8(quality: u32) -> u8 {
    quality.clamp(1, 100) as u8
}

/// PNG は可逆なので品質を圧縮レベルに読み替える
fn png_compression(quality: u32) -> CompressionType {
    match quality {
        0..=33 => CompressionType::Fast,
        34..=89 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}
