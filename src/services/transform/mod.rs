// 画像変換機能
// プローブ（ヘッダー読み取り）と デコード→リサイズ→エンコード→書き込み

pub mod formats;
pub mod image_crate;

// 公開API
pub use formats::OutputFormat;
pub use image_crate::{ImageCrateTransformer, MAX_TARGET_DIMENSION};
