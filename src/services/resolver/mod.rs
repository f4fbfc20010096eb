// オプション解決機能
// 処理オプション + 元画像サイズ -> ファイル単位の変換計画

pub mod option_resolver;

// 公開API
pub use option_resolver::{resolve, resolve_output_format, resolve_output_path, resolve_quality};
