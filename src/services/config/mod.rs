// 設定管理機能
// オプションファイルの読み込みと入力値の検証

pub mod implementations;

// 公開API
pub use implementations::{load_options_file, validate_options};
