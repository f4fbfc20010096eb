// 画像処理機能
// 単一ファイルのプローブ、計画解決、変換

pub mod worker;

// 公開API
pub use worker::{attempt_single_file, process_single_file};
