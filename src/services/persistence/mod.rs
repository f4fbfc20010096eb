// 結果の永続化機能
// バッチ結果レポートのJSON出力

pub mod implementations;

// 公開API
pub use implementations::{write_report, BatchReport};
