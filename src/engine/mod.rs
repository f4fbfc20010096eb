// エンジン層 - バッチ処理のオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod batch_runner;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_batch_runner, resize_files_quiet, resize_files_with_progress,
    resize_files_with_runner,
};
pub use batch_runner::{run_batch, run_batch_with_cancel, BatchRunner};
