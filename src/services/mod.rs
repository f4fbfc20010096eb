// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod persistence;
pub mod processing;
pub mod resolver;
pub mod transform;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{load_options_file, validate_options};
pub use monitoring::{ChannelProgressSink, ConsoleProgressSink, NoOpProgressSink};
pub use persistence::{write_report, BatchReport};
pub use processing::{attempt_single_file, process_single_file};
pub use resolver::{resolve, resolve_output_format, resolve_output_path, resolve_quality};
pub use transform::{ImageCrateTransformer, OutputFormat};
