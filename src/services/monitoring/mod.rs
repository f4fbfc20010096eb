// 進捗監視機能
// ファイル単位の進捗通知

pub mod implementations;

// 公開API
pub use implementations::{ChannelProgressSink, ConsoleProgressSink, NoOpProgressSink};
