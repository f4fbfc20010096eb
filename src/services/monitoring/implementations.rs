// 進捗通知の具象実装

use crate::core::{ProgressEvent, ProgressSink};
use tokio::sync::mpsc;

/// コンソール出力による進捗通知実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressSink {
    quiet: bool,
}

impl ConsoleProgressSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// 1行分の表示文字列
    pub fn format_line(event: &ProgressEvent) -> String {
        format!(
            "📊 [{}/{}] ({:.0}%) 処理中: {}",
            event.current,
            event.total,
            event.percentage(),
            event.filename
        )
    }
}

impl ProgressSink for ConsoleProgressSink {
    fn report(&self, event: &ProgressEvent) {
        if !self.quiet {
            println!("{}", Self::format_line(event));
        }
    }
}

/// 何もしない進捗通知実装（テスト・バックグラウンド処理用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressSink;

impl NoOpProgressSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for NoOpProgressSink {
    fn report(&self, _event: &ProgressEvent) {
        // 何もしない
    }
}

/// チャンネル経由で呼び出し側へ即時に転送する進捗通知実装
///
/// 受信側が閉じられていても処理は継続する。
#[derive(Debug, Clone)]
pub struct ChannelProgressSink {
    sender: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelProgressSink {
    /// 送信側と受信側の組を作成
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn new(sender: mpsc::UnboundedSender<ProgressEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn report(&self, event: &ProgressEvent) {
        if self.sender.send(event.clone()).is_err() {
            tracing::debug!("progress receiver dropped; event {} discarded", event.current);
        }
    }
}
