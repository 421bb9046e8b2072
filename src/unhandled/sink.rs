//! 診断メッセージの出力先（シンク）

use std::sync::Mutex;

use log::{error, warn};

/// 診断メッセージのレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// 診断メッセージの出力先の特性
///
/// 呼び出し側がテストで発行内容を検証できるよう、
/// 出力はこのトレイト越しに行われる。
pub trait DiagnosticSink: Send + Sync {
    /// 警告レベルの診断を発行
    fn warning(&self, message: &str);

    /// エラーレベルの診断を発行
    fn error(&self, message: &str);
}

/// logクレートへ転送するデフォルトシンク
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// 発行された診断をメモリに蓄積するシンク（テスト・検証用）
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl MemorySink {
    /// 新しいMemorySinkを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 蓄積された全レコードを取得
    pub fn records(&self) -> Vec<(DiagnosticLevel, String)> {
        self.records.lock().unwrap().clone()
    }

    /// 警告レベルのメッセージのみを取得
    pub fn warnings(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == DiagnosticLevel::Warning)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// エラーレベルのメッセージのみを取得
    pub fn errors(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == DiagnosticLevel::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// 何も発行されていないかどうか
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn warning(&self, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((DiagnosticLevel::Warning, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((DiagnosticLevel::Error, message.to_string()));
    }
}
