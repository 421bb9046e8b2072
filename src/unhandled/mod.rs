//! 未処理リクエストの解決エンジン（分割モジュール）
//!
//! どの登録ハンドラにもマッチしなかったリクエストに対して、
//! サイレントに通す・警告する・エラーで中断する・ユーザー定義
//! ロジックに委譲する、のいずれかを決定する。診断時には登録
//! ハンドラ集合から「Did you mean」候補を計算する。

pub mod format;
pub mod sink;
pub mod strategy;
pub mod suggest;

pub use format::format_unhandled_request;
pub use sink::{DiagnosticLevel, DiagnosticSink, LogSink, MemorySink};
pub use strategy::{
    on_unhandled_request, AsyncCallbackFn, CallbackFn, PrintHandlers, UnhandledRequestCallback,
    UnhandledRequestStrategy,
};
pub use suggest::{suggest, Suggestion, MAX_SUGGESTION_COUNT};
