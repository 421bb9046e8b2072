//! エラー型の定義

use thiserror::Error;

/// ライブラリのエラー型
#[derive(Error, Debug)]
pub enum Error {
    /// `error`戦略が選択されている場合、リクエストのバイパスは許可されない
    #[error("Cannot bypass a request when using the \"error\" strategy for the \"onUnhandledRequest\" option.")]
    CannotBypassRequest,

    /// 未知の戦略値が指定された
    #[error("Failed to react to an unhandled request: unknown strategy \"{0}\". Please provide one of the supported strategies (\"bypass\", \"warn\", \"error\") or a custom callback function as the value of the \"onUnhandledRequest\" option.")]
    UnknownStrategy(String),

    /// 無効な正規表現パターン
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// 無効なリクエストURL（絶対URLが必要）
    #[error("Invalid request URL: {0}")]
    InvalidRequestUrl(String),

    /// カスタムコールバック内で発生したエラー
    #[error("Unhandled request callback failed: {0}")]
    Callback(String),
}
