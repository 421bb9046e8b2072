//! 共通ユーティリティ関数群（環境設定 等）

use std::env;

use log::warn;

use crate::unhandled::UnhandledRequestStrategy;

/// 未処理リクエストに対するデフォルト戦略を取得する
/// 優先順位: 環境変数 `MOCKBRIDGE_ON_UNHANDLED_REQUEST` -> デフォルト "warn"
///
/// 環境変数が未知の値の場合は警告を出して"warn"にフォールバックする
/// （明示的なパースには `UnhandledRequestStrategy::from_str` を使用すること）。
pub fn default_strategy() -> UnhandledRequestStrategy {
    match env::var("MOCKBRIDGE_ON_UNHANDLED_REQUEST") {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown strategy '{}' in MOCKBRIDGE_ON_UNHANDLED_REQUEST, falling back to 'warn'",
                value
            );
            UnhandledRequestStrategy::Warn
        }),
        Err(_) => UnhandledRequestStrategy::Warn,
    }
}
