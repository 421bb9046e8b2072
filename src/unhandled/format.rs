//! 警告・エラー本文のテンプレート整形

use super::sink::DiagnosticLevel;
use super::suggest::Suggestion;
use crate::common::UnmatchedRequest;

/// 診断メッセージ共通の製品タグ
const PRODUCT_TAG: &str = "[MockBridge]";

/// フッターのドキュメントリンク
const DOCS_URL: &str = "https://mockbridge.dev/docs/getting-started";

/// 未処理リクエストの診断メッセージ本文を整形する
///
/// テンプレートは契約の一部であり、呼び出し側はテストで
/// 文字列全体に対してアサートしてよい。副作用なし。
pub fn format_unhandled_request(
    level: DiagnosticLevel,
    request: &UnmatchedRequest,
    suggestions: &[Suggestion],
) -> String {
    let label = match level {
        DiagnosticLevel::Warning => "Warning",
        DiagnosticLevel::Error => "Error",
    };

    let mut message = format!(
        "{} {}: captured a request without a matching request handler:\n\n  \u{2022} {} {}\n",
        PRODUCT_TAG,
        label,
        request.method,
        request.url()
    );

    if !suggestions.is_empty() {
        message.push_str("\nDid you mean to request one of the following resources instead?\n\n");
        for suggestion in suggestions {
            message.push_str(&format!(
                "  \u{2022} {} {}\n",
                suggestion.method, suggestion.path
            ));
        }
    }

    message.push_str(&format!(
        "\nIf you still wish to intercept this unhandled request, please create a request handler for it.\nRead more: {}",
        DOCS_URL
    ));

    message
}
