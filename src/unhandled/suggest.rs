//! 「Did you mean」候補の抽出とランキング

use log::debug;

use crate::common::UnmatchedRequest;
use crate::handler::descriptor::literal_pathname;
use crate::handler::{describe, MethodSpec, PathSpec, RequestHandler};

/// 表示する候補数の上限
pub const MAX_SUGGESTION_COUNT: usize = 4;

/// 整形待ちの候補（メソッドと宣言パスの組）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// 表示用メソッド
    pub method: String,
    /// ハンドラに宣言されたままのパス（正規化しない）
    pub path: String,
}

/// 未処理リクエストに類似する登録ハンドラを抽出する
///
/// 候補となる条件:
/// - メソッドとパスが共にリテラルであること
///   （パターンは具体的な提案文字列として描画できないため除外）
/// - 導出オリジンがリクエストのオリジンと一致すること
///
/// 残った候補はパス名同士の編集距離（レーベンシュタイン距離）の
/// 昇順で安定ソートされる。距離が同じ場合は登録順を維持する。
/// メソッドは距離計算に含めない（表示のみ）。
pub fn suggest(
    request: &UnmatchedRequest,
    handlers: &[Box<dyn RequestHandler>],
) -> Vec<Suggestion> {
    let request_origin = request.origin();
    let request_pathname = request.pathname();

    let mut candidates: Vec<(usize, Suggestion)> = Vec::new();

    for handler in handlers {
        let descriptor = describe(handler.as_ref(), request);

        // パターン指定のハンドラは候補にならない
        let (method, path) = match (descriptor.method, descriptor.path) {
            (MethodSpec::Exact(method), PathSpec::Literal(path)) => (method, path),
            _ => continue,
        };

        // 別オリジンへの提案は実行可能な修正にならないため除外
        if descriptor.origin != request_origin {
            continue;
        }

        let distance = strsim::levenshtein(&literal_pathname(path), request_pathname);
        candidates.push((
            distance,
            Suggestion {
                method: method.to_string(),
                path: path.clone(),
            },
        ));
    }

    // 安定ソート: 同距離の候補は登録順を維持する
    candidates.sort_by_key(|(distance, _)| *distance);
    candidates.truncate(MAX_SUGGESTION_COUNT);

    debug!(
        "Computed {} suggestion(s) for unmatched request: {}",
        candidates.len(),
        request
    );

    candidates
        .into_iter()
        .map(|(_, suggestion)| suggestion)
        .collect()
}
