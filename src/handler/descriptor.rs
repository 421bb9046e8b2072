//! ハンドラの表示用ビュー（ディスクリプタ）の導出

use http::Uri;

use super::core::RequestHandler;
use super::spec::{MethodSpec, PathSpec};
use crate::common::UnmatchedRequest;

/// 登録ハンドラひとつ分の表示・ランキング用ビュー
///
/// 解決呼び出しのたびに新規に導出され、永続化されない。
pub struct HandlerDescriptor<'a> {
    /// 宣言されたメソッド指定
    pub method: &'a MethodSpec,
    /// 宣言されたパス指定
    pub path: &'a PathSpec,
    /// 導出されたオリジン（scheme + authority）
    pub origin: String,
}

/// ハンドラからディスクリプタを導出する
///
/// オリジンは、リテラルパスが絶対URLであればそのscheme+authority、
/// そうでなければ評価中のリクエストのオリジンを継承する
/// （相対パスのハンドラは同一オリジンとみなす規約）。
/// ネットワークアクセスもマッチング処理も行わない純粋な射影。
pub fn describe<'a>(
    handler: &'a dyn RequestHandler,
    request: &UnmatchedRequest,
) -> HandlerDescriptor<'a> {
    let path = handler.path_spec();
    let origin = match path {
        PathSpec::Literal(literal) => {
            literal_origin(literal).unwrap_or_else(|| request.origin())
        }
        // パターンパスは絶対URLを表現できないため常にリクエストのオリジン
        PathSpec::Pattern(_) => request.origin(),
    };

    HandlerDescriptor {
        method: handler.method_spec(),
        path,
        origin,
    }
}

/// リテラルパスが絶対URLであればそのオリジンを返す
fn literal_origin(path: &str) -> Option<String> {
    let uri: Uri = path.parse().ok()?;
    match (uri.scheme_str(), uri.authority()) {
        (Some(scheme), Some(authority)) => Some(format!("{}://{}", scheme, authority)),
        _ => None,
    }
}

/// リテラルパスのパス名部分を返す（絶対URLならパス部分のみ）
pub fn literal_pathname(path: &str) -> String {
    match path.parse::<Uri>() {
        Ok(uri) if uri.scheme().is_some() && uri.authority().is_some() => {
            uri.path().to_string()
        }
        _ => path.to_string(),
    }
}
