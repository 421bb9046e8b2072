//! 共通型定義（HTTPメソッド、未処理リクエスト）

use std::fmt;

use http::Uri;

use crate::error::Error;

pub mod utils;

/// HTTPメソッド
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::POST => write!(f, "POST"),
            Method::PUT => write!(f, "PUT"),
            Method::DELETE => write!(f, "DELETE"),
            Method::PATCH => write!(f, "PATCH"),
            Method::HEAD => write!(f, "HEAD"),
            Method::OPTIONS => write!(f, "OPTIONS"),
        }
    }
}

impl Method {
    /// 文字列からMethodに変換
    pub fn from_str(method: &str) -> Option<Self> {
        match method.to_uppercase().as_str() {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "PATCH" => Some(Method::PATCH),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            _ => None,
        }
    }
}

/// どのハンドラにもマッチしなかったリクエスト
///
/// 解決処理の間は不変。メソッドと絶対URLのみを保持する
/// （ボディやヘッダーは診断に不要なため持たない）。
#[derive(Debug, Clone)]
pub struct UnmatchedRequest {
    /// HTTPメソッド
    pub method: Method,
    /// 絶対URL（scheme・host必須）
    uri: Uri,
}

impl UnmatchedRequest {
    /// 新しいUnmatchedRequestを作成
    ///
    /// URLはscheme+hostを持つ絶対URLでなければならない。
    pub fn new(method: Method, url: &str) -> Result<Self, Error> {
        let uri: Uri = url
            .parse()
            .map_err(|e| Error::InvalidRequestUrl(format!("{}: {}", url, e)))?;

        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::InvalidRequestUrl(format!(
                "expected an absolute URL, got: {}",
                url
            )));
        }

        Ok(Self { method, uri })
    }

    /// リクエストのオリジン（scheme + authority）を取得
    pub fn origin(&self) -> String {
        // new()で検証済みのため常に両方が存在する
        let scheme = self.uri.scheme_str().unwrap_or("http");
        let authority = self.uri.authority().map(|a| a.as_str()).unwrap_or("");
        format!("{}://{}", scheme, authority)
    }

    /// パス部分を取得
    pub fn pathname(&self) -> &str {
        self.uri.path()
    }

    /// 絶対URL全体を文字列で取得
    pub fn url(&self) -> String {
        self.uri.to_string()
    }
}

impl fmt::Display for UnmatchedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.uri)
    }
}
