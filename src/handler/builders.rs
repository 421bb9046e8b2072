//! ハンドラ構築用のヘルパー関数群

use super::core::RestHandler;
use super::spec::{MethodSpec, PathSpec};
use crate::common::Method;
use crate::error::Error;

/// GETハンドラを作成
pub fn get(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::GET, PathSpec::literal(path))
}

/// POSTハンドラを作成
pub fn post(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::POST, PathSpec::literal(path))
}

/// PUTハンドラを作成
pub fn put(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::PUT, PathSpec::literal(path))
}

/// DELETEハンドラを作成
pub fn delete(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::DELETE, PathSpec::literal(path))
}

/// PATCHハンドラを作成
pub fn patch(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::PATCH, PathSpec::literal(path))
}

/// HEADハンドラを作成
pub fn head(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::HEAD, PathSpec::literal(path))
}

/// OPTIONSハンドラを作成
pub fn options(path: impl Into<String>) -> RestHandler {
    RestHandler::new(Method::OPTIONS, PathSpec::literal(path))
}

/// パスを正規表現で指定するハンドラを作成
pub fn path_pattern(method: Method, pattern: &str) -> Result<RestHandler, Error> {
    Ok(RestHandler::new(method, PathSpec::pattern_str(pattern)?))
}

/// メソッドを正規表現で指定するハンドラを作成
pub fn method_pattern(pattern: &str, path: impl Into<String>) -> Result<RestHandler, Error> {
    Ok(RestHandler {
        method: MethodSpec::pattern_str(pattern)?,
        path: PathSpec::literal(path),
    })
}
