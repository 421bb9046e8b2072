//! 登録ハンドラの中核定義

use super::spec::{MethodSpec, PathSpec};

/// 登録済みリクエストハンドラの特性
///
/// 解決エンジンは宣言されたメソッド・パスの読み取りのみを行う。
/// マッチング述語やレスポンス解決はインターセプト層の責務であり、
/// このトレイトには含めない。
pub trait RequestHandler: Send + Sync {
    /// 宣言されたHTTPメソッド指定を取得
    fn method_spec(&self) -> &MethodSpec;

    /// 宣言されたパス指定を取得
    fn path_spec(&self) -> &PathSpec;
}

/// RESTハンドラ（メソッド指定とパス指定の組）
pub struct RestHandler {
    /// HTTPメソッド指定
    pub method: MethodSpec,
    /// パス指定
    pub path: PathSpec,
}

impl RestHandler {
    /// 新しいRestHandlerを作成
    pub fn new(method: impl Into<MethodSpec>, path: PathSpec) -> Self {
        Self {
            method: method.into(),
            path,
        }
    }
}

impl RequestHandler for RestHandler {
    fn method_spec(&self) -> &MethodSpec {
        &self.method
    }

    fn path_spec(&self) -> &PathSpec {
        &self.path
    }
}
