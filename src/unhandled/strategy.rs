//! 未処理リクエスト戦略の解決

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use futures::future::BoxFuture;
use log::debug;

use super::format::format_unhandled_request;
use super::sink::{DiagnosticLevel, DiagnosticSink};
use super::suggest::{suggest, Suggestion};
use crate::common::UnmatchedRequest;
use crate::error::Error;
use crate::handler::RequestHandler;

/// カスタムコールバックに公開されるデフォルトアクション
///
/// 警告・エラー本文は構築時に計算済みのため、コールバックから
/// 呼び出しても組み込み戦略とバイト単位で同一の出力になる。
pub struct PrintHandlers<'a> {
    warning_text: String,
    error_text: String,
    sink: &'a dyn DiagnosticSink,
    error_invoked: AtomicBool,
}

impl<'a> PrintHandlers<'a> {
    fn new(
        request: &UnmatchedRequest,
        suggestions: &[Suggestion],
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            warning_text: format_unhandled_request(DiagnosticLevel::Warning, request, suggestions),
            error_text: format_unhandled_request(DiagnosticLevel::Error, request, suggestions),
            sink,
            error_invoked: AtomicBool::new(false),
        }
    }

    /// 組み込み`warn`戦略と同一の警告診断を発行する
    pub fn warning(&self) {
        self.sink.warning(&self.warning_text);
    }

    /// 組み込み`error`戦略と同一のエラー診断を発行し、
    /// 呼び出し側が返すべきエラーを生成する
    ///
    /// 診断の発行は必ずエラー返却に先行する。一度でも呼び出されると、
    /// コールバックが戻り値を伝播しなくても解決全体が失敗になる。
    pub fn error(&self) -> Error {
        self.sink.error(&self.error_text);
        self.error_invoked.store(true, Ordering::SeqCst);
        Error::CannotBypassRequest
    }

    /// `error()`が一度でも呼び出されたかどうか
    fn error_was_invoked(&self) -> bool {
        self.error_invoked.load(Ordering::SeqCst)
    }
}

/// カスタム戦略として呼び出されるコールバックの特性
///
/// `print.error()`を呼び出すと、戻り値の伝播の有無にかかわらず
/// 組み込み`error`戦略と同一の失敗になる。`error()`を呼ばずに
/// `Ok(())`を返すとリクエストはサイレントにバイパスされる。
/// コールバック内のエラーはラップせずそのまま伝播する。
#[async_trait]
pub trait UnhandledRequestCallback: Send + Sync {
    async fn call(
        &self,
        request: &UnmatchedRequest,
        print: &PrintHandlers<'_>,
    ) -> Result<(), Error>;
}

/// 同期クロージャをコールバックとして使うためのアダプタ
pub struct CallbackFn<F>
where
    F: Fn(&UnmatchedRequest, &PrintHandlers<'_>) -> Result<(), Error> + Send + Sync + 'static,
{
    callback_fn: F,
}

impl<F> CallbackFn<F>
where
    F: Fn(&UnmatchedRequest, &PrintHandlers<'_>) -> Result<(), Error> + Send + Sync + 'static,
{
    /// 新しいCallbackFnを作成
    pub fn new(callback_fn: F) -> Self {
        Self { callback_fn }
    }
}

#[async_trait]
impl<F> UnhandledRequestCallback for CallbackFn<F>
where
    F: Fn(&UnmatchedRequest, &PrintHandlers<'_>) -> Result<(), Error> + Send + Sync + 'static,
{
    async fn call(
        &self,
        request: &UnmatchedRequest,
        print: &PrintHandlers<'_>,
    ) -> Result<(), Error> {
        (self.callback_fn)(request, print)
    }
}

/// 非同期クロージャをコールバックとして使うためのアダプタ
pub struct AsyncCallbackFn<F>
where
    F: for<'a> Fn(&'a UnmatchedRequest, &'a PrintHandlers<'a>) -> BoxFuture<'a, Result<(), Error>>
        + Send
        + Sync
        + 'static,
{
    callback_fn: F,
}

impl<F> AsyncCallbackFn<F>
where
    F: for<'a> Fn(&'a UnmatchedRequest, &'a PrintHandlers<'a>) -> BoxFuture<'a, Result<(), Error>>
        + Send
        + Sync
        + 'static,
{
    /// 新しいAsyncCallbackFnを作成
    pub fn new(callback_fn: F) -> Self {
        Self { callback_fn }
    }
}

#[async_trait]
impl<F> UnhandledRequestCallback for AsyncCallbackFn<F>
where
    F: for<'a> Fn(&'a UnmatchedRequest, &'a PrintHandlers<'a>) -> BoxFuture<'a, Result<(), Error>>
        + Send
        + Sync
        + 'static,
{
    async fn call(
        &self,
        request: &UnmatchedRequest,
        print: &PrintHandlers<'_>,
    ) -> Result<(), Error> {
        (self.callback_fn)(request, print).await
    }
}

/// 未処理リクエストへの対応戦略
///
/// 組み込みの3種に加え、エスケープハッチとしてカスタム
/// コールバックを取れる閉じた集合。文字列設定からの変換は
/// `FromStr`で行い、未知の値は`Error::UnknownStrategy`になる。
pub enum UnhandledRequestStrategy {
    /// 診断を出さずにそのまま通す
    Bypass,
    /// 警告を発行した上で通す
    Warn,
    /// エラー診断を発行してリクエストを失敗させる
    Error,
    /// ユーザー定義コールバックに委譲
    Custom(Box<dyn UnhandledRequestCallback>),
}

impl UnhandledRequestStrategy {
    /// コールバックからカスタム戦略を作成
    pub fn custom<C>(callback: C) -> Self
    where
        C: UnhandledRequestCallback + 'static,
    {
        UnhandledRequestStrategy::Custom(Box::new(callback))
    }
}

impl fmt::Debug for UnhandledRequestStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnhandledRequestStrategy::Bypass => write!(f, "Bypass"),
            UnhandledRequestStrategy::Warn => write!(f, "Warn"),
            UnhandledRequestStrategy::Error => write!(f, "Error"),
            UnhandledRequestStrategy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl FromStr for UnhandledRequestStrategy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "bypass" => Ok(UnhandledRequestStrategy::Bypass),
            "warn" => Ok(UnhandledRequestStrategy::Warn),
            "error" => Ok(UnhandledRequestStrategy::Error),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// 未処理リクエストを戦略に従って解決する
///
/// 呼び出しごとに独立した一回限りの評価であり、状態は持たない。
/// サスペンドするのはカスタムコールバックのawaitのみ。
/// 診断の発行は、同一呼び出しの正常終了または失敗よりも
/// 必ず先に観測される。
pub async fn on_unhandled_request(
    request: &UnmatchedRequest,
    handlers: &[Box<dyn RequestHandler>],
    strategy: &UnhandledRequestStrategy,
    sink: &dyn DiagnosticSink,
) -> Result<(), Error> {
    let suggestions = suggest(request, handlers);
    let print = PrintHandlers::new(request, &suggestions, sink);

    debug!(
        "Resolving unmatched request with {:?} strategy: {}",
        strategy, request
    );

    match strategy {
        UnhandledRequestStrategy::Bypass => Ok(()),
        UnhandledRequestStrategy::Warn => {
            print.warning();
            Ok(())
        }
        UnhandledRequestStrategy::Error => Err(print.error()),
        UnhandledRequestStrategy::Custom(callback) => {
            callback.call(request, &print).await?;
            // error()が呼び出された場合、コールバックが戻り値を
            // 伝播しなくても組み込みerror戦略と同一に失敗させる
            if print.error_was_invoked() {
                return Err(Error::CannotBypassRequest);
            }
            Ok(())
        }
    }
}
