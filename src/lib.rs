//! MockBridge: 未処理リクエスト解決エンジン
//!
//! インターセプトされたリクエストが登録済みモックハンドラの
//! いずれにもマッチしなかった場合の振る舞い（バイパス・警告・
//! エラー・カスタムコールバック）を決定するためのライブラリ

pub mod common;
pub mod error;
pub mod handler;
pub mod unhandled;

pub use common::*;
pub use error::*;
pub use handler::{MethodSpec, PathSpec, RequestHandler, RestHandler};
pub use unhandled::*;

/// 登録ハンドラの集合を構築するためのビルダー
pub struct MockBridgeBuilder {
    handlers: Vec<Box<dyn handler::RequestHandler>>,
}

impl Default for MockBridgeBuilder {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl MockBridgeBuilder {
    /// 新しいMockBridgeBuilderインスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// ハンドラを追加
    ///
    /// 登録順はそのまま保持される。サジェストの同距離タイブレークは
    /// 登録順に依存するため、ここでソートしてはならない。
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: handler::RequestHandler + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// ハンドラ集合をビルドして返却
    pub fn build(self) -> MockBridge {
        MockBridge {
            handlers: self.handlers,
        }
    }
}

/// 登録ハンドラの集合
pub struct MockBridge {
    handlers: Vec<Box<dyn handler::RequestHandler>>,
}

impl MockBridge {
    /// 新しいMockBridgeBuilderインスタンスを作成
    pub fn builder() -> MockBridgeBuilder {
        MockBridgeBuilder::new()
    }

    /// 登録順のハンドラ一覧を取得
    pub fn handlers(&self) -> &[Box<dyn handler::RequestHandler>] {
        &self.handlers
    }

    /// 未処理リクエストを戦略に従って解決する
    pub async fn on_unhandled_request(
        &self,
        request: &common::UnmatchedRequest,
        strategy: &unhandled::UnhandledRequestStrategy,
        sink: &dyn unhandled::DiagnosticSink,
    ) -> Result<(), error::Error> {
        unhandled::on_unhandled_request(request, &self.handlers, strategy, sink).await
    }
}
