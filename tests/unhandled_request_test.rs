//! インテグレーションテスト

#[cfg(test)]
mod tests {
    use mockbridge::{
        common::{Method, UnmatchedRequest},
        error::Error,
        handler,
        unhandled::{AsyncCallbackFn, MemorySink, UnhandledRequestStrategy},
        MockBridge,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[tokio::test]
    async fn test_end_to_end_warn_with_suggestions() {
        init_logger();

        // 登録順: /ap, /api, /api-1, /api-2, /api-3, /api-4
        let bridge = MockBridge::builder()
            .handler(handler::get("/ap"))
            .handler(handler::get("/api"))
            .handler(handler::get("/api-1"))
            .handler(handler::get("/api-2"))
            .handler(handler::get("/api-3"))
            .handler(handler::get("/api-4"))
            .build();

        assert_eq!(bridge.handlers().len(), 6);

        let request = UnmatchedRequest::new(Method::GET, "http://localhost/api").unwrap();
        let sink = MemorySink::new();

        bridge
            .on_unhandled_request(&request, &UnhandledRequestStrategy::Warn, &sink)
            .await
            .expect("warn strategy must not fail");

        // 距離昇順・同距離は登録順、上限4件
        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(
            "Did you mean to request one of the following resources instead?\n\n  \u{2022} GET /api\n  \u{2022} GET /ap\n  \u{2022} GET /api-1\n  \u{2022} GET /api-2\n"
        ));
        assert!(!warnings[0].contains("/api-3"));
        assert!(!warnings[0].contains("/api-4"));
    }

    #[tokio::test]
    async fn test_error_strategy_rejects_after_diagnostic() {
        init_logger();

        let bridge = MockBridge::builder().build();
        let request = UnmatchedRequest::new(Method::POST, "http://localhost/login").unwrap();
        let sink = MemorySink::new();

        let result = bridge
            .on_unhandled_request(&request, &UnhandledRequestStrategy::Error, &sink)
            .await;

        // 診断の発行は失敗の観測より先
        assert_eq!(sink.errors().len(), 1);
        assert!(sink.errors()[0].contains("\u{2022} POST http://localhost/login"));
        match result {
            Err(Error::CannotBypassRequest) => {}
            other => panic!("expected CannotBypassRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_async_custom_callback_through_bridge() {
        init_logger();

        let bridge = MockBridge::builder()
            .handler(handler::get("/users"))
            .build();
        let request = UnmatchedRequest::new(Method::GET, "http://localhost/user").unwrap();
        let sink = MemorySink::new();

        // 非同期コールバックから組み込みerrorデフォルトを呼び出す
        fn error_callback<'a>(
            _request: &'a UnmatchedRequest,
            print: &'a mockbridge::unhandled::PrintHandlers<'a>,
        ) -> futures::future::BoxFuture<'a, Result<(), Error>> {
            Box::pin(async move { Err(print.error()) })
        }
        let strategy = UnhandledRequestStrategy::custom(AsyncCallbackFn::new(error_callback));

        let result = bridge.on_unhandled_request(&request, &strategy, &sink).await;

        assert!(matches!(result, Err(Error::CannotBypassRequest)));
        assert_eq!(sink.errors().len(), 1);
        // サジェスト本文は組み込み戦略と同一
        assert!(sink.errors()[0].contains("\u{2022} GET /users"));
    }

    #[tokio::test]
    async fn test_concurrent_resolutions_are_independent() {
        init_logger();

        let bridge = std::sync::Arc::new(
            MockBridge::builder().handler(handler::get("/api")).build(),
        );

        let mut tasks = Vec::new();
        for i in 0..8 {
            let bridge = std::sync::Arc::clone(&bridge);
            tasks.push(tokio::spawn(async move {
                let url = format!("http://localhost/api-{}", i);
                let request = UnmatchedRequest::new(Method::GET, &url).unwrap();
                let sink = MemorySink::new();
                bridge
                    .on_unhandled_request(&request, &UnhandledRequestStrategy::Warn, &sink)
                    .await
                    .unwrap();
                sink.warnings().len()
            }));
        }

        for task in tasks {
            assert_eq!(task.await.unwrap(), 1);
        }
    }

    #[tokio::test]
    async fn test_unknown_strategy_from_configuration() {
        init_logger();

        let result = "ignore".parse::<UnhandledRequestStrategy>();

        match result {
            Err(Error::UnknownStrategy(value)) => assert_eq!(value, "ignore"),
            other => panic!("expected UnknownStrategy, got {:?}", other),
        }
    }
}
