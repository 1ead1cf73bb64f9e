use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use colored::Colorize;

use crate::application::Logger;

/// Emits one access line per completed request.
///
/// Install with `axum::middleware::from_fn_with_state(logger, access_log)`;
/// the state binds the shared [`Logger`] the line goes through. Severity
/// follows the response status: 5xx logs as an error, 4xx as a warning,
/// everything else as info. Client IP (when the server is driven with
/// `into_make_service_with_connect_info`) and `User-Agent` fall back to "-".
/// A panicking handler unwinds through unchanged and produces no line.
pub async fn access_log(
    State(logger): State<Arc<Logger>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    let line = format!(
        "{} {} - {} ({}ms) {} \"{}\"",
        method.as_str().bold(),
        path,
        status.as_u16().to_string().bold(),
        duration.as_millis(),
        client_ip,
        user_agent,
    );

    if status.is_server_error() {
        logger.error(&line, &[]);
    } else if status.is_client_error() {
        logger.warn(&line, &[]);
    } else {
        logger.info(&line, &[]);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::AssertUnwindSafe;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use futures::FutureExt;
    use tower::ServiceExt;

    use crate::application::{Logger, LoggerConfig};
    use crate::infrastructure::InMemorySink;

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_millis(30)).await;
        "done"
    }

    async fn panicking() -> &'static str {
        panic!("handler exploded")
    }

    fn test_app() -> (Router, Arc<InMemorySink>) {
        colored::control::set_override(false);
        let sink = Arc::new(InMemorySink::new());
        let logger = Arc::new(Logger::with_sink(LoggerConfig::default(), sink.clone()));
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/unavailable", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/slow", get(slow))
            .route("/panicking", get(panicking))
            .layer(middleware::from_fn_with_state(logger, access_log));
        (app, sink)
    }

    async fn fetch(app: Router, uri: &str) -> StatusCode {
        let response = app
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_success_logs_info() {
        let (app, sink) = test_app();
        assert_eq!(fetch(app, "/ok").await, StatusCode::OK);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[INFO]"));
        assert!(lines[0].contains("GET /ok - 200"));
    }

    #[tokio::test]
    async fn test_client_error_logs_warn() {
        let (app, sink) = test_app();
        assert_eq!(fetch(app, "/missing").await, StatusCode::NOT_FOUND);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN]"));
        assert!(lines[0].contains("404"));
    }

    #[tokio::test]
    async fn test_server_error_logs_error() {
        let (app, sink) = test_app();
        assert_eq!(fetch(app, "/broken").await, StatusCode::INTERNAL_SERVER_ERROR);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR]"));
        assert!(lines[0].contains("500"));
    }

    #[tokio::test]
    async fn test_unavailable_logs_error() {
        let (app, sink) = test_app();
        assert_eq!(fetch(app, "/unavailable").await, StatusCode::SERVICE_UNAVAILABLE);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR]"));
        assert!(lines[0].contains("503"));
    }

    #[tokio::test]
    async fn test_duration_reflects_handler_time() {
        let (app, sink) = test_app();
        fetch(app, "/slow").await;

        let lines = sink.lines();
        let millis: u128 = lines[0]
            .split_once('(')
            .unwrap()
            .1
            .split_once("ms)")
            .unwrap()
            .0
            .parse()
            .unwrap();
        assert!(millis >= 30);
        assert!(millis < 1000);
    }

    #[tokio::test]
    async fn test_missing_context_renders_placeholders() {
        let (app, sink) = test_app();
        fetch(app, "/ok").await;

        let lines = sink.lines();
        assert!(lines[0].ends_with(r#"- "-""#));
    }

    #[tokio::test]
    async fn test_client_ip_and_user_agent_are_logged() {
        let (app, sink) = test_app();
        let mut request = HttpRequest::builder()
            .uri("/ok")
            .header(header::USER_AGENT, "smoke-test/1.0")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4242))));
        app.oneshot(request).await.unwrap();

        let lines = sink.lines();
        assert!(lines[0].contains("127.0.0.1"));
        assert!(lines[0].contains("\"smoke-test/1.0\""));
    }

    #[tokio::test]
    async fn test_panic_propagates_and_writes_nothing() {
        let (app, sink) = test_app();
        let request = HttpRequest::builder()
            .uri("/panicking")
            .body(Body::empty())
            .unwrap();

        let result = AssertUnwindSafe(app.oneshot(request)).catch_unwind().await;

        assert!(result.is_err());
        assert!(sink.lines().is_empty());
    }
}
