//! Error containment through the tower service adapter.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use std::io;
use tower::ServiceExt;
use zscanner_server::http::{handler_fn, Context, ContainedService};
use zscanner_server::runtime::{sleep, time};
use zscanner_server::util::{max, normalize_string};

mod common;

use common::RecordingLogger;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_failing_handler_returns_500() {
    let logger = RecordingLogger::default();
    let service = ContainedService::new(
        logger.clone(),
        handler_fn(|_ctx: &mut Context| {
            Box::pin(async move {
                Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "folder 17 not found"))
            })
        }),
    );

    let request = Request::builder()
        .method("GET")
        .uri("/api-zscanner/v3/folders/17?x=1")
        .body(Body::empty())
        .unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error: folder 17 not found");

    let records = logger.records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].message,
        "Error folder 17 not found processing GET /api-zscanner/v3/folders/17?x=1"
    );
    assert_eq!(records[0].metadata["error"], "folder 17 not found");
}

#[tokio::test]
async fn test_failure_discards_partial_body() {
    let logger = RecordingLogger::default();
    let service = ContainedService::new(
        logger.clone(),
        handler_fn(|ctx: &mut Context| {
            Box::pin(async move {
                ctx.response.body = Some(Bytes::from_static(b"{\"partial\":true}"));
                Err::<(), _>(io::Error::new(io::ErrorKind::Other, "storage down"))
            })
        }),
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api-zscanner/documents")
        .body(Body::empty())
        .unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error: storage down");

    let records = logger.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].metadata["error"], "storage down");
    assert!(records[0].metadata["debug"].as_str().unwrap().contains("storage down"));
}

#[tokio::test]
async fn test_successful_handler_is_untouched() {
    let logger = RecordingLogger::default();
    let service = ContainedService::new(
        logger.clone(),
        handler_fn(|ctx: &mut Context| {
            Box::pin(async move {
                ctx.response.status = 201;
                ctx.response.body = Some(ctx.body.clone());
                Ok::<_, io::Error>(())
            })
        }),
    );
    let app = Router::new().route_service("/api-zscanner/documents", service);

    let request = Request::builder()
        .method("POST")
        .uri("/api-zscanner/documents")
        .body(Body::from("{\"name\":\"scan\"}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_text(response).await, "{\"name\":\"scan\"}");
    assert!(logger.records().is_empty());
}

#[tokio::test]
async fn test_oversized_body_is_contained() {
    let logger = RecordingLogger::default();
    let service = ContainedService::new(
        logger.clone(),
        handler_fn(|_ctx: &mut Context| Box::pin(async move { Ok::<_, io::Error>(()) })),
    )
    .with_body_limit(4);

    let request = Request::builder()
        .method("PUT")
        .uri("/upload")
        .body(Body::from(Bytes::from_static(b"too large")))
        .unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.starts_with("Error: "));

    let records = logger.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].message.ends_with("processing PUT /upload"));
}

#[tokio::test]
async fn test_handler_using_runtime_helpers() {
    let logger = RecordingLogger::default();
    let service = ContainedService::new(
        logger.clone(),
        handler_fn(|ctx: &mut Context| {
            Box::pin(async move {
                let query = normalize_string(std::str::from_utf8(&ctx.body).ok());
                let folders = ["Čížek  Jan", "Novák Petr", "CIZEK JANA"];

                let (best, elapsed_ms) = time(|| async {
                    sleep(5).await;
                    let mut best = 0;
                    for folder in folders {
                        let name = normalize_string(folder);
                        let score = name.split(' ').filter(|w| query.contains(w)).count();
                        best = max(best, score);
                    }
                    Ok::<_, io::Error>(best)
                })
                .await?;

                assert!(elapsed_ms >= 5.0);
                ctx.response.message = format!("matched {} words", best);
                Ok::<_, io::Error>(())
            })
        }),
    );

    let request = Request::builder()
        .method("POST")
        .uri("/search")
        .body(Body::from("  cizek   JAN "))
        .unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "matched 2 words");
    assert!(logger.records().is_empty());
}

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let logger = RecordingLogger::default();
    let service = ContainedService::new(
        logger.clone(),
        handler_fn(|ctx: &mut Context| {
            Box::pin(async move {
                if ctx.url.ends_with("/fail") {
                    return Err(io::Error::new(io::ErrorKind::Other, "storage unavailable"));
                }
                ctx.response.message = "ok".into();
                Ok(())
            })
        }),
    );
    let app = Router::new()
        .route_service("/api-zscanner/fail", service.clone())
        .route_service("/api-zscanner/ok", service);
    let addr = common::start_server(app).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{}/api-zscanner/ok", addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = client
        .get(format!("http://{}/api-zscanner/fail", addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 500);
    assert_eq!(res.text().await.unwrap(), "Error: storage unavailable");

    let records = logger.records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].message,
        "Error storage unavailable processing GET /api-zscanner/fail"
    );
}
