//! End-to-end tests for the demo web application.

use std::sync::Arc;
use std::time::Duration;

use demo_webapp::config::AppConfig;
use demo_webapp::http::{AppState, HttpServer};
use demo_webapp::identity::ProcessIdentity;
use demo_webapp::lifecycle::Shutdown;
use demo_webapp::observability::metrics::{install_recorder, OPS_COUNTER_NAME};
use demo_webapp::ops::{OpsCounter, OpsRecorder};

/// Parse the value of the ops counter out of Prometheus exposition text.
fn scrape_ops_total(body: &str) -> Option<f64> {
    body.lines()
        .find(|line| line.starts_with(OPS_COUNTER_NAME) && !line.starts_with('#'))
        .and_then(|line| line.split_whitespace().last())
        .and_then(|value| value.parse().ok())
}

// The Prometheus recorder can only be installed once per process, so the
// whole scenario lives in a single test.
#[tokio::test]
async fn serves_pages_and_monotonic_metrics() {
    let mut config = AppConfig::default();
    config.ticker.interval_ms = 200;

    let metrics_handle = install_recorder().expect("install recorder");
    let counter = Arc::new(OpsCounter::new());
    let shutdown = Shutdown::new();

    let recorder = OpsRecorder::new(
        counter.clone(),
        Duration::from_millis(config.ticker.interval_ms),
    );
    let recorder_handle = tokio::spawn(recorder.run(shutdown.subscribe()));

    let state = AppState {
        identity: ProcessIdentity::generate().unwrap(),
        ops: counter.clone(),
        metrics: metrics_handle,
    };
    let server = HttpServer::new(&config, state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let base = format!("http://{}", addr);

    // The three pages return 200 with their exact literal bodies.
    for (path, body) in [
        ("/hello", "Hello this web application hello page"),
        ("/post", "hey this is post page"),
        ("/web", "Hello this is web page"),
    ] {
        let res = client
            .get(format!("{}{}", base, path))
            .header(
                "traceparent",
                "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01",
            )
            .send()
            .await
            .expect("server unreachable");
        assert_eq!(res.status(), 200, "{} status", path);
        assert_eq!(res.text().await.unwrap(), body, "{} body", path);
    }

    // Unknown paths are not served.
    let res = client.get(format!("{}/nope", base)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    // The metrics endpoint exposes the ops counter from the first scrape.
    let first = client
        .get(format!("{}/metrics", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let v1 = scrape_ops_total(&first).expect("ops counter missing from scrape");
    assert!(v1 >= 0.0);

    // The counter advances monotonically across scrapes spanning ticks.
    tokio::time::sleep(Duration::from_millis(700)).await;
    let second = client
        .get(format!("{}/metrics", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let v2 = scrape_ops_total(&second).expect("ops counter missing from scrape");
    assert!(v2 > v1, "counter did not advance: {} -> {}", v1, v2);

    // Orderly shutdown: the recorder stops within one tick and is joined.
    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(1), recorder_handle)
        .await
        .expect("recorder did not stop after shutdown")
        .unwrap();

    let frozen = counter.value();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(counter.value(), frozen, "counter advanced after shutdown");
}
