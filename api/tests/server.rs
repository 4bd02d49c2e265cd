use region_status::{config::Settings, errors::ServerError, metrics::HttpMetrics, serve};
use std::{collections::HashMap, sync::Arc};
use tokio::net::TcpListener;

fn settings_with_port(port: &str) -> Settings {
    let env = HashMap::from([("PORT".to_string(), port.to_string())]);
    Settings::new(Arc::new(env))
}

#[tokio::test]
async fn serve_fails_when_port_is_taken() {
    let held = TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = held.local_addr().unwrap().port().to_string();

    let result = serve(settings_with_port(&port), HttpMetrics::new().unwrap()).await;

    match result {
        Err(ServerError::Bind { addr, source }) => {
            assert_eq!(addr, format!("0.0.0.0:{port}"));
            assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
        }
        other => panic!("expected bind error, got {other:?}"),
    }
}

#[tokio::test]
async fn serve_fails_on_unusable_port_value() {
    let result = serve(settings_with_port("not-a-port"), HttpMetrics::new().unwrap()).await;

    assert!(matches!(result, Err(ServerError::Bind { .. })));
}
