use tokio::{net::TcpListener, sync::oneshot};

use keycloak_authz_quickstart::{routes::public::GREETING, server::serve};

#[tokio::test]
async fn serves_greeting_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(listener, async {
        let _ = stop_rx.await;
    }));

    let res = reqwest::get(format!("http://{addr}/api/public?foo=bar"))
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
    assert_eq!(res.text().await.unwrap(), GREETING);

    stop_tx.send(()).unwrap();
    server
        .await
        .expect("server task should not panic")
        .expect("server should stop cleanly");
}
