use network_adapter::HostFetch;
use request_easy_service::api::NetworkAdapter;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url_for(server: &MockServer, p: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), p)).unwrap()
}

#[tokio::test]
async fn returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .and(header("user-agent", "test-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .expect(1)
        .mount(&server)
        .await;

    let fetch = HostFetch::new(None, "test-agent").unwrap();
    let resp = fetch.get(&url_for(&server, "/answer")).await.unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body.as_deref(), Some(&b"42"[..]));
}

#[tokio::test]
async fn empty_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let fetch = HostFetch::new(None, "test-agent").unwrap();
    let resp = fetch.get(&url_for(&server, "/empty")).await.unwrap();
    assert_eq!(resp.status, 204);
    assert!(resp.body.is_none());
}

#[tokio::test]
async fn error_status_is_not_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let fetch = HostFetch::new(None, "test-agent").unwrap();
    let resp = fetch.get(&url_for(&server, "/nope")).await.unwrap();
    assert_eq!(resp.status, 404);
    assert!(!resp.is_success());
}

#[tokio::test]
async fn timeout_surfaces_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let fetch = HostFetch::new(Some(Duration::from_millis(100)), "test-agent").unwrap();
    assert!(fetch.get(&url_for(&server, "/slow")).await.is_err());
}
