use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(req).await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok_without_upstream() {
    assert_eq!(status_of(api_routes(None), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn api_is_not_routed_without_upstream() {
    assert_eq!(status_of(api_routes(None), "/api/assets").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_is_routed_to_proxy_when_upstream_is_set() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let router = api_routes(Some(Upstream::new(&format!("http://{addr}"))));

    assert_eq!(status_of(router.clone(), "/api/assets").await, StatusCode::BAD_GATEWAY);
    assert_eq!(status_of(router, "/healthz").await, StatusCode::OK);
}
