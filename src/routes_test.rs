use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn static_routes_build_for_missing_directories() {
    let dir = std::env::temp_dir().join("island-site-missing");
    let _router = static_routes(&dir, &dir.join("assets"));
}
