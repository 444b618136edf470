use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn router_builds_with_default_options() {
    let _router = with_options(LeptosOptions::builder().output_name("prepify").build());
}
