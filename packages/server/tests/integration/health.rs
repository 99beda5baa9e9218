use crate::common::{TestApp, routes};

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HEALTH).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    let paths = &res.body["paths"];
    for path in ["/animal-types", "/pets", "/pets/{id}", "/health"] {
        assert!(paths.get(path).is_some(), "missing path {path}");
    }
    assert!(paths["/pets/{id}"].get("put").is_some());
    assert!(paths["/pets/{id}"].get("delete").is_some());
}
