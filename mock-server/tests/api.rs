use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Foo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_foos_empty() {
    let resp = app().oneshot(empty_request("GET", "/foo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let foos: Vec<Foo> = body_json(resp).await;
    assert!(foos.is_empty());
}

// --- save ---

#[tokio::test]
async fn save_foo_returns_201_with_location_and_no_body() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/foo",
            r#"{"Id":1,"Name":"apple","Data":{"color":"red","type":"fruit"}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers()[http::header::LOCATION], "/foo/1");
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn save_foo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/foo", r#"{"Name":"no id"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_foo_not_found() {
    let resp = app().oneshot(empty_request("GET", "/foo/7")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_foo_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/foo/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_foo_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/foo/7")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- weather ---

#[tokio::test]
async fn weather_echoes_city() {
    let resp = app()
        .oneshot(empty_request("GET", "/api.php?city=Eau%20Claire"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let weather: serde_json::Value = body_json(resp).await;
    assert_eq!(weather["data"]["location"], "Eau Claire");
    assert_eq!(weather["apiVersion"], "1.0");
}

#[tokio::test]
async fn weather_without_city_returns_400() {
    for uri in ["/api.php", "/api.php?city=", "/api.php?city=%20%20"] {
        let resp = app().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two
    for body in [
        r#"{"Id":2,"Name":"pear","Data":null}"#,
        r#"{"Id":1,"Name":"apple","Data":{"type":"fruit"}}"#,
    ] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/foo", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // list, ordered by id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/foo"))
        .await
        .unwrap();
    let foos: Vec<Foo> = body_json(resp).await;
    assert_eq!(foos.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);

    // replace an existing record
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/foo", r#"{"Id":1,"Name":"green apple","Data":{}}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/foo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let foo: Foo = body_json(resp).await;
    assert_eq!(foo.name, "green apple");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/foo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/foo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
