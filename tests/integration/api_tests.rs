//! Genre page tests against the full router over the in-memory store

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use catalog_server::{
    api,
    config::{AppConfig, DeleteGuard},
    models::book::CreateBook,
    repository::{CatalogStore, MemoryCatalogStore},
    AppState,
};

fn test_app_with_guard(guard: DeleteGuard) -> (Router, Arc<MemoryCatalogStore>) {
    let store = Arc::new(MemoryCatalogStore::new());
    let mut config = AppConfig::default();
    config.catalog.delete_guard = guard;
    let app = api::router(AppState::new(&config, store.clone()));
    (app, store)
}

fn test_app() -> (Router, Arc<MemoryCatalogStore>) {
    test_app_with_guard(DeleteGuard::Genre)
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    app.clone().oneshot(request).await.expect("response")
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request");
    app.clone().oneshot(request).await.expect("response")
}

async fn body_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("location")
        .to_string()
}

/// Create a genre through the form and return its detail URL
async fn create_genre(app: &Router, name: &str) -> String {
    let response = post_form(app, "/catalog/genre/create", &format!("name={}", name)).await;
    assert!(response.status().is_redirection());
    location(&response)
}

fn id_from_url(url: &str) -> i32 {
    url.rsplit('/').next().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _store) = test_app();
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("healthy"));

    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_genre_list_is_sorted() {
    let (app, _store) = test_app();
    for name in ["Thriller", "Biography", "Mystery"] {
        create_genre(&app, name).await;
    }

    let response = get(&app, "/catalog/genres").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    let biography = html.find("Biography").unwrap();
    let mystery = html.find("Mystery").unwrap();
    let thriller = html.find("Thriller").unwrap();
    assert!(biography < mystery && mystery < thriller);
}

#[tokio::test]
async fn test_create_form_renders() {
    let (app, _store) = test_app();
    let response = get(&app, "/catalog/genre/create").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Create Genre"));
}

#[tokio::test]
async fn test_create_then_detail() {
    let (app, _store) = test_app();
    let url = create_genre(&app, "+++Fantasy+").await;
    assert!(url.starts_with("/catalog/genre/"));

    let response = get(&app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<h2 class="genre-name">Fantasy</h2>"#));
    assert!(html.contains("This genre has no books."));
}

#[tokio::test]
async fn test_create_empty_name_rerenders_form() {
    let (app, store) = test_app();
    let response = post_form(&app, "/catalog/genre/create", "name=").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Genre name required"));
    assert!(html.contains(r#"value="""#));
    assert_eq!(store.genre_count().await, 0);
}

#[tokio::test]
async fn test_create_duplicate_redirects_to_existing() {
    let (app, store) = test_app();
    let first = create_genre(&app, "Fantasy").await;
    let second = create_genre(&app, "Fantasy").await;
    assert_eq!(first, second);
    assert_eq!(store.genre_count().await, 1);
}

#[tokio::test]
async fn test_detail_unknown_genre_is_404() {
    let (app, _store) = test_app();
    let response = get(&app, "/catalog/genre/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Genre not found"));
}

#[tokio::test]
async fn test_detail_lists_books_of_genre() {
    let (app, store) = test_app();
    let url = create_genre(&app, "Fantasy").await;
    let id = id_from_url(&url);
    store
        .books_create(&CreateBook {
            title: "The Hobbit".to_string(),
            summary: Some("A hobbit goes on an adventure".to_string()),
            author_id: 1,
            genre_ids: vec![id],
        })
        .await
        .unwrap();

    let html = body_text(get(&app, &url).await).await;
    assert!(html.contains("The Hobbit"));
    assert!(html.contains("A hobbit goes on an adventure"));
}

#[tokio::test]
async fn test_update_keeps_id() {
    let (app, _store) = test_app();
    let url = create_genre(&app, "OldName").await;

    let response = get(&app, &format!("{}/update", url)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Update Genre"));
    assert!(html.contains(r#"value="OldName""#));

    let response = post_form(&app, &format!("{}/update", url), "name=NewName").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), url);

    let html = body_text(get(&app, &url).await).await;
    assert!(html.contains("NewName"));
}

#[tokio::test]
async fn test_update_empty_name_rerenders_form() {
    let (app, _store) = test_app();
    let url = create_genre(&app, "Poetry").await;

    let response = post_form(&app, &format!("{}/update", url), "name=%20%20").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Update Genre"));
    assert!(html.contains("Genre name required"));

    let html = body_text(get(&app, &url).await).await;
    assert!(html.contains("Poetry"));
}

#[tokio::test]
async fn test_update_unknown_genre_is_404() {
    let (app, _store) = test_app();
    let response = get(&app, "/catalog/genre/41/update").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(&app, "/catalog/genre/41/update", "name=Anything").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_page_for_unknown_genre_redirects() {
    let (app, _store) = test_app();
    let response = get(&app, "/catalog/genre/77/delete").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/catalog/genres");
}

#[tokio::test]
async fn test_delete_genre_without_books() {
    let (app, _store) = test_app();
    let url = create_genre(&app, "Fantasy").await;
    let id = id_from_url(&url);

    let response = get(&app, &format!("{}/delete", url)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Do you really want to delete this genre?"));

    let response = post_form(&app, &format!("{}/delete", url), &format!("genreid={}", id)).await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/catalog/genres");

    let response = get(&app, &url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_genre_with_books_is_refused() {
    let (app, store) = test_app();
    let url = create_genre(&app, "Fantasy").await;
    let id = id_from_url(&url);
    store
        .books_create(&CreateBook {
            title: "The Hobbit".to_string(),
            summary: None,
            author_id: 3,
            genre_ids: vec![id],
        })
        .await
        .unwrap();

    let response = post_form(&app, &format!("{}/delete", url), &format!("genreid={}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Delete the following books"));
    assert!(html.contains("The Hobbit"));

    let response = get(&app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_author_guard_ignores_books_of_genre() {
    let (app, store) = test_app_with_guard(DeleteGuard::Author);
    let url = create_genre(&app, "Fantasy").await;
    let id = id_from_url(&url);
    store
        .books_create(&CreateBook {
            title: "The Hobbit".to_string(),
            summary: None,
            author_id: 3,
            genre_ids: vec![id],
        })
        .await
        .unwrap();

    let response = post_form(
        &app,
        &format!("{}/delete", url),
        &format!("genreid={}&authorid=5", id),
    )
    .await;
    assert!(response.status().is_redirection());
    assert_eq!(get(&app, &url).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unparsable_id_renders_error_page() {
    let (app, _store) = test_app();
    for uri in [
        "/catalog/genre/abc",
        "/catalog/genre/abc/update",
        "/catalog/genre/abc/delete",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let html = body_text(response).await;
        assert!(html.contains("<title>Error</title>"), "{}", uri);
        assert!(html.contains("Genre not found"), "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_form_renders_error_page() {
    let (app, store) = test_app();
    let request = Request::post("/catalog/genre/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Fantasy"}"#))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("<title>Error</title>"));
    assert_eq!(store.genre_count().await, 0);

    let url = create_genre(&app, "Poetry").await;
    let response = post_form(&app, &format!("{}/delete", url), "genreid=abc").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(get(&app, &url).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_with_blank_author_field() {
    for guard in [DeleteGuard::Genre, DeleteGuard::Author] {
        let (app, _store) = test_app_with_guard(guard);
        let url = create_genre(&app, "Fantasy").await;
        let id = id_from_url(&url);

        let response = post_form(
            &app,
            &format!("{}/delete", url),
            &format!("genreid={}&authorid=", id),
        )
        .await;
        assert!(response.status().is_redirection(), "{:?}", guard);
        assert_eq!(location(&response), "/catalog/genres");
        assert_eq!(get(&app, &url).await.status(), StatusCode::NOT_FOUND, "{:?}", guard);
    }
}

#[tokio::test]
async fn test_delete_with_blank_genre_field_uses_path_id() {
    let (app, _store) = test_app();
    let url = create_genre(&app, "Fantasy").await;

    let response = post_form(&app, &format!("{}/delete", url), "genreid=&authorid=").await;
    assert!(response.status().is_redirection());
    assert_eq!(get(&app, &url).await.status(), StatusCode::NOT_FOUND);
}
