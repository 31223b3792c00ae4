mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{build_app, get, send, test_config};

async fn search_app() -> (MockServer, axum::Router) {
    let search = MockServer::start().await;
    let app = build_app(test_config(
        "http://127.0.0.1:9",
        &search.uri(),
        "tenant.eu.auth0.com",
    ));
    (search, app)
}

#[tokio::test]
async fn test_search_returns_results() {
    let (search, app) = search_app().await;
    let data = json!({
        "results": {
            "constituicao.html#art6": {
                "page_info": {"Título": "Constituição Federal", "Capítulo": "II"},
                "content": "São direitos sociais a educação, a saúde, a alimentação, o trabalho, a moradia"
            }
        }
    });
    Mock::given(method("GET"))
        .and(path("/searcher"))
        .and(query_param("query", "direito moradia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": data})))
        .expect(1)
        .mount(&search)
        .await;

    let response = send(&app, get("/api/searcher?term=direito%20moradia", None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), data);
}

#[tokio::test]
async fn test_search_passes_unknown_keys_through() {
    let (search, app) = search_app().await;
    let data = json!({
        "results": {
            "lei-8245.html#art4": {
                "page_info": {"Título": "Lei do Inquilinato"},
                "content": "Durante o prazo estipulado para a duração do contrato",
                "score": 0.82
            }
        },
        "total": 1
    });
    Mock::given(method("GET"))
        .and(path("/searcher"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": data})))
        .expect(1)
        .mount(&search)
        .await;

    let response = send(&app, get("/api/searcher?term=contrato", None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), data);
}

#[tokio::test]
async fn test_search_failure_is_reported_in_payload() {
    let (search, app) = search_app().await;
    Mock::given(method("GET"))
        .and(path("/searcher"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&search)
        .await;

    let response = send(&app, get("/api/searcher?term=moradia", None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"status_code": 503, "error": "error"}));
}

#[tokio::test]
async fn test_search_without_term_is_rejected() {
    let (search, app) = search_app().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&search)
        .await;

    let response = send(&app, get("/api/searcher", None)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, get("/api/searcher?term=%20%20", None)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "term must not be empty"}));
}

#[tokio::test]
async fn test_search_with_unreachable_service_is_bad_gateway() {
    let app = build_app(test_config(
        "http://127.0.0.1:9",
        "http://127.0.0.1:9",
        "tenant.eu.auth0.com",
    ));

    let response = send(&app, get("/api/searcher?term=moradia", None)).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}
