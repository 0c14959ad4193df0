mod common;

use forky::proxy::ProxyConfig;
use mockito::Matcher;
use pretty_assertions::assert_eq;

const TEST_KEY: &str = "test-api-key-123";

#[test]
fn test_upstream_url_complex_search() {
    let config = ProxyConfig::new(TEST_KEY.to_string(), "https://api.example.com".to_string());

    let url = config
        .upstream_url("complexSearch", "chicken pie", "")
        .expect("complexSearch is a recognized endpoint");

    assert_eq!(
        url,
        format!(
            "https://api.example.com/recipes/complexSearch?query=chicken%20pie&apiKey={}&number=12&addRecipeInformation=true&fillIngredients=true",
            TEST_KEY
        )
    );
}

#[test]
fn test_upstream_url_find_by_ingredients() {
    let config = ProxyConfig::new(TEST_KEY.to_string(), "https://api.example.com".to_string());

    let url = config
        .upstream_url("findByIngredients", "", "tomato,basil, olive oil")
        .expect("findByIngredients is a recognized endpoint");

    assert_eq!(
        url,
        format!(
            "https://api.example.com/recipes/findByIngredients?ingredients=tomato%2Cbasil%2C%20olive%20oil&apiKey={}&number=12&ranking=1",
            TEST_KEY
        )
    );
}

#[test]
fn test_upstream_url_information() {
    let config = ProxyConfig::new(TEST_KEY.to_string(), "https://api.example.com".to_string());

    let url = config
        .upstream_url("information", "12345", "")
        .expect("information is a recognized endpoint");

    assert_eq!(
        url,
        format!(
            "https://api.example.com/recipes/12345/information?apiKey={}&includeNutrition=false",
            TEST_KEY
        )
    );
}

#[test]
fn test_upstream_url_rejects_unknown_endpoint() {
    let config = ProxyConfig::new(TEST_KEY.to_string(), "https://api.example.com".to_string());

    assert_eq!(config.upstream_url("deleteAll", "x", ""), None);
    assert_eq!(config.upstream_url("", "x", ""), None);
    // Endpoint matching is exact, not case-insensitive
    assert_eq!(config.upstream_url("COMPLEXSEARCH", "x", ""), None);
}

#[tokio::test]
async fn test_unknown_endpoint_returns_400_without_upstream_call() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    let never_called = upstream
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;

    let response = reqwest::get(format!("{}/api/search?endpoint=bogus&query=pasta", proxy_url))
        .await
        .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 400);

    let body = response.text().await.expect("Should read error body");
    assert_eq!(body, "Invalid API endpoint requested.");
    assert!(!body.contains(TEST_KEY), "Error body must not leak the key");

    never_called.assert_async().await;
}

#[tokio::test]
async fn test_missing_endpoint_parameter_returns_400() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    let never_called = upstream
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;

    let response = reqwest::get(format!("{}/api/search?query=pasta", proxy_url))
        .await
        .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 400);
    never_called.assert_async().await;
}

#[tokio::test]
async fn test_complex_search_relays_upstream_body() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    let search_mock = upstream
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "chicken pie".into()),
            Matcher::UrlEncoded("apiKey".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("number".into(), "12".into()),
            Matcher::UrlEncoded("addRecipeInformation".into(), "true".into()),
            Matcher::UrlEncoded("fillIngredients".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::search_body(&[(7, "Chicken Pie")]))
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;

    let response = reqwest::get(format!(
        "{}/api/search?endpoint=complexSearch&query=chicken%20pie",
        proxy_url
    ))
    .await
    .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["results"][0]["id"], 7);
    assert_eq!(body["results"][0]["title"], "Chicken Pie");

    search_mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_ingredients_relays_upstream_body() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    let search_mock = upstream
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ingredients".into(), "tomato,basil".into()),
            Matcher::UrlEncoded("apiKey".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("number".into(), "12".into()),
            Matcher::UrlEncoded("ranking".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 42, "title": "Caprese", "image": null}]"#)
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;

    let response = reqwest::get(format!(
        "{}/api/search?endpoint=findByIngredients&ingredients=tomato%2Cbasil",
        proxy_url
    ))
    .await
    .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body[0]["id"], 42);

    search_mock.assert_async().await;
}

#[tokio::test]
async fn test_information_builds_path_from_recipe_id() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    let detail_mock = upstream
        .mock("GET", "/recipes/12345/information")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("includeNutrition".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::detail_body(12345, "Minestrone"))
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;

    let response = reqwest::get(format!(
        "{}/api/search?endpoint=information&query=12345",
        proxy_url
    ))
    .await
    .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["id"], 12345);
    assert_eq!(body["title"], "Minestrone");

    detail_mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_transport_failure_returns_500_fixed_body() {
    common::init_test_logging();

    // Nothing listens on port 1; the upstream call fails at the transport.
    let proxy_url = common::spawn_proxy(TEST_KEY, "http://127.0.0.1:1".to_string()).await;

    let response = reqwest::get(format!(
        "{}/api/search?endpoint=complexSearch&query=pasta",
        proxy_url
    ))
    .await
    .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 500);

    let body = response.text().await.expect("Should read error body");
    assert_eq!(body, "API proxy error.");
    assert!(!body.contains(TEST_KEY), "Error body must not leak the key");
}

#[tokio::test]
async fn test_upstream_non_json_body_returns_500_fixed_body() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>rate limited</html>")
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;

    let response = reqwest::get(format!(
        "{}/api/search?endpoint=information&query=99",
        proxy_url
    ))
    .await
    .expect("Request to proxy should succeed");

    assert_eq!(response.status().as_u16(), 500);

    let body = response.text().await.expect("Should read error body");
    assert_eq!(body, "API proxy error.");
    assert!(!body.contains(TEST_KEY), "Error body must not leak the key");
}

#[tokio::test]
async fn test_repeated_calls_are_safe() {
    common::init_test_logging();

    let mut upstream = mockito::Server::new_async().await;
    let search_mock = upstream
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::search_body(&[(1, "Toast")]))
        .expect(2)
        .create_async()
        .await;

    let proxy_url = common::spawn_proxy(TEST_KEY, upstream.url()).await;
    let url = format!("{}/api/search?endpoint=complexSearch&query=toast", proxy_url);

    let first = reqwest::get(&url).await.expect("First call should succeed");
    let second = reqwest::get(&url).await.expect("Second call should succeed");

    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(second.status().as_u16(), 200);

    search_mock.assert_async().await;
}
