#![allow(dead_code)]

use forky::proxy::{router, ProxyConfig};

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Serves the proxy router on an ephemeral port and returns its base URL.
pub async fn spawn_proxy(api_key: &str, upstream_base: String) -> String {
    let app = router(ProxyConfig::new(api_key.to_string(), upstream_base));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Proxy serve failed");
    });

    format!("http://{}", addr)
}

/// A name-search response body with the given hits.
pub fn search_body(hits: &[(i64, &str)]) -> String {
    let results: Vec<serde_json::Value> = hits
        .iter()
        .map(|(id, title)| {
            serde_json::json!({
                "id": id,
                "title": title,
                "image": format!("https://img.spoonacular.com/recipes/{}.jpg", id)
            })
        })
        .collect();

    serde_json::json!({
        "results": results,
        "totalResults": hits.len()
    })
    .to_string()
}

/// A recipe detail body in the Spoonacular `information` shape.
pub fn detail_body(id: i64, title: &str) -> String {
    serde_json::json!({
        "id": id,
        "title": title,
        "image": format!("https://img.spoonacular.com/recipes/{}.jpg", id),
        "readyInMinutes": 45,
        "servings": 4,
        "instructions": "<ol><li>Chop everything.</li><li>Simmer for 40 minutes.</li></ol>",
        "extendedIngredients": [
            { "name": "onion", "amount": 1.5, "unit": "" },
            { "name": "butter", "amount": 2.0, "unit": "tbsp" }
        ],
        "sourceUrl": "https://example.com/recipe",
        "cheap": false,
        "dairyFree": false
    })
    .to_string()
}
