//! Job seeker persona: category lookup followed by filtered search.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::harness::{McpTestHarness, TEST_APP_ID, TEST_APP_KEY};

#[tokio::test]
async fn test_categories_then_search() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/jobs/gb/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"tag": "it-jobs", "label": "IT Jobs"},
                {"tag": "engineering-jobs", "label": "Engineering Jobs"}
            ]
        })))
        .mount(&harness.upstream)
        .await;

    let search_body = serde_json::json!({
        "count": 523,
        "results": [{
            "id": "4123456789",
            "title": "Senior Software Engineer",
            "company": {"display_name": "Tech Corp"},
            "location": {"display_name": "London"},
            "salary_min": 70000,
            "salary_max": 90000,
            "redirect_url": "https://www.adzuna.co.uk/..."
        }]
    });
    Mock::given(method("GET"))
        .and(path("/jobs/gb/search/1"))
        .and(query_param("category", "it-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body.clone()))
        .mount(&harness.upstream)
        .await;

    let categories = harness
        .call_tool("get_categories", serde_json::json!({"country": "gb"}))
        .await?;
    assert!(!categories.is_error);
    let tag = categories.body["results"][0]["tag"]
        .as_str()
        .unwrap_or_default();
    assert_eq!(tag, "it-jobs");

    let search = harness
        .call_tool(
            "search_jobs",
            serde_json::json!({"country": "gb", "category": tag}),
        )
        .await?;
    assert!(!search.is_error, "search_jobs failed: {:?}", search.body);
    assert_eq!(search.body, search_body);

    let queries = harness.received_queries().await;
    assert_eq!(queries.len(), 2);

    let (categories_path, categories_query) = &queries[0];
    assert_eq!(categories_path, "/jobs/gb/categories");
    assert_eq!(
        categories_query,
        &vec![
            ("app_id".to_string(), TEST_APP_ID.to_string()),
            ("app_key".to_string(), TEST_APP_KEY.to_string()),
        ]
    );

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_search_sends_only_supplied_fields() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/jobs/us/search/3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"count": 0, "results": []})),
        )
        .mount(&harness.upstream)
        .await;

    let outcome = harness
        .call_tool(
            "search_jobs",
            serde_json::json!({
                "country": "us",
                "page": 3,
                "results_per_page": 25,
                "keywords": "rust engineer",
                "location": "",
                "salary_min": 50000,
                "salary_max": 90000,
                "full_time": true,
                "part_time": false,
                "permanent": true
            }),
        )
        .await?;
    assert!(!outcome.is_error);

    let queries = harness.received_queries().await;
    let (path, query) = &queries[0];
    assert_eq!(path, "/jobs/us/search/3");

    let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "app_id",
            "app_key",
            "results_per_page",
            "what",
            "salary_min",
            "salary_max",
            "full_time",
            "permanent"
        ]
    );

    let value = |key: &str| {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(value("results_per_page"), Some("25"));
    assert_eq!(value("what"), Some("rust engineer"));
    assert_eq!(value("salary_min"), Some("50000"));
    assert_eq!(value("salary_max"), Some("90000"));
    assert_eq!(value("full_time"), Some("1"));
    assert_eq!(value("permanent"), Some("1"));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_invalid_country_surfaces_upstream_error() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/jobs/xx/search/1"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"display": "Invalid country"})),
        )
        .mount(&harness.upstream)
        .await;

    let outcome = harness
        .call_tool("search_jobs", serde_json::json!({"country": "xx"}))
        .await?;
    assert!(outcome.is_error);
    assert_eq!(outcome.body["error"], "api_error");
    assert_eq!(outcome.body["status"], 400);
    assert_eq!(outcome.body["message"], "API Error 400: Invalid country");

    harness.teardown().await?;
    Ok(())
}
