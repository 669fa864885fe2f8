//! Salary research persona: histogram, regional breakdown and history.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::harness::McpTestHarness;

#[tokio::test]
async fn test_salary_research_workflow() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let histogram = serde_json::json!({
        "histogram": {"30000": 234, "35000": 456, "40000": 567}
    });
    Mock::given(method("GET"))
        .and(path("/jobs/gb/histogram"))
        .and(query_param("what", "data scientist"))
        .and(query_param("where", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(histogram.clone()))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let geodata = serde_json::json!({
        "locations": [{
            "location": {"display_name": "London", "area": ["UK", "London"]},
            "count": 15678,
            "average_salary": 62000
        }]
    });
    Mock::given(method("GET"))
        .and(path("/jobs/gb/geodata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geodata.clone()))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let history = serde_json::json!({
        "month": {"2024-01": 52000, "2024-02": 52500}
    });
    Mock::given(method("GET"))
        .and(path("/jobs/gb/history"))
        .and(query_param("months", "6"))
        .and(query_param("category", "it-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history.clone()))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let outcome = harness
        .call_tool(
            "get_salary_histogram",
            serde_json::json!({
                "country": "gb",
                "keywords": "data scientist",
                "location": "London"
            }),
        )
        .await?;
    assert!(!outcome.is_error);
    assert_eq!(outcome.body, histogram);

    let outcome = harness
        .call_tool("get_geodata", serde_json::json!({"country": "gb"}))
        .await?;
    assert!(!outcome.is_error);
    assert_eq!(outcome.body, geodata);

    let outcome = harness
        .call_tool(
            "get_salary_history",
            serde_json::json!({"country": "gb", "category": "it-jobs", "months": 6}),
        )
        .await?;
    assert!(!outcome.is_error);
    assert_eq!(outcome.body, history);

    let queries = harness.received_queries().await;
    let (_, geodata_query) = &queries[1];
    let keys: Vec<&str> = geodata_query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["app_id", "app_key"]);

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_is_reported() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/jobs/gb/histogram"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"display": "Too many requests"})),
        )
        .mount(&harness.upstream)
        .await;

    let outcome = harness
        .call_tool("get_salary_histogram", serde_json::json!({"country": "gb"}))
        .await?;
    assert!(outcome.is_error);
    assert_eq!(outcome.body["status"], 429);
    let message = outcome.body["message"].as_str().unwrap_or_default();
    assert!(message.contains("429"));
    assert!(message.contains("Too many requests"));

    harness.teardown().await?;
    Ok(())
}
