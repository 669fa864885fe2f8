//! Company research persona: top employers and API version.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::harness::McpTestHarness;

#[tokio::test]
async fn test_top_companies() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let leaderboard = serde_json::json!({
        "leaderboard": [
            {"canonical_name": "NHS", "count": 1245, "average_salary": 42000},
            {"canonical_name": "Amazon", "count": 567, "average_salary": null}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/jobs/gb/top_companies"))
        .and(query_param("what", "software engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(leaderboard.clone()))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let outcome = harness
        .call_tool(
            "get_top_companies",
            serde_json::json!({"country": "gb", "keywords": "software engineer"}),
        )
        .await?;
    assert!(!outcome.is_error);
    assert_eq!(outcome.body, leaderboard);

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_api_version() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let version = serde_json::json!({"api_version": 1, "software_version": "1.0.0"});
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(version.clone()))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let outcome = harness
        .call_tool("get_api_version", serde_json::json!({}))
        .await?;
    assert!(!outcome.is_error);
    assert_eq!(outcome.body, version);

    harness.teardown().await?;
    Ok(())
}
