//! Tests for the template list endpoints

use super::*;
use crate::client::ClientConfig;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Arc<ServiceClient> {
    Arc::new(
        ServiceClient::with_config(ClientConfig::builder().base_url(server.uri()).build())
            .unwrap(),
    )
}

#[tokio::test]
async fn test_templates_pager_walks_next_links() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/v1/group_templates"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 1,
            "offset": 1,
            "total_count": 2,
            "group_templates": [{
                "id": "tmpl-2",
                "name": "auditors template",
                "account_id": "acc-1",
                "version": "1",
                "committed": false
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/group_templates"))
        .and(query_param("account_id", "acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 1,
            "offset": 0,
            "total_count": 2,
            "next": { "href": format!("{base}/v1/group_templates?account_id=acc-1&limit=1&offset=1") },
            "group_templates": [{
                "id": "tmpl-1",
                "name": "managers template",
                "account_id": "acc-1",
                "version": "2",
                "committed": true,
                "created_at": "2024-03-01T10:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut pager = pager(
        test_client(&mock_server),
        ListTemplatesQuery::new("acc-1").limit(1),
    )
    .unwrap();

    let all = pager.get_all().await.unwrap();
    let ids: Vec<_> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["tmpl-1", "tmpl-2"]);
    assert_eq!(all[0].committed, Some(true));
}

#[tokio::test]
async fn test_versions_pager_uses_template_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/group_templates/tmpl-1/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 100,
            "offset": 0,
            "total_count": 2,
            "group_template_versions": [
                { "id": "tmpl-1", "version": "1", "committed": true },
                { "id": "tmpl-1", "version": "2", "committed": false }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut pager = versions_pager(
        test_client(&mock_server),
        ListTemplateVersionsQuery::new("tmpl-1"),
    )
    .unwrap();

    let versions = pager.get_all().await.unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].version.as_deref(), Some("1"));
    assert_eq!(versions[1].version.as_deref(), Some("2"));
    assert!(!pager.has_next());
}
