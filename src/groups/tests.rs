//! Tests for the access groups list endpoint

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

fn group_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "account_id": "acc-1",
        "created_at": "2024-03-01T10:00:00Z",
        "created_by_id": "IBMid-user1",
        "href": format!("https://iam.cloud.ibm.com/v2/groups/{id}"),
        "is_federated": false
    })
}

#[test]
fn test_list_groups_query_pairs() {
    let pairs = ListGroupsQuery::new("acc-1")
        .hide_public_access(true)
        .membership_type("static")
        .limit(50)
        .into_page_query()
        .to_pairs("limit", "offset");

    assert_eq!(
        pairs,
        vec![
            ("account_id".to_string(), "acc-1".to_string()),
            ("hide_public_access".to_string(), "true".to_string()),
            ("membership_type".to_string(), "static".to_string()),
            ("limit".to_string(), "50".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_groups_pager_walks_next_links() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // First page advertises offset=2 in next.href; the pager must send
    // offset=2 on the second request. Mount order matters: most specific
    // matcher first.
    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "offset": 2,
            "total_count": 3,
            "first": { "href": format!("{base}/v2/groups?account_id=acc-1&limit=2") },
            "groups": [group_json("grp-3", "auditors")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("account_id", "acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "offset": 0,
            "total_count": 3,
            "first": { "href": format!("{base}/v2/groups?account_id=acc-1&limit=2") },
            "next": { "href": format!("{base}/v2/groups?account_id=acc-1&limit=2&offset=2") },
            "groups": [group_json("grp-1", "managers"), group_json("grp-2", "developers")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut pager = pager(
        test_client(&mock_server),
        ListGroupsQuery::new("acc-1").limit(2),
    )
    .unwrap();

    let all = pager.get_all().await.unwrap();
    let ids: Vec<_> = all.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["grp-1", "grp-2", "grp-3"]);
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_groups_pager_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "offset": 0,
            "total_count": 1,
            "groups": [group_json("grp-1", "managers")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut pager = pager(test_client(&mock_server), ListGroupsQuery::new("acc-1")).unwrap();

    assert!(pager.has_next());
    let first = pager.get_next().await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].name, "managers");
    assert_eq!(first[0].account_id.as_deref(), Some("acc-1"));
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_groups_pager_treats_malformed_next_as_last_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "offset": 0,
            "total_count": 1,
            "next": { "href": "::definitely not a url::" },
            "groups": [group_json("grp-1", "managers")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut pager = pager(test_client(&mock_server), ListGroupsQuery::new("acc-1")).unwrap();

    // Never loops: the unusable link ends pagination after one fetch.
    let all = pager.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
}
