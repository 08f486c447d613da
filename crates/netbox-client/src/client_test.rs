//! HTTP wire tests for NetBoxClient

#[cfg(test)]
mod tests {
    use crate::{NetBoxClient, NetBoxError, WritablePrefix, WritableVrf};
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    fn client_for(server: &Server, token: Option<&str>) -> NetBoxClient {
        let base = server.url("/api").to_string();
        NetBoxClient::new(base, token.map(str::to_string)).unwrap()
    }

    #[tokio::test]
    async fn test_get_prefix_sends_token() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/ipam/prefixes/7/"),
                request::headers(contains(("authorization", "Token secret"))),
            ])
            .respond_with(json_encoded(json!({
                "id": 7,
                "prefix": "10.0.0.0/16",
                "family": {"value": 4, "label": "IPv4"},
                "status": {"value": "active", "label": "Active"},
                "tags": [{"id": 1, "name": "Foo", "slug": "foo", "color": "ff0000"}]
            }))),
        );

        let client = client_for(&server, Some("secret"));
        let prefix = client.get_prefix(7).await.unwrap();

        assert_eq!(prefix.id, 7);
        assert_eq!(prefix.prefix, "10.0.0.0/16");
        assert_eq!(prefix.status.map(|s| s.value), Some("active".to_string()));
        assert_eq!(prefix.tags[0].slug, "foo");
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/status/"),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(json_encoded(json!({"netbox-version": "2.10.4"}))),
        );

        let client = client_for(&server, None);
        client.validate_token().await.unwrap();
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/dcim/sites/99/"))
                .respond_with(status_code(404).body(r#"{"detail":"Not found."}"#)),
        );

        let client = client_for(&server, Some("secret"));
        let err = client.get_site(99).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_forbidden_maps_to_authentication() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/status/"))
                .respond_with(status_code(403).body("Invalid token")),
        );

        let client = client_for(&server, Some("wrong"));
        let err = client.validate_token().await.unwrap_err();

        assert!(matches!(err, NetBoxError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/api/ipam/prefixes/"))
                .respond_with(status_code(400).body(r#"{"prefix":["This field is required."]}"#)),
        );

        let client = client_for(&server, Some("secret"));
        let err = client.create_prefix(&WritablePrefix::default()).await.unwrap_err();

        match err {
            NetBoxError::Api(message) => {
                assert!(message.contains("400"));
                assert!(message.contains("This field is required."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_patch_sends_only_set_fields() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/api/ipam/vrfs/3/"),
                request::body(json_decoded(eq(json!({"description": "new", "tenant": null})))),
            ])
            .respond_with(json_encoded(json!({"id": 3, "name": "blue", "description": "new"}))),
        );

        let client = client_for(&server, Some("secret"));
        let vrf = client
            .update_vrf(
                3,
                &WritableVrf {
                    description: Some("new".to_string()),
                    tenant: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(vrf.description, "new");
    }

    #[tokio::test]
    async fn test_create_available_prefix_accepts_list_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/api/ipam/prefixes/1/available-prefixes/"),
                request::body(json_decoded(eq(json!({"prefix_length": 24})))),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("Content-Type", "application/json")
                    .body(json!([{"id": 2, "prefix": "10.0.0.0/24", "family": {"value": 4, "label": "IPv4"}}]).to_string()),
            ),
        );

        let client = client_for(&server, Some("secret"));
        let prefix = client.create_available_prefix(1, 24).await.unwrap();

        assert_eq!(prefix.id, 2);
        assert_eq!(prefix.prefix, "10.0.0.0/24");
    }

    #[tokio::test]
    async fn test_query_prefixes_follows_next_page() {
        let server = Server::run();
        let next = server.url("/api/ipam/prefixes/?family=4&limit=1&offset=1").to_string();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/ipam/prefixes/"),
                request::query(url_decoded(contains(("offset", "1")))),
            ])
            .respond_with(json_encoded(json!({
                "count": 2, "next": null, "previous": null,
                "results": [{"id": 2, "prefix": "10.1.0.0/16"}]
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/ipam/prefixes/"),
                request::query(url_decoded(not(contains(key("offset"))))),
            ])
            .respond_with(json_encoded(json!({
                "count": 2, "next": next, "previous": null,
                "results": [{"id": 1, "prefix": "10.0.0.0/16"}]
            }))),
        );

        let client = client_for(&server, None);
        let prefixes = client.query_prefixes(&[("family", "4")], true).await.unwrap();

        let ids: Vec<u64> = prefixes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
