//! Unit tests for the provider registry

#[cfg(test)]
mod tests {
    use crate::error::ProviderError;
    use crate::provider::{NetBoxProvider, normalize_host};
    use crate::test_utils::*;
    use netbox_client::MockNetBoxClient;
    use serde_json::json;
    use std::sync::Arc;

    fn configured(client: &MockNetBoxClient) -> NetBoxProvider {
        let mut provider = NetBoxProvider::new();
        provider.configure_with_client(Arc::new(client.clone()));
        provider
    }

    #[test]
    fn test_normalize_host_defaults_scheme_and_path() {
        assert_eq!(
            normalize_host("netbox.example.com").unwrap(),
            "https://netbox.example.com/api"
        );
        assert_eq!(
            normalize_host("http://localhost:8000/").unwrap(),
            "http://localhost:8000/api"
        );
        assert_eq!(
            normalize_host("netbox.example.com:8443").unwrap(),
            "https://netbox.example.com:8443/api"
        );
    }

    #[test]
    fn test_normalize_host_keeps_explicit_path() {
        assert_eq!(
            normalize_host("https://netbox.example.com/netbox/api/").unwrap(),
            "https://netbox.example.com/netbox/api"
        );
    }

    #[test]
    fn test_normalize_host_rejects_garbage() {
        assert!(matches!(
            normalize_host("https://net box.example.com"),
            Err(ProviderError::InvalidConfig(_))
        ));
        assert!(matches!(normalize_host("http://"), Err(ProviderError::InvalidConfig(_))));
    }

    #[test]
    fn test_configure_builds_client() {
        let mut provider = NetBoxProvider::new();
        provider
            .configure(attrs(json!({"host": "netbox.example.com", "token": "0123456789abcdef"})))
            .unwrap();
        assert_eq!(provider.client().unwrap().base_url(), "https://netbox.example.com/api");
    }

    #[test]
    fn test_configure_without_token() {
        let mut provider = NetBoxProvider::new();
        provider
            .configure(attrs(json!({"host": "http://localhost:8000"})))
            .unwrap();
        assert_eq!(provider.client().unwrap().base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_configure_requires_host() {
        if std::env::var("NETBOX_HOST").is_ok_and(|v| !v.is_empty()) {
            return;
        }
        let mut provider = NetBoxProvider::new();
        let err = provider.configure(attrs(json!({}))).unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
    }

    #[test]
    fn test_provider_schema_reads_environment() {
        let schema = NetBoxProvider::new().schema();
        let host = schema.get("host").unwrap();
        assert!(host.required);
        assert_eq!(host.env_default, Some("NETBOX_HOST"));
        let token = schema.get("token").unwrap();
        assert!(token.sensitive);
        assert!(!token.required);
        assert_eq!(token.env_default, Some("NETBOX_TOKEN"));
    }

    #[test]
    fn test_type_tables() {
        let provider = NetBoxProvider::new();
        assert_eq!(provider.resource_types().len(), 16);
        assert!(provider.resource_types().contains(&"netbox_ipam_available_prefix"));
        assert_eq!(
            provider.resource("netbox_ipam_aggregates").unwrap().type_name(),
            provider.data_source("netbox_ipam_aggregates").unwrap().type_name()
        );
        assert_eq!(
            provider.data_source_types(),
            vec![
                "netbox_ipam_aggregates",
                "netbox_ipam_available_prefixes",
                "netbox_ipam_prefix",
                "netbox_ipam_prefixes"
            ]
        );
        assert!(matches!(
            provider.resource("netbox_dcim_cable"),
            Err(ProviderError::UnknownResourceType(name)) if name == "netbox_dcim_cable"
        ));
        assert!(matches!(
            provider.data_source("netbox_ipam_vrf"),
            Err(ProviderError::UnknownDataSourceType(_))
        ));
    }

    #[test]
    fn test_schemas_document() {
        let schemas = NetBoxProvider::new().schemas();
        assert_eq!(schemas["provider"]["attributes"]["token"]["sensitive"], json!(true));
        assert!(schemas["resource_schemas"]["netbox_tag"]["attributes"]["color"].is_object());
        assert!(schemas["data_source_schemas"]["netbox_ipam_prefixes"].is_object());
    }

    #[tokio::test]
    async fn test_operations_require_configuration() {
        let provider = NetBoxProvider::new();
        let err = provider
            .create_resource("netbox_ipam_rir", attrs(json!({"name": "RIPE", "slug": "ripe"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured));
    }

    #[test]
    fn test_validate_resource_config() {
        let provider = NetBoxProvider::new();
        let diags = provider.validate_resource_config("netbox_dcim_rack", &attrs(json!({"name": "r1"})));
        assert!(diags.has_errors());
        assert_eq!(diags.iter().next().unwrap().attribute.as_deref(), Some("site_id"));

        let diags = provider.validate_resource_config("netbox_dcim_rack", &attrs(json!({"name": "r1", "site_id": 1})));
        assert!(diags.is_empty());

        let diags = provider.validate_resource_config("netbox_dcim_cable", &attrs(json!({})));
        assert!(diags.has_errors());
    }

    #[test]
    fn test_validate_data_source_config() {
        let provider = NetBoxProvider::new();
        let diags = provider.validate_data_source_config("netbox_ipam_prefix", &attrs(json!({})));
        assert!(diags.has_errors());
        let diags = provider.validate_data_source_config("netbox_ipam_prefixes", &attrs(json!({"family": 4})));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_plan_reports_replacement() {
        let provider = NetBoxProvider::new();
        let state = attrs(json!({
            "id": "5",
            "prefix_id": 100,
            "prefix_length": 24,
            "prefix": "10.0.0.0/24",
            "family": 4
        }));

        let plan = provider
            .plan_resource_change(
                "netbox_ipam_available_prefix",
                &attrs(json!({"prefix_id": 100, "prefix_length": 25})),
                &state,
            )
            .unwrap();
        assert_eq!(plan.requires_replace, vec!["prefix_length".to_string()]);
        assert!(!plan.diagnostics.has_errors());

        let plan = provider
            .plan_resource_change(
                "netbox_ipam_available_prefix",
                &attrs(json!({"prefix_id": 100, "prefix_length": 24})),
                &state,
            )
            .unwrap();
        assert!(plan.requires_replace.is_empty());
        assert_eq!(plan.planned_state["prefix"], json!("10.0.0.0/24"));
        assert_eq!(plan.planned_state["id"], json!("5"));
    }

    #[test]
    fn test_plan_applies_defaults() {
        let provider = NetBoxProvider::new();
        let plan = provider
            .plan_resource_change("netbox_ipam_vrf", &attrs(json!({"name": "blue"})), &attrs(json!({})))
            .unwrap();
        assert_eq!(plan.planned_state["enforce_unique"], json!(true));
        assert!(plan.requires_replace.is_empty());
        assert!(plan.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_config() {
        let client = mock_client();
        let provider = configured(&client);
        let err = provider
            .create_resource("netbox_ipam_prefix", attrs(json!({"prefix": "10.0.0.300/24"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_prefix_lifecycle() {
        let client = mock_client();
        let provider = configured(&client);

        let state = provider
            .create_resource(
                "netbox_ipam_prefix",
                attrs(json!({"prefix": "10.10.0.0/24", "status": "active"})),
            )
            .await
            .unwrap();
        assert_eq!(state["id"], json!("1"));
        assert_eq!(state["family"], json!("IPv4"));

        let state = provider.read_resource("netbox_ipam_prefix", state).await.unwrap();
        assert_eq!(state["prefix"], json!("10.10.0.0/24"));

        let state = provider
            .update_resource(
                "netbox_ipam_prefix",
                attrs(json!({"prefix": "10.10.0.0/24", "status": "active", "description": "lab"})),
                state,
            )
            .await
            .unwrap();
        assert_eq!(state["description"], json!("lab"));
        assert_eq!(client.patch_log().last().unwrap().body, json!({"description": "lab"}));

        provider.delete_resource("netbox_ipam_prefix", state.clone()).await.unwrap();
        let gone = provider.read_resource("netbox_ipam_prefix", state).await.unwrap();
        assert!(gone.is_empty());
    }

    #[tokio::test]
    async fn test_read_data_source() {
        let client = mock_client();
        client.add_prefix(create_test_prefix(100, "10.0.0.0/16"));
        let provider = configured(&client);

        let state = provider
            .read_data_source("netbox_ipam_prefix", attrs(json!({"prefix_id": 100})))
            .await
            .unwrap();
        assert_eq!(state["id"], json!("100"));
        assert_eq!(state["prefix"], json!("10.0.0.0/16"));
    }
}
