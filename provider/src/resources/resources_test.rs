//! Unit tests for the adapter registry, shared outcome helpers and the
//! tenancy and extras adapters

#[cfg(test)]
mod tests {
    use crate::resource_data::{AttributeMap, ResourceData};
    use crate::resources::extras::TagResource;
    use crate::resources::tenancy::TenantResource;
    use crate::resources::{Resource, all, delete_result, read_failed};
    use crate::test_utils::*;
    use netbox_client::NetBoxError;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn existing(id: &str) -> ResourceData {
        ResourceData::new(AttributeMap::new(), attrs(json!({"id": id, "name": "x"})))
    }

    #[test]
    fn test_registry_type_names() {
        let names: Vec<_> = all().iter().map(|r| r.type_name()).collect();
        let unique: BTreeSet<_> = names.iter().collect();
        assert_eq!(names.len(), 16);
        assert_eq!(unique.len(), names.len());
        assert!(names.contains(&"netbox_ipam_available_prefix"));
        assert!(names.contains(&"netbox_tenancy_tenant"));
        assert!(names.contains(&"netbox_tag"));
        assert!(names.contains(&"netbox_ipam_aggregates"));
        assert!(!names.contains(&"netbox_ipam_aggregate"));
    }

    #[test]
    fn test_every_resource_has_computed_id() {
        for resource in all() {
            let schema = resource.schema();
            let id = schema
                .get("id")
                .unwrap_or_else(|| panic!("{} has no id", resource.type_name()));
            assert!(id.computed, "{}", resource.type_name());
            assert!(!id.optional, "{}", resource.type_name());
        }
    }

    #[test]
    fn test_read_failed_not_found_clears_id() {
        let mut d = existing("7");
        read_failed(&mut d, "site", NetBoxError::NotFound("Site 7 not found".to_string())).unwrap();
        assert_eq!(d.id(), "");
        assert!(d.state().is_empty());
    }

    #[test]
    fn test_read_failed_other_error() {
        let mut d = existing("7");
        let err = read_failed(&mut d, "site", NetBoxError::Api("502 Bad Gateway".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Unable to get site: NetBox API error: 502 Bad Gateway");
        assert_eq!(d.id(), "7");
    }

    #[test]
    fn test_delete_result() {
        let mut d = existing("7");
        delete_result(&mut d, "tag", Ok(())).unwrap();
        assert_eq!(d.id(), "");

        let mut d = existing("8");
        let err = delete_result(&mut d, "tag", Err(NetBoxError::NotFound("gone".to_string()))).unwrap_err();
        assert_eq!(err.to_string(), "Unable to delete tag: Not found: gone");
        assert_eq!(d.id(), "8");

        let mut d = existing("9");
        assert!(delete_result(&mut d, "tag", Err(NetBoxError::Api("500".to_string()))).is_err());
        assert_eq!(d.id(), "9");
    }

    #[tokio::test]
    async fn test_tenant_lifecycle() {
        let client = mock_client();
        let d = create(
            &TenantResource,
            &client,
            json!({"name": "Acme", "slug": "acme", "group_id": 2, "custom_fields": {"account": "A-1"}}),
        )
        .await;

        let state = d.state();
        assert_eq!(state["group_id"], json!(2));
        assert_eq!(state["custom_fields"], json!({"account": "A-1"}));

        let d = update(
            &TenantResource,
            &client,
            &d.state(),
            json!({"name": "Acme", "slug": "acme", "comments": "key account", "custom_fields": {"account": "A-1"}}),
        )
        .await;
        assert_eq!(
            client.patch_log()[0].body,
            json!({"group": null, "comments": "key account"})
        );
        assert!(d.state().get("group_id").is_none());

        let mut d = ResourceData::new(AttributeMap::new(), d.state());
        TenantResource.delete(&client, &mut d).await.unwrap();
        assert_eq!(d.id(), "");
    }

    #[tokio::test]
    async fn test_tag_color_is_computed() {
        let client = mock_client();
        let d = create(&TagResource, &client, json!({"name": "Production", "slug": "production"})).await;
        assert_eq!(d.state()["color"], json!("9e9e9e"));
        assert!(client.requests()[0].body.get("color").is_none());

        let d = update(
            &TagResource,
            &client,
            &d.state(),
            json!({"name": "Production", "slug": "prod"}),
        )
        .await;
        assert_eq!(client.patch_log()[0].body, json!({"slug": "prod"}));
        assert_eq!(d.state()["color"], json!("9e9e9e"));
    }

    #[tokio::test]
    async fn test_tag_color_can_be_set() {
        let client = mock_client();
        let d = create(&TagResource, &client, json!({"name": "Red", "slug": "red", "color": "f44336"})).await;
        assert_eq!(d.state()["color"], json!("f44336"));
        assert_eq!(d.state()["description"], json!(""));
    }
}
