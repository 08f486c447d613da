//! Unit tests for the IPAM resource adapters

#[cfg(test)]
mod tests {
    use crate::resource_data::{AttributeMap, ResourceData};
    use crate::resources::Resource;
    use crate::resources::ipam::{
        AggregateResource, AvailablePrefixResource, IpAddressResource, PrefixResource, RirResource, VlanResource,
        VrfResource,
    };
    use crate::test_utils::*;
    use netbox_client::NetBoxClientTrait;
    use serde_json::json;

    #[tokio::test]
    async fn test_available_prefix_allocates_first_free_block() {
        let client = mock_client();
        client.add_prefix(create_test_prefix(100, "10.0.0.0/16"));

        let first = create(&AvailablePrefixResource, &client, json!({"prefix_id": 100, "prefix_length": 24})).await;
        let second = create(&AvailablePrefixResource, &client, json!({"prefix_id": 100, "prefix_length": 24})).await;

        let state = first.state();
        assert_eq!(state["prefix"], json!("10.0.0.0/24"));
        assert_eq!(state["prefix_length"], json!(24));
        assert_eq!(state["family"], json!(4));
        assert_eq!(second.state()["prefix"], json!("10.0.1.0/24"));

        let requests = client.requests();
        assert_eq!(requests[0].path, "/ipam/prefixes/100/available-prefixes/");
        assert_eq!(requests[0].body, json!({"prefix_length": 24}));
    }

    #[tokio::test]
    async fn test_available_prefix_no_space() {
        let client = mock_client();
        client.add_prefix(create_test_prefix(100, "10.0.0.0/24"));

        let config = planned(&AvailablePrefixResource, json!({"prefix_id": 100, "prefix_length": 16}), &AttributeMap::new());
        let mut d = ResourceData::from_config(config);
        let err = AvailablePrefixResource.create(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().contains("409"));
        assert_eq!(d.id(), "");
    }

    #[test]
    fn test_available_prefix_inputs_force_replacement() {
        let schema = AvailablePrefixResource.schema();
        let state = attrs(json!({"id": "1", "prefix_id": 100, "prefix_length": 24, "prefix": "10.0.0.0/24"}));

        let same = attrs(json!({"prefix_id": 100, "prefix_length": 24}));
        assert!(schema.requires_replace(&same, &state).is_empty());

        let longer = attrs(json!({"prefix_id": 100, "prefix_length": 25}));
        assert_eq!(schema.requires_replace(&longer, &state), vec!["prefix_length".to_string()]);
    }

    #[test]
    fn test_available_prefix_length_range() {
        let schema = AvailablePrefixResource.schema();
        let diags = schema.validate(&attrs(json!({"prefix_id": 1, "prefix_length": 129})));
        assert!(diags.has_errors());
        assert_eq!(diags.iter().next().unwrap().attribute.as_deref(), Some("prefix_length"));
    }

    #[tokio::test]
    async fn test_available_prefix_delete_goes_through_prefix_endpoint() {
        let client = mock_client();
        client.add_prefix(create_test_prefix(100, "10.0.0.0/16"));
        let d = create(&AvailablePrefixResource, &client, json!({"prefix_id": 100, "prefix_length": 24})).await;

        let mut d = ResourceData::new(AttributeMap::new(), d.state());
        AvailablePrefixResource.delete(&client, &mut d).await.unwrap();
        assert!(client.get_prefix(1).await.unwrap_err().is_not_found());
        assert!(client.get_prefix(100).await.is_ok());
    }

    #[tokio::test]
    async fn test_vrf_description_only_patch() {
        let client = mock_client();
        let d = create(&VrfResource, &client, json!({"name": "blue", "rd": "65000:1"})).await;
        assert_eq!(d.state()["enforce_unique"], json!(true));

        let d = update(
            &VrfResource,
            &client,
            &d.state(),
            json!({"name": "blue", "rd": "65000:1", "description": "core routing"}),
        )
        .await;

        let patches = client.patch_log();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].path, "/ipam/vrfs/1/");
        assert_eq!(patches[0].body, json!({"description": "core routing"}));
        assert_eq!(d.state()["description"], json!("core routing"));
    }

    #[tokio::test]
    async fn test_vrf_refresh_from_fixture() {
        let client = mock_client();
        client.add_vrf(create_test_vrf(42, "red", Some("65000:42")));

        let d = refresh(&VrfResource, &client, &attrs(json!({"id": "42"}))).await;
        let state = d.state();
        assert_eq!(state["name"], json!("red"));
        assert_eq!(state["rd"], json!("65000:42"));
        assert_eq!(state["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_prefix_create_and_read() {
        let client = mock_client();
        let d = create(
            &PrefixResource,
            &client,
            json!({
                "prefix": "10.1.0.0/16",
                "status": "container",
                "vrf_id": 3,
                "tags": [{"name": "Prod", "slug": "prod"}],
                "custom_fields": {"owner": "netops"}
            }),
        )
        .await;

        let state = d.state();
        assert_eq!(state["family"], json!("IPv4"));
        assert_eq!(state["status"], json!("container"));
        assert_eq!(state["vrf_id"], json!(3));
        assert_eq!(state["is_pool"], json!(false));
        assert_eq!(state["tags"], json!([{"id": 1, "name": "Prod", "slug": "prod", "color": "9e9e9e"}]));
        assert_eq!(state["custom_fields"], json!({"owner": "netops"}));
    }

    #[tokio::test]
    async fn test_prefix_update_keeps_unconfigured_tags() {
        let client = mock_client();
        let d = create(
            &PrefixResource,
            &client,
            json!({"prefix": "10.1.0.0/16", "tags": [{"name": "Prod", "slug": "prod"}]}),
        )
        .await;

        update(
            &PrefixResource,
            &client,
            &d.state(),
            json!({"prefix": "10.1.0.0/16", "description": "campus"}),
        )
        .await;

        assert_eq!(client.patch_log()[0].body, json!({"description": "campus"}));
    }

    #[tokio::test]
    async fn test_prefix_read_after_external_delete_clears_id() {
        let client = mock_client();
        let d = create(&PrefixResource, &client, json!({"prefix": "10.9.0.0/16"})).await;
        client.forget(1);

        let d = refresh(&PrefixResource, &client, &d.state()).await;
        assert_eq!(d.id(), "");
        assert!(d.state().is_empty());
    }

    #[test]
    fn test_prefix_rejects_invalid_cidr() {
        let diags = PrefixResource.schema().validate(&attrs(json!({"prefix": "10.0.0.0/33"})));
        assert!(diags.has_errors());
        assert_eq!(diags.iter().next().unwrap().attribute.as_deref(), Some("prefix"));
    }

    #[tokio::test]
    async fn test_ip_address_lifecycle() {
        let client = mock_client();
        let d = create(
            &IpAddressResource,
            &client,
            json!({
                "address": "10.0.0.10/24",
                "role": "vip",
                "dns_name": "vip.example.net",
                "assigned_object_type": "dcim.interface",
                "assigned_object_id": 9
            }),
        )
        .await;

        let state = d.state();
        assert_eq!(state["family"], json!("IPv4"));
        assert_eq!(state["status"], json!("active"));
        assert_eq!(state["role"], json!("vip"));
        assert_eq!(state["assigned_object_id"], json!(9));

        let d = update(&IpAddressResource, &client, &d.state(), json!({"address": "10.0.0.10/24"})).await;

        assert_eq!(
            client.patch_log()[0].body,
            json!({
                "role": "",
                "dns_name": "",
                "assigned_object_type": null,
                "assigned_object_id": null
            })
        );
        let state = d.state();
        assert!(state.get("role").is_none());
        assert_eq!(state["status"], json!("active"));
    }

    #[test]
    fn test_ip_address_status_allow_list() {
        let schema = IpAddressResource.schema();
        assert!(!schema.validate(&attrs(json!({"address": "2001:db8::1/64", "status": "slaac"}))).has_errors());
        assert!(schema.validate(&attrs(json!({"address": "2001:db8::1/64", "status": "up"}))).has_errors());
    }

    #[tokio::test]
    async fn test_aggregate_create_and_update() {
        let client = mock_client();
        let d = create(&AggregateResource, &client, json!({"prefix": "10.0.0.0/8", "rir_id": 3})).await;

        let state = d.state();
        assert_eq!(state["family"], json!("IPv4"));
        assert_eq!(state["rir_id"], json!(3));

        update(
            &AggregateResource,
            &client,
            &d.state(),
            json!({"prefix": "10.0.0.0/8", "rir_id": 3, "description": "RFC 1918"}),
        )
        .await;
        assert_eq!(client.patch_log()[0].body, json!({"description": "RFC 1918"}));
    }

    #[tokio::test]
    async fn test_vlan_create_and_read() {
        let client = mock_client();
        let d = create(&VlanResource, &client, json!({"name": "servers", "vid": 100, "site_id": 4})).await;

        assert_eq!(client.requests()[0].body["status"], json!("active"));
        let state = d.state();
        assert_eq!(state["vid"], json!(100));
        assert_eq!(state["site_id"], json!(4));
        assert_eq!(state["status"], json!("active"));
    }

    #[test]
    fn test_vlan_vid_range() {
        let schema = VlanResource.schema();
        assert!(schema.validate(&attrs(json!({"name": "v", "vid": 4095}))).has_errors());
        assert!(schema.validate(&attrs(json!({"name": "v", "vid": 0}))).has_errors());
        assert!(!schema.validate(&attrs(json!({"name": "v", "vid": 4094}))).has_errors());
    }

    #[tokio::test]
    async fn test_rir_delete_already_gone_is_an_error() {
        let client = mock_client();
        let d = create(&RirResource, &client, json!({"name": "RIPE", "slug": "ripe"})).await;
        assert_eq!(d.state()["slug"], json!("ripe"));
        client.forget(1);

        let mut d = ResourceData::new(AttributeMap::new(), d.state());
        let err = RirResource.delete(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().starts_with("Unable to delete RIR"));
        assert_eq!(d.id(), "1");
    }

    #[tokio::test]
    async fn test_vrf_delete_unknown_id_keeps_id() {
        let client = mock_client();
        let mut d = ResourceData::new(AttributeMap::new(), attrs(json!({"id": "4242", "name": "blue"})));

        let result = VrfResource.delete(&client, &mut d).await;
        assert!(result.is_err());
        assert_eq!(d.id(), "4242");
        assert_eq!(d.state()["id"], json!("4242"));
    }

    #[tokio::test]
    async fn test_rir_delete_failure_keeps_id() {
        let client = mock_client();
        let d = create(&RirResource, &client, json!({"name": "ARIN", "slug": "arin"})).await;
        client.fail_with_api_error("409 Conflict - RIR is in use");

        let mut d = ResourceData::new(AttributeMap::new(), d.state());
        let err = RirResource.delete(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().starts_with("Unable to delete RIR"));
        assert_eq!(d.id(), "1");
    }
}
