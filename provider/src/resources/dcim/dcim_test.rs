//! Unit tests for the DCIM resource adapters

#[cfg(test)]
mod tests {
    use crate::resource_data::{AttributeMap, ResourceData};
    use crate::resources::Resource;
    use crate::resources::dcim::{DeviceResource, InterfaceResource, RackResource, RegionResource, SiteResource};
    use crate::test_utils::*;
    use netbox_client::NetBoxClientTrait;
    use serde_json::json;

    #[tokio::test]
    async fn test_site_create_and_read() {
        let client = mock_client();
        let d = create(
            &SiteResource,
            &client,
            json!({
                "name": "Amsterdam 1",
                "slug": "ams1",
                "status": "planned",
                "latitude": "52.370216",
                "longitude": "04.895168",
                "tags": [{"name": "Edge", "slug": "edge"}],
                "custom_fields": {"cost_center": "1234"}
            }),
        )
        .await;

        let state = d.state();
        assert_eq!(state["id"], json!("1"));
        assert_eq!(state["name"], json!("Amsterdam 1"));
        assert_eq!(state["status"], json!("planned"));
        // Configured spelling survives the decimal round trip
        assert_eq!(state["longitude"], json!("04.895168"));
        assert_eq!(state["tags"][0]["slug"], json!("edge"));
        assert_eq!(state["tags"][0]["color"], json!("9e9e9e"));
        assert_eq!(state["custom_fields"], json!({"cost_center": "1234"}));

        let site = client.get_site(1).await.unwrap();
        assert_eq!(site.latitude, Some(52.370216));
    }

    #[tokio::test]
    async fn test_site_read_after_external_delete_clears_id() {
        let client = mock_client();
        let d = create(&SiteResource, &client, json!({"name": "lab", "slug": "lab"})).await;
        client.forget(1);

        let d = refresh(&SiteResource, &client, &d.state()).await;
        assert_eq!(d.id(), "");
        assert!(d.state().is_empty());
    }

    #[tokio::test]
    async fn test_site_read_surfaces_other_errors() {
        let client = mock_client();
        let d = create(&SiteResource, &client, json!({"name": "lab", "slug": "lab"})).await;
        client.fail_with_api_error("500 Internal Server Error");

        let mut d = ResourceData::new(AttributeMap::new(), d.state());
        let err = SiteResource.read(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().starts_with("Unable to get site"));
        assert_eq!(d.id(), "1");
    }

    #[tokio::test]
    async fn test_site_update_clears_removed_attribute() {
        let client = mock_client();
        let d = create(
            &SiteResource,
            &client,
            json!({"name": "lab", "slug": "lab", "facility": "Equinix AM3", "tenant_id": 7}),
        )
        .await;

        let d = update(&SiteResource, &client, &d.state(), json!({"name": "lab", "slug": "lab"})).await;

        let patches = client.patch_log();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].path, "/dcim/sites/1/");
        assert_eq!(patches[0].body, json!({"facility": "", "tenant": null}));
        assert!(d.state().get("tenant_id").is_none());
    }

    #[tokio::test]
    async fn test_rack_defaults_are_sent() {
        let client = mock_client();
        let d = create(
            &RackResource,
            &client,
            json!({"name": "R01", "site_id": 4, "type": "4-post-cabinet", "facility": "AM3-R01"}),
        )
        .await;

        let post = &client.requests()[0];
        assert_eq!(post.path, "/dcim/racks/");
        assert_eq!(post.body["width"], json!(19));
        assert_eq!(post.body["u_height"], json!(42));
        assert_eq!(post.body["status"], json!("active"));
        assert_eq!(post.body["outer_unit"], json!("mm"));
        assert_eq!(post.body["facility_id"], json!("AM3-R01"));

        let state = d.state();
        assert_eq!(state["type"], json!("4-post-cabinet"));
        assert_eq!(state["site_id"], json!(4));
    }

    #[test]
    fn test_rack_rejects_unknown_type() {
        let schema = RackResource.schema();
        let diags = schema.validate(&attrs(json!({"name": "R01", "site_id": 4, "type": "shelf"})));
        assert!(diags.has_errors());
        assert_eq!(diags.iter().next().unwrap().attribute.as_deref(), Some("type"));
    }

    #[tokio::test]
    async fn test_device_create_requires_references() {
        let client = mock_client();
        let mut d = ResourceData::from_config(planned(&DeviceResource, json!({"name": "sw1"}), &AttributeMap::new()));

        let err = DeviceResource.create(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().contains("Unable to create device"));
        assert_eq!(d.id(), "");
    }

    #[tokio::test]
    async fn test_device_create_and_read() {
        let client = mock_client();
        let d = create(
            &DeviceResource,
            &client,
            json!({"name": "sw1", "device_type_id": 2, "device_role_id": 3, "site_id": 4, "face": "front"}),
        )
        .await;

        assert_eq!(client.requests()[0].body["device_role"], json!(3));
        let state = d.state();
        assert_eq!(state["device_role_id"], json!(3));
        assert_eq!(state["status"], json!("active"));
        assert_eq!(state["face"], json!("front"));
    }

    #[test]
    fn test_interface_type_validation() {
        let schema = InterfaceResource.schema();

        let ok = attrs(json!({"device_id": 1, "name": "eth0", "type": "1000base-t"}));
        assert!(!schema.validate(&ok).has_errors());

        let bad = attrs(json!({"device_id": 1, "name": "eth0", "type": "10base-bogus"}));
        let diags = schema.validate(&bad);
        assert!(diags.has_errors());
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.attribute.as_deref(), Some("type"));
        assert_eq!(diag.summary, "Invalid attribute value");
    }

    #[test]
    fn test_interface_computed_fields_cannot_be_set() {
        let schema = InterfaceResource.schema();
        let config = attrs(json!({"device_id": 1, "name": "eth0", "type": "virtual", "cable_id": 9}));
        let diags = schema.validate(&config);
        assert!(diags.has_errors());
        assert_eq!(diags.iter().next().unwrap().attribute.as_deref(), Some("cable_id"));
    }

    #[test]
    fn test_interface_rejects_repeated_tagged_vlans() {
        let schema = InterfaceResource.schema();
        let config = attrs(json!({"device_id": 1, "name": "eth0", "type": "1000base-t", "tagged_vlans": [10, 10]}));
        let diags = schema.validate(&config);
        assert!(diags.has_errors());
        assert_eq!(diags.iter().next().unwrap().attribute.as_deref(), Some("tagged_vlans"));
    }

    #[tokio::test]
    async fn test_interface_tagged_vlans_stable_across_applies() {
        let client = mock_client();
        let config = json!({"device_id": 1, "name": "eth0", "type": "1000base-t", "tagged_vlans": [20, 10]});
        let d = create(&InterfaceResource, &client, config.clone()).await;
        let state = refresh(&InterfaceResource, &client, &d.state()).await.state();

        let d = ResourceData::new(planned(&InterfaceResource, config, &state), state);
        assert!(!d.has_change("tagged_vlans"));
    }

    #[tokio::test]
    async fn test_interface_tagged_vlans_keep_order() {
        let client = mock_client();
        let d = create(
            &InterfaceResource,
            &client,
            json!({
                "device_id": 1,
                "name": "xe-0/0/0",
                "type": "10gbase-x-sfpp",
                "mode": "tagged",
                "tagged_vlans": [30, 10, 20],
                "mtu": 9000
            }),
        )
        .await;

        assert_eq!(client.requests()[0].body["tagged_vlans"], json!([30, 10, 20]));
        let state = d.state();
        assert_eq!(state["tagged_vlans"], json!([30, 10, 20]));
        assert_eq!(state["mode"], json!("tagged"));
        assert_eq!(state["mtu"], json!(9000));
        assert_eq!(state["enabled"], json!(true));
    }

    #[tokio::test]
    async fn test_interface_update_sends_only_changes() {
        let client = mock_client();
        let d = create(
            &InterfaceResource,
            &client,
            json!({"device_id": 1, "name": "eth0", "type": "1000base-t", "enabled": true}),
        )
        .await;

        update(
            &InterfaceResource,
            &client,
            &d.state(),
            json!({"device_id": 1, "name": "eth0", "type": "1000base-t", "enabled": false}),
        )
        .await;

        let patches = client.patch_log();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].body, json!({"enabled": false}));
    }

    #[tokio::test]
    async fn test_region_delete_already_gone_is_an_error() {
        let client = mock_client();
        let d = create(&RegionResource, &client, json!({"name": "Europe", "slug": "eu"})).await;
        client.forget(1);

        let mut d = ResourceData::new(AttributeMap::new(), d.state());
        let err = RegionResource.delete(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().starts_with("Unable to delete region"), "{}", err);
        assert_eq!(d.id(), "1");
    }
}
