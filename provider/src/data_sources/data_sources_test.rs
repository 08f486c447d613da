//! Unit tests for the data sources

#[cfg(test)]
mod tests {
    use crate::data_sources::{
        AggregatesDataSource, AvailablePrefixesDataSource, DataSource, PrefixDataSource, PrefixesDataSource, all,
    };
    use crate::resource_data::ResourceData;
    use crate::test_utils::*;
    use netbox_client::{Aggregate, ChoiceField, NestedTag, NestedVrf};
    use serde_json::{Value, json};

    async fn read(data_source: &dyn DataSource, client: &netbox_client::MockNetBoxClient, config: Value) -> ResourceData {
        let mut d = ResourceData::from_config(attrs(config));
        data_source.read(client, &mut d).await.expect("read should succeed");
        d
    }

    fn test_aggregate(id: u64, cidr: &str) -> Aggregate {
        Aggregate {
            id,
            family: Some(if cidr.contains(':') {
                ChoiceField::new(6, "IPv6")
            } else {
                ChoiceField::new(4, "IPv4")
            }),
            prefix: cidr.to_string(),
            description: format!("aggregate {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_registry_type_names() {
        let names: Vec<_> = all().iter().map(|ds| ds.type_name()).collect();
        assert_eq!(
            names,
            vec![
                "netbox_ipam_aggregates",
                "netbox_ipam_available_prefixes",
                "netbox_ipam_prefix",
                "netbox_ipam_prefixes"
            ]
        );
    }

    #[tokio::test]
    async fn test_prefix_uses_prefix_id_as_identifier() {
        let client = mock_client();
        let mut prefix = create_test_prefix(12, "10.20.0.0/16");
        prefix.vrf = Some(NestedVrf {
            id: 3,
            name: "blue".to_string(),
            rd: Some("65000:3".to_string()),
            ..Default::default()
        });
        prefix.tags = vec![NestedTag {
            id: 1,
            name: "Prod".to_string(),
            slug: "prod".to_string(),
            ..Default::default()
        }];
        client.add_prefix(prefix);

        let d = read(&PrefixDataSource, &client, json!({"prefix_id": 12})).await;
        let state = d.state();
        assert_eq!(d.id(), "12");
        assert_eq!(state["prefix"], json!("10.20.0.0/16"));
        assert_eq!(state["family"], json!([{"value": 4, "label": "IPv4"}]));
        assert_eq!(state["status"], json!([{"value": "active", "label": "Active"}]));
        assert_eq!(state["vrf"], json!([{"id": 3, "name": "blue", "rd": "65000:3"}]));
        assert_eq!(state["site"], json!([]));
        assert_eq!(state["tags"], json!(["prod"]));
        assert_eq!(state["is_pool"], json!(false));
    }

    #[tokio::test]
    async fn test_prefix_lookup_failure() {
        let client = mock_client();
        let mut d = ResourceData::from_config(attrs(json!({"prefix_id": 99})));
        let err = PrefixDataSource.read(&client, &mut d).await.unwrap_err();
        assert!(err.to_string().starts_with("Unable to get prefix"));
    }

    #[tokio::test]
    async fn test_prefixes_filters() {
        let client = mock_client();
        client.add_prefix(create_test_prefix(1, "10.0.0.0/16"));
        client.add_prefix(create_test_prefix(2, "10.0.1.0/24"));
        client.add_prefix(create_test_prefix(3, "10.0.2.0/24"));
        client.add_prefix(create_test_prefix(4, "2001:db8::/48"));

        let d = read(&PrefixesDataSource, &client, json!({"within": "10.0.0.0/16"})).await;
        let results = d.state()["results"].as_array().cloned().unwrap();
        let ids: Vec<_> = results.iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!(2), json!(3)]);
        assert!(!d.id().is_empty());

        let d = read(&PrefixesDataSource, &client, json!({"family": 6})).await;
        assert_eq!(d.state()["results"][0]["prefix"], json!("2001:db8::/48"));

        let d = read(&PrefixesDataSource, &client, json!({"mask_length": 24, "contains": "10.0.2.17"})).await;
        assert_eq!(d.state()["results"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_prefixes_empty_result() {
        let client = mock_client();
        let d = read(&PrefixesDataSource, &client, json!({"site": "nowhere"})).await;
        assert_eq!(d.state()["results"], json!([]));
    }

    #[tokio::test]
    async fn test_aggregates_family_filter() {
        let client = mock_client();
        client.add_aggregate(test_aggregate(1, "10.0.0.0/8"));
        client.add_aggregate(test_aggregate(2, "2001:db8::/32"));

        let d = read(&AggregatesDataSource, &client, json!({"family": 4})).await;
        assert_eq!(
            d.state()["results"],
            json!([{
                "id": 1,
                "family": [{"value": 4, "label": "IPv4"}],
                "prefix": "10.0.0.0/8",
                "description": "aggregate 1"
            }])
        );
    }

    #[tokio::test]
    async fn test_available_prefixes() {
        let client = mock_client();
        client.add_prefix(create_test_prefix(100, "10.0.0.0/22"));
        client.add_prefix(create_test_prefix(101, "10.0.0.0/24"));

        let d = read(&AvailablePrefixesDataSource, &client, json!({"prefix_id": 100})).await;
        assert_eq!(
            d.state()["prefixes"],
            json!([
                {"family": 4, "prefix": "10.0.1.0/24", "vrf": []},
                {"family": 4, "prefix": "10.0.2.0/23", "vrf": []}
            ])
        );
    }

    #[test]
    fn test_results_cannot_be_configured() {
        let schema = PrefixesDataSource.schema();
        let diags = schema.validate(&attrs(json!({"results": []})));
        assert!(diags.has_errors());
    }
}
