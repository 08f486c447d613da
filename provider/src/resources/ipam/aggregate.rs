//! `netbox_ipam_aggregates` resource

use crate::error::ProviderError;
use crate::helpers::{nested_id, non_empty};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableAggregate};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AggregateConfig {
    prefix: Option<String>,
    rir_id: Option<u64>,
    description: Option<String>,
}

pub struct AggregateResource;

#[async_trait]
impl Resource for AggregateResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_aggregates"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "prefix",
                Attribute::string().required().validate(Validator::IsCidr),
            )
            .attribute("rir_id", Attribute::int())
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("family", Attribute::string().read_only())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: AggregateConfig = d.decode()?;
        let request = WritableAggregate {
            prefix: cfg.prefix,
            rir: cfg.rir_id,
            description: cfg.description,
        };

        let aggregate = client
            .create_aggregate(&request)
            .await
            .map_err(|e| api_failed("Unable to create aggregate", e))?;
        d.set_id(aggregate.id);
        info!("Created aggregate {} (ID: {})", aggregate.prefix, aggregate.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let aggregate = match client.get_aggregate(id).await {
            Ok(aggregate) => aggregate,
            Err(e) => return read_failed(d, "aggregate", e),
        };

        d.set("prefix", aggregate.prefix.as_str());
        d.set_if_some("rir_id", nested_id(aggregate.rir.as_ref()));
        d.set_if_some("description", non_empty(&aggregate.description));
        d.set_if_some(
            "family",
            aggregate.family.as_ref().map(|f| f.label.as_str()).and_then(non_empty),
        );
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: AggregateConfig = d.decode()?;
        let request = WritableAggregate {
            prefix: d.changed_or_default("prefix", cfg.prefix),
            rir: d.changed("rir_id", cfg.rir_id).flatten(),
            description: d.changed_or_default("description", cfg.description),
        };

        client
            .update_aggregate(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update aggregate", e))?;
        info!("Updated aggregate {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_aggregate(id).await;
        delete_result(d, "aggregate", result)
    }
}
