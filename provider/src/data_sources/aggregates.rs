//! `netbox_ipam_aggregates` data source

use crate::data_sources::{DataSource, choice_block, data_source_schema};
use crate::error::ProviderError;
use crate::helpers::{flatten_choice, timestamp_id};
use crate::resource_data::ResourceData;
use crate::resources::api_failed;
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::NetBoxClientTrait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AggregateFilters {
    prefix: Option<String>,
    family: Option<u8>,
}

pub struct AggregatesDataSource;

#[async_trait]
impl DataSource for AggregatesDataSource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_aggregates"
    }

    fn schema(&self) -> Schema {
        data_source_schema()
            .attribute("prefix", Attribute::string())
            .attribute("family", Attribute::int().describe("Address family: 4 or 6"))
            .attribute(
                "results",
                Attribute::list_of(vec![
                    ("id", Attribute::int().read_only()),
                    ("family", choice_block(Attribute::int())),
                    ("prefix", Attribute::string().read_only()),
                    ("description", Attribute::string().read_only()),
                ])
                .read_only(),
            )
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let filters: AggregateFilters = d.decode()?;
        let family = filters.family.map(|f| f.to_string());
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(prefix) = filters.prefix.as_deref() {
            params.push(("prefix", prefix));
        }
        if let Some(family) = family.as_deref() {
            params.push(("family", family));
        }

        let aggregates = client
            .query_aggregates(&params, true)
            .await
            .map_err(|e| api_failed("Unable to get aggregates", e))?;
        debug!("Found {} aggregates", aggregates.len());

        let results: Vec<Value> = aggregates
            .iter()
            .map(|aggregate| {
                json!({
                    "id": aggregate.id,
                    "family": flatten_choice(aggregate.family.as_ref()),
                    "prefix": aggregate.prefix,
                    "description": aggregate.description,
                })
            })
            .collect();

        d.set_raw_id(timestamp_id());
        d.set("results", results);
        Ok(())
    }
}
