//! `netbox_ipam_available_prefixes` data source

use crate::data_sources::{DataSource, data_source_schema, vrf_block};
use crate::error::ProviderError;
use crate::helpers::{flatten_nested, timestamp_id};
use crate::resource_data::ResourceData;
use crate::resources::api_failed;
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::NetBoxClientTrait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AvailablePrefixesLookup {
    prefix_id: u64,
}

pub struct AvailablePrefixesDataSource;

#[async_trait]
impl DataSource for AvailablePrefixesDataSource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_available_prefixes"
    }

    fn schema(&self) -> Schema {
        data_source_schema()
            .attribute("prefix_id", Attribute::int().required())
            .attribute(
                "prefixes",
                Attribute::list_of(vec![
                    ("family", Attribute::int().read_only()),
                    ("prefix", Attribute::string().read_only()),
                    ("vrf", vrf_block()),
                ])
                .read_only(),
            )
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let lookup: AvailablePrefixesLookup = d.decode()?;
        let available = client
            .get_available_prefixes(lookup.prefix_id)
            .await
            .map_err(|e| api_failed("Unable to get available prefixes", e))?;
        debug!("Prefix {} has {} free blocks", lookup.prefix_id, available.len());

        let prefixes: Vec<Value> = available
            .iter()
            .map(|block| {
                json!({
                    "family": block.family,
                    "prefix": block.prefix,
                    "vrf": flatten_nested(block.vrf.as_ref(), &["id", "name", "rd"]),
                })
            })
            .collect();

        d.set_raw_id(timestamp_id());
        d.set("prefixes", prefixes);
        Ok(())
    }
}
