//! `netbox_ipam_prefixes` data source

use crate::data_sources::prefix::{flatten_prefix, prefix_attributes};
use crate::data_sources::{DataSource, data_source_schema};
use crate::error::ProviderError;
use crate::helpers::timestamp_id;
use crate::resource_data::ResourceData;
use crate::resources::api_failed;
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::NetBoxClientTrait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PrefixFilters {
    contains: Option<String>,
    family: Option<u8>,
    mask_length: Option<u8>,
    prefix: Option<String>,
    region: Option<String>,
    role: Option<String>,
    site: Option<String>,
    status: Option<String>,
    tag: Option<String>,
    tenant: Option<String>,
    within: Option<String>,
    within_include: Option<String>,
}

impl PrefixFilters {
    /// Query parameters for the filters that are set
    fn query(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("contains", &self.contains),
            ("prefix", &self.prefix),
            ("region", &self.region),
            ("role", &self.role),
            ("site", &self.site),
            ("status", &self.status),
            ("tag", &self.tag),
            ("tenant", &self.tenant),
            ("within", &self.within),
            ("within_include", &self.within_include),
        ];
        let numeric = [("family", self.family), ("mask_length", self.mask_length)];

        text.into_iter()
            .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
            .chain(
                numeric
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }
}

pub struct PrefixesDataSource;

#[async_trait]
impl DataSource for PrefixesDataSource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_prefixes"
    }

    fn schema(&self) -> Schema {
        let mut result = vec![("id", Attribute::int().read_only())];
        result.extend(prefix_attributes());

        data_source_schema()
            .attribute("contains", Attribute::string().describe("Prefixes containing this prefix or address"))
            .attribute("family", Attribute::int().describe("Address family: 4 or 6"))
            .attribute("mask_length", Attribute::int())
            .attribute("prefix", Attribute::string())
            .attribute("region", Attribute::string().describe("Region slug"))
            .attribute("role", Attribute::string().describe("Role slug"))
            .attribute("site", Attribute::string().describe("Site slug"))
            .attribute("status", Attribute::string())
            .attribute("tag", Attribute::string().describe("Tag slug"))
            .attribute("tenant", Attribute::string().describe("Tenant slug"))
            .attribute("within", Attribute::string())
            .attribute("within_include", Attribute::string())
            .attribute("results", Attribute::list_of(result).read_only())
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let filters: PrefixFilters = d.decode()?;
        let query = filters.query();
        let params: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let prefixes = client
            .query_prefixes(&params, true)
            .await
            .map_err(|e| api_failed("Unable to get prefixes", e))?;
        debug!("Found {} prefixes matching {:?}", prefixes.len(), params);

        let results: Vec<Value> = prefixes
            .iter()
            .map(|prefix| {
                let mut values = flatten_prefix(prefix);
                values.insert("id".into(), prefix.id.into());
                Value::Object(values)
            })
            .collect();

        d.set_raw_id(timestamp_id());
        d.set("results", results);
        Ok(())
    }
}
