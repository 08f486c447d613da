//! `netbox_ipam_available_prefix`
//!
//! Carves the first free child prefix of the requested length out of a parent
//! prefix. Every input forces replacement, so update only refreshes; read and
//! delete go through the ordinary prefix endpoint.

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema};
use crate::validation::Validator;
use async_trait::async_trait;
use ipnet::IpNet;
use netbox_client::NetBoxClientTrait;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct AvailablePrefixConfig {
    prefix_id: u64,
    prefix_length: u8,
}

pub struct AvailablePrefixResource;

#[async_trait]
impl Resource for AvailablePrefixResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_available_prefix"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "prefix_id",
                Attribute::int()
                    .required()
                    .force_new()
                    .describe("Parent prefix to allocate from"),
            )
            .attribute(
                "prefix_length",
                Attribute::int()
                    .required()
                    .force_new()
                    .validate(Validator::IntBetween { min: 0, max: 128 }),
            )
            .attribute("prefix", Attribute::string().read_only())
            .attribute("family", Attribute::int().read_only())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: AvailablePrefixConfig = d.decode()?;

        let prefix = client
            .create_available_prefix(cfg.prefix_id, cfg.prefix_length)
            .await
            .map_err(|e| api_failed("Unable to create available prefix", e))?;
        d.set_id(prefix.id);
        info!(
            "Allocated prefix {} (ID: {}) from prefix {}",
            prefix.prefix, prefix.id, cfg.prefix_id
        );

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let prefix = match client.get_prefix(id).await {
            Ok(prefix) => prefix,
            Err(e) => return read_failed(d, "available prefix", e),
        };

        d.set("prefix", prefix.prefix.as_str());
        if let Ok(net) = prefix.prefix.parse::<IpNet>() {
            d.set("prefix_length", net.prefix_len());
        }
        d.set_if_some("family", prefix.family.as_ref().map(|f| f.value));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_prefix(id).await;
        delete_result(d, "available prefix", result)
    }
}
