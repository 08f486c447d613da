//! `netbox_dcim_region`

use crate::error::ProviderError;
use crate::helpers::{nested_id, non_empty};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableRegion};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegionConfig {
    name: Option<String>,
    slug: Option<String>,
    parent_id: Option<u64>,
    description: Option<String>,
}

pub struct RegionResource;

#[async_trait]
impl Resource for RegionResource {
    fn type_name(&self) -> &'static str {
        "netbox_dcim_region"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "name",
                Attribute::string()
                    .required()
                    .validate(Validator::StringLenBetween { min: 0, max: 50 }),
            )
            .attribute("slug", Attribute::string().required())
            .attribute("parent_id", Attribute::int())
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: RegionConfig = d.decode()?;
        let request = WritableRegion {
            name: cfg.name,
            slug: cfg.slug,
            parent: cfg.parent_id.map(Some),
            description: cfg.description,
        };

        let region = client
            .create_region(&request)
            .await
            .map_err(|e| api_failed("Unable to create region", e))?;
        d.set_id(region.id);
        info!("Created region {} (ID: {})", region.name, region.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let region = match client.get_region(id).await {
            Ok(region) => region,
            Err(e) => return read_failed(d, "region", e),
        };

        d.set("name", region.name.as_str());
        d.set("slug", region.slug.as_str());
        d.set_if_some("parent_id", nested_id(region.parent.as_ref()));
        d.set_if_some("description", non_empty(&region.description));
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: RegionConfig = d.decode()?;
        let request = WritableRegion {
            name: d.changed_or_default("name", cfg.name),
            slug: d.changed_or_default("slug", cfg.slug),
            parent: d.changed("parent_id", cfg.parent_id),
            description: d.changed_or_default("description", cfg.description),
        };

        client
            .update_region(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update region", e))?;
        info!("Updated region {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_region(id).await;
        delete_result(d, "region", result)
    }
}
