//! `netbox_ipam_rir`

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableRir};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RirConfig {
    name: Option<String>,
    slug: Option<String>,
}

pub struct RirResource;

#[async_trait]
impl Resource for RirResource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_rir"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: RirConfig = d.decode()?;
        let request = WritableRir {
            name: cfg.name,
            slug: cfg.slug,
        };

        let rir = client
            .create_rir(&request)
            .await
            .map_err(|e| api_failed("Unable to create RIR", e))?;
        d.set_id(rir.id);
        info!("Created RIR {} (ID: {})", rir.name, rir.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let rir = match client.get_rir(id).await {
            Ok(rir) => rir,
            Err(e) => return read_failed(d, "RIR", e),
        };

        d.set("name", rir.name.as_str());
        d.set("slug", rir.slug.as_str());
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: RirConfig = d.decode()?;
        let request = WritableRir {
            name: d.changed_or_default("name", cfg.name),
            slug: d.changed_or_default("slug", cfg.slug),
        };

        client
            .update_rir(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update RIR", e))?;
        info!("Updated RIR {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_rir(id).await;
        delete_result(d, "RIR", result)
    }
}
