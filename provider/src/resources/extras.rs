//! Extras resources

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableTag};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TagConfig {
    name: Option<String>,
    slug: Option<String>,
    color: Option<String>,
    description: Option<String>,
}

/// `netbox_tag`
///
/// NetBox picks a color when none is configured, so `color` and
/// `description` are both computed.
pub struct TagResource;

#[async_trait]
impl Resource for TagResource {
    fn type_name(&self) -> &'static str {
        "netbox_tag"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("name", Attribute::string().required())
            .attribute("slug", Attribute::string().required())
            .attribute(
                "color",
                Attribute::string()
                    .computed()
                    .describe("RGB color in hexadecimal, e.g. 9e9e9e"),
            )
            .attribute("description", Attribute::string().computed())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: TagConfig = d.decode()?;
        let request = WritableTag {
            name: cfg.name,
            slug: cfg.slug,
            color: cfg.color,
            description: cfg.description,
        };

        let tag = client
            .create_tag(&request)
            .await
            .map_err(|e| api_failed("Unable to create tag", e))?;
        d.set_id(tag.id);
        info!("Created tag {} (ID: {})", tag.name, tag.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let tag = match client.get_tag(id).await {
            Ok(tag) => tag,
            Err(e) => return read_failed(d, "tag", e),
        };

        d.set("name", tag.name.as_str());
        d.set("slug", tag.slug.as_str());
        d.set("color", tag.color.as_str());
        d.set("description", tag.description.as_str());
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: TagConfig = d.decode()?;
        // Computed attributes left out of the configuration keep their upstream value
        let request = WritableTag {
            name: d.changed_or_default("name", cfg.name),
            slug: d.changed_or_default("slug", cfg.slug),
            color: d.changed("color", cfg.color).flatten(),
            description: d.changed("description", cfg.description).flatten(),
        };

        client
            .update_tag(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update tag", e))?;
        info!("Updated tag {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_tag(id).await;
        delete_result(d, "tag", result)
    }
}
