//! `netbox_ipam_prefix` data source

use crate::data_sources::{DataSource, choice_block, data_source_schema, nested_block, vrf_block};
use crate::error::ProviderError;
use crate::helpers::{flatten_choice, flatten_custom_fields, flatten_nested, flatten_tag_slugs};
use crate::resource_data::ResourceData;
use crate::resources::api_failed;
use crate::schema::{Attribute, AttributeType, Schema};
use async_trait::async_trait;
use netbox_client::{NestedVlan, NetBoxClientTrait, Prefix};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PrefixLookup {
    prefix_id: u64,
}

/// Attributes describing one prefix, shared with `netbox_ipam_prefixes`
pub(crate) fn prefix_attributes() -> Vec<(&'static str, Attribute)> {
    vec![
        ("family", choice_block(Attribute::int())),
        ("prefix", Attribute::string().read_only()),
        ("site", nested_block()),
        ("vrf", vrf_block()),
        ("tenant", nested_block()),
        (
            "vlan",
            Attribute::list_of(vec![
                ("id", Attribute::int().read_only()),
                ("vid", Attribute::int().read_only()),
                ("name", Attribute::string().read_only()),
                ("display_name", Attribute::string().read_only()),
            ])
            .read_only(),
        ),
        ("status", choice_block(Attribute::string())),
        ("role", nested_block()),
        ("is_pool", Attribute::bool().read_only()),
        ("description", Attribute::string().read_only()),
        ("tags", Attribute::list(AttributeType::String).read_only()),
        ("custom_fields", Attribute::map(AttributeType::String).read_only()),
    ]
}

fn flatten_vlan(vlan: Option<&NestedVlan>) -> Value {
    match vlan {
        Some(vlan) => json!([{
            "id": vlan.id,
            "vid": vlan.vid,
            "name": vlan.name,
            "display_name": vlan.display,
        }]),
        None => json!([]),
    }
}

/// One prefix in data-source form
pub(crate) fn flatten_prefix(prefix: &Prefix) -> Map<String, Value> {
    let mut values = Map::new();
    values.insert("family".into(), flatten_choice(prefix.family.as_ref()));
    values.insert("prefix".into(), prefix.prefix.clone().into());
    values.insert("site".into(), flatten_nested(prefix.site.as_ref(), &["id", "name", "slug"]));
    values.insert("vrf".into(), flatten_nested(prefix.vrf.as_ref(), &["id", "name", "rd"]));
    values.insert("tenant".into(), flatten_nested(prefix.tenant.as_ref(), &["id", "name", "slug"]));
    values.insert("vlan".into(), flatten_vlan(prefix.vlan.as_ref()));
    values.insert("status".into(), flatten_choice(prefix.status.as_ref()));
    values.insert("role".into(), flatten_nested(prefix.role.as_ref(), &["id", "name", "slug"]));
    values.insert("is_pool".into(), prefix.is_pool.into());
    values.insert("description".into(), prefix.description.clone().into());
    values.insert("tags".into(), flatten_tag_slugs(&prefix.tags));
    values.insert("custom_fields".into(), flatten_custom_fields(&prefix.custom_fields));
    values
}

pub struct PrefixDataSource;

#[async_trait]
impl DataSource for PrefixDataSource {
    fn type_name(&self) -> &'static str {
        "netbox_ipam_prefix"
    }

    fn schema(&self) -> Schema {
        prefix_attributes().into_iter().fold(
            data_source_schema().attribute("prefix_id", Attribute::int().required()),
            |schema, (name, attr)| schema.attribute(name, attr),
        )
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let lookup: PrefixLookup = d.decode()?;
        let prefix = client
            .get_prefix(lookup.prefix_id)
            .await
            .map_err(|e| api_failed("Unable to get prefix", e))?;
        debug!("Read prefix {} (ID: {})", prefix.prefix, prefix.id);

        d.set_id(prefix.id);
        for (name, value) in flatten_prefix(&prefix) {
            d.set(&name, value);
        }
        Ok(())
    }
}
