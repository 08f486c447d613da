//! `netbox_dcim_site`

use crate::choices::SITE_STATUSES;
use crate::error::ProviderError;
use crate::helpers::{
    choice_value, expand_custom_fields, expand_tags, flatten_custom_fields, flatten_tags, nested_id,
    non_empty,
};
use crate::resource_data::ResourceData;
use crate::resources::{Resource, api_failed, delete_result, read_failed};
use crate::schema::{Attribute, Schema, custom_fields, tags};
use crate::validation::Validator;
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, WritableSite};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteConfig {
    name: Option<String>,
    slug: Option<String>,
    status: Option<String>,
    region_id: Option<u64>,
    tenant_id: Option<u64>,
    facility: Option<String>,
    asn_id: Option<u64>,
    time_zone: Option<String>,
    description: Option<String>,
    physical_address: Option<String>,
    shipping_address: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    contact_name: Option<String>,
    contact_phone: Option<String>,
    contact_email: Option<String>,
    comments: Option<String>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

/// Coordinates are strings in state and decimals on the wire
fn parse_coordinate(name: &str, value: Option<String>) -> Result<Option<f64>, ProviderError> {
    value
        .map(|text| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| ProviderError::AttributeType(format!("{} must be a decimal number, got {:?}", name, text)))
        })
        .transpose()
}

/// Keep the configured spelling when it is numerically what NetBox returned
fn coordinate_state(current: Option<&Value>, upstream: Option<f64>) -> Option<String> {
    let upstream = upstream?;
    match current.and_then(Value::as_str) {
        Some(text) if text.trim().parse::<f64>().is_ok_and(|v| v == upstream) => Some(text.to_string()),
        _ => Some(format!("{:.6}", upstream)),
    }
}

pub struct SiteResource;

#[async_trait]
impl Resource for SiteResource {
    fn type_name(&self) -> &'static str {
        "netbox_dcim_site"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute(
                "name",
                Attribute::string()
                    .required()
                    .validate(Validator::StringLenBetween { min: 0, max: 100 }),
            )
            .attribute("slug", Attribute::string().required())
            .attribute(
                "status",
                Attribute::string().validate(Validator::StringInSlice(SITE_STATUSES)),
            )
            .attribute("region_id", Attribute::int())
            .attribute("tenant_id", Attribute::int())
            .attribute("facility", Attribute::string())
            .attribute("asn_id", Attribute::int().describe("Site ASN number"))
            .attribute("time_zone", Attribute::string())
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute(
                "physical_address",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute(
                "shipping_address",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute(
                "latitude",
                Attribute::string().validate(Validator::StringLenBetween { min: 9, max: 9 }),
            )
            .attribute(
                "longitude",
                Attribute::string().validate(Validator::StringLenBetween { min: 9, max: 9 }),
            )
            .attribute(
                "contact_name",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 50 }),
            )
            .attribute(
                "contact_phone",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 20 }),
            )
            .attribute(
                "contact_email",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 254 }),
            )
            .attribute(
                "comments",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: SiteConfig = d.decode()?;
        let request = WritableSite {
            name: cfg.name,
            slug: cfg.slug,
            status: cfg.status,
            region: cfg.region_id.map(Some),
            tenant: cfg.tenant_id.map(Some),
            facility: cfg.facility,
            asn: cfg.asn_id.map(Some),
            time_zone: cfg.time_zone.map(Some),
            description: cfg.description,
            physical_address: cfg.physical_address,
            shipping_address: cfg.shipping_address,
            latitude: parse_coordinate("latitude", cfg.latitude)?.map(Some),
            longitude: parse_coordinate("longitude", cfg.longitude)?.map(Some),
            contact_name: cfg.contact_name,
            contact_phone: cfg.contact_phone,
            contact_email: cfg.contact_email,
            comments: cfg.comments,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let site = client
            .create_site(&request)
            .await
            .map_err(|e| api_failed("Unable to create site", e))?;
        d.set_id(site.id);
        info!("Created site {} (ID: {})", site.name, site.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let site = match client.get_site(id).await {
            Ok(site) => site,
            Err(e) => return read_failed(d, "site", e),
        };

        d.set("name", site.name.as_str());
        d.set("slug", site.slug.as_str());
        d.set_if_some("status", choice_value(site.status.as_ref()));
        d.set_if_some("region_id", nested_id(site.region.as_ref()));
        d.set_if_some("tenant_id", nested_id(site.tenant.as_ref()));
        d.set_if_some("facility", non_empty(&site.facility));
        d.set_if_some("asn_id", site.asn);
        d.set_if_some("time_zone", site.time_zone.as_deref().and_then(non_empty));
        d.set_if_some("description", non_empty(&site.description));
        d.set_if_some("physical_address", non_empty(&site.physical_address));
        d.set_if_some("shipping_address", non_empty(&site.shipping_address));
        let latitude = coordinate_state(d.get("latitude"), site.latitude);
        d.set_if_some("latitude", latitude);
        let longitude = coordinate_state(d.get("longitude"), site.longitude);
        d.set_if_some("longitude", longitude);
        d.set_if_some("contact_name", non_empty(&site.contact_name));
        d.set_if_some("contact_phone", non_empty(&site.contact_phone));
        d.set_if_some("contact_email", non_empty(&site.contact_email));
        d.set_if_some("comments", non_empty(&site.comments));
        d.set("tags", flatten_tags(&site.tags));
        if !site.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&site.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: SiteConfig = d.decode()?;
        let latitude = parse_coordinate("latitude", cfg.latitude)?;
        let longitude = parse_coordinate("longitude", cfg.longitude)?;
        let request = WritableSite {
            name: d.changed_or_default("name", cfg.name),
            slug: d.changed_or_default("slug", cfg.slug),
            status: d.changed("status", cfg.status).flatten(),
            region: d.changed("region_id", cfg.region_id),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            facility: d.changed_or_default("facility", cfg.facility),
            asn: d.changed("asn_id", cfg.asn_id),
            time_zone: d.changed("time_zone", cfg.time_zone),
            description: d.changed_or_default("description", cfg.description),
            physical_address: d.changed_or_default("physical_address", cfg.physical_address),
            shipping_address: d.changed_or_default("shipping_address", cfg.shipping_address),
            latitude: d.changed("latitude", latitude),
            longitude: d.changed("longitude", longitude),
            contact_name: d.changed_or_default("contact_name", cfg.contact_name),
            contact_phone: d.changed_or_default("contact_phone", cfg.contact_phone),
            contact_email: d.changed_or_default("contact_email", cfg.contact_email),
            comments: d.changed_or_default("comments", cfg.comments),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_site(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update site", e))?;
        info!("Updated site {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_site(id).await;
        delete_result(d, "site", result)
    }
}
