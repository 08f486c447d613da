//! `netbox_circuits_circuit`

use crate::choices::CIRCUIT_STATUSES;
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
use netbox_client::{NetBoxClientTrait, WritableCircuit};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CircuitConfig {
    cid: Option<String>,
    type_id: Option<u64>,
    provider_id: Option<u64>,
    status: Option<String>,
    tenant_id: Option<u64>,
    commit_rate: Option<u64>,
    description: Option<String>,
    comments: Option<String>,
    install_date: Option<String>,
    tags: Option<Vec<Value>>,
    custom_fields: Option<BTreeMap<String, String>>,
}

pub struct CircuitResource;

#[async_trait]
impl Resource for CircuitResource {
    fn type_name(&self) -> &'static str {
        "netbox_circuits_circuit"
    }

    fn schema(&self) -> Schema {
        Schema::resource()
            .attribute("cid", Attribute::string().required().describe("Circuit ID"))
            .attribute("type_id", Attribute::int().required())
            .attribute("provider_id", Attribute::int().required())
            .attribute(
                "status",
                Attribute::string().validate(Validator::StringInSlice(CIRCUIT_STATUSES)),
            )
            .attribute("tenant_id", Attribute::int())
            .attribute("commit_rate", Attribute::int().describe("Commit rate in Kbps"))
            .attribute(
                "description",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute(
                "comments",
                Attribute::string().validate(Validator::StringLenBetween { min: 0, max: 200 }),
            )
            .attribute("install_date", Attribute::string().validate(Validator::IsDate))
            .attribute("tags", tags())
            .attribute("custom_fields", custom_fields())
    }

    async fn create(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let cfg: CircuitConfig = d.decode()?;
        let request = WritableCircuit {
            cid: cfg.cid,
            provider: cfg.provider_id,
            circuit_type: cfg.type_id,
            status: cfg.status,
            tenant: cfg.tenant_id.map(Some),
            install_date: cfg.install_date.map(Some),
            commit_rate: cfg.commit_rate.map(Some),
            description: cfg.description,
            comments: cfg.comments,
            tags: cfg.tags.as_deref().map(expand_tags),
            custom_fields: cfg.custom_fields.as_ref().map(expand_custom_fields),
        };

        let circuit = client
            .create_circuit(&request)
            .await
            .map_err(|e| api_failed("Unable to create circuit", e))?;
        d.set_id(circuit.id);
        info!("Created circuit {} (ID: {})", circuit.cid, circuit.id);

        self.read(client, d).await
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let circuit = match client.get_circuit(id).await {
            Ok(circuit) => circuit,
            Err(e) => return read_failed(d, "circuit", e),
        };

        d.set("cid", circuit.cid.as_str());
        d.set("type_id", circuit.circuit_type.id);
        d.set("provider_id", circuit.provider.id);
        d.set_if_some("status", choice_value(circuit.status.as_ref()));
        d.set_if_some("tenant_id", nested_id(circuit.tenant.as_ref()));
        d.set_if_some("commit_rate", circuit.commit_rate);
        d.set_if_some("description", non_empty(&circuit.description));
        d.set_if_some("comments", non_empty(&circuit.comments));
        d.set_if_some("install_date", circuit.install_date.as_deref().and_then(non_empty));
        d.set("tags", flatten_tags(&circuit.tags));
        if !circuit.custom_fields.is_empty() {
            d.set("custom_fields", flatten_custom_fields(&circuit.custom_fields));
        }
        Ok(())
    }

    async fn update(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let cfg: CircuitConfig = d.decode()?;
        let request = WritableCircuit {
            cid: d.changed_or_default("cid", cfg.cid),
            provider: d.changed("provider_id", cfg.provider_id).flatten(),
            circuit_type: d.changed("type_id", cfg.type_id).flatten(),
            status: d.changed("status", cfg.status).flatten(),
            tenant: d.changed("tenant_id", cfg.tenant_id),
            install_date: d.changed("install_date", cfg.install_date),
            commit_rate: d.changed("commit_rate", cfg.commit_rate),
            description: d.changed_or_default("description", cfg.description),
            comments: d.changed_or_default("comments", cfg.comments),
            tags: d.changed_or_default("tags", cfg.tags.as_deref().map(expand_tags)),
            custom_fields: d.changed_or_default(
                "custom_fields",
                cfg.custom_fields.as_ref().map(expand_custom_fields),
            ),
        };

        client
            .update_circuit(id, &request)
            .await
            .map_err(|e| api_failed("Unable to update circuit", e))?;
        info!("Updated circuit {}", id);

        self.read(client, d).await
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, d: &mut ResourceData) -> Result<(), ProviderError> {
        let id = d.parse_id()?;
        let result = client.delete_circuit(id).await;
        delete_result(d, "circuit", result)
    }
}
