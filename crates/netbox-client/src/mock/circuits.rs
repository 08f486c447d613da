//! Circuits operations for MockNetBoxClient

use super::helpers::{Helpers, assign, assign_choice, assign_nullable, assign_ref};
use super::{MockNetBoxClient, delete_from, get_from, lock, update_in};
use crate::error::NetBoxError;
use crate::models::*;

fn apply_circuit(h: &Helpers, circuit: &mut Circuit, w: &WritableCircuit) {
    assign(&mut circuit.cid, &w.cid);
    if let Some(id) = w.provider {
        circuit.provider = h.nested_ref("circuits/providers", "Provider", id);
    }
    if let Some(id) = w.circuit_type {
        circuit.circuit_type = h.nested_ref("circuits/circuit-types", "Circuit Type", id);
    }
    assign_choice(&mut circuit.status, &w.status);
    assign_ref(&mut circuit.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign_nullable(&mut circuit.install_date, &w.install_date);
    assign_nullable(&mut circuit.commit_rate, &w.commit_rate);
    assign(&mut circuit.description, &w.description);
    assign(&mut circuit.comments, &w.comments);
    if let Some(tags) = &w.tags {
        circuit.tags = h.resolve_tags(tags);
    }
    assign(&mut circuit.custom_fields, &w.custom_fields);
    circuit.display = circuit.cid.clone();
}

pub async fn get_circuit(client: &MockNetBoxClient, id: u64) -> Result<Circuit, NetBoxError> {
    client.check_failure()?;
    get_from(&client.circuits, id, "Circuit")
}

pub async fn create_circuit(client: &MockNetBoxClient, request: &WritableCircuit) -> Result<Circuit, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/circuits/circuits/".to_string(), request)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut circuit = Circuit {
        id,
        url: h.object_url("circuits/circuits", id),
        ..Default::default()
    };
    apply_circuit(&h, &mut circuit, request);

    lock(&client.circuits).insert(id, circuit.clone());
    Ok(circuit)
}

pub async fn update_circuit(client: &MockNetBoxClient, id: u64, request: &WritableCircuit) -> Result<Circuit, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/circuits/circuits/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.circuits, id, "Circuit", |circuit| apply_circuit(&h, circuit, request))
}

pub async fn delete_circuit(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.circuits, id, "Circuit")
}

fn apply_provider(h: &Helpers, provider: &mut CircuitProvider, w: &WritableCircuitProvider) {
    assign(&mut provider.name, &w.name);
    assign(&mut provider.slug, &w.slug);
    assign_nullable(&mut provider.asn, &w.asn);
    assign(&mut provider.account, &w.account);
    assign(&mut provider.portal_url, &w.portal_url);
    assign(&mut provider.noc_contact, &w.noc_contact);
    assign(&mut provider.admin_contact, &w.admin_contact);
    assign(&mut provider.comments, &w.comments);
    if let Some(tags) = &w.tags {
        provider.tags = h.resolve_tags(tags);
    }
    assign(&mut provider.custom_fields, &w.custom_fields);
    provider.display = provider.name.clone();
}

pub async fn get_circuit_provider(client: &MockNetBoxClient, id: u64) -> Result<CircuitProvider, NetBoxError> {
    client.check_failure()?;
    get_from(&client.circuit_providers, id, "Provider")
}

pub async fn create_circuit_provider(
    client: &MockNetBoxClient,
    request: &WritableCircuitProvider,
) -> Result<CircuitProvider, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/circuits/providers/".to_string(), request)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut provider = CircuitProvider {
        id,
        url: h.object_url("circuits/providers", id),
        ..Default::default()
    };
    apply_provider(&h, &mut provider, request);

    lock(&client.circuit_providers).insert(id, provider.clone());
    Ok(provider)
}

pub async fn update_circuit_provider(
    client: &MockNetBoxClient,
    id: u64,
    request: &WritableCircuitProvider,
) -> Result<CircuitProvider, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/circuits/providers/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.circuit_providers, id, "Provider", |provider| {
        apply_provider(&h, provider, request)
    })
}

pub async fn delete_circuit_provider(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.circuit_providers, id, "Provider")
}
