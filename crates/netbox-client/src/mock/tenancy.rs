//! Tenancy operations for MockNetBoxClient

use super::helpers::{assign, assign_ref};
use super::{MockNetBoxClient, delete_from, get_from, lock, update_in};
use crate::error::NetBoxError;
use crate::models::*;

fn apply_tenant(client: &MockNetBoxClient, tenant: &mut Tenant, w: &WritableTenant) {
    let h = client.helpers();
    assign(&mut tenant.name, &w.name);
    assign(&mut tenant.slug, &w.slug);
    assign_ref(&mut tenant.group, &w.group, |id| {
        h.nested_ref("tenancy/tenant-groups", "Tenant Group", id)
    });
    assign(&mut tenant.description, &w.description);
    assign(&mut tenant.comments, &w.comments);
    if let Some(tags) = &w.tags {
        tenant.tags = h.resolve_tags(tags);
    }
    assign(&mut tenant.custom_fields, &w.custom_fields);
    tenant.display = tenant.name.clone();
}

pub async fn get_tenant(client: &MockNetBoxClient, id: u64) -> Result<Tenant, NetBoxError> {
    client.check_failure()?;
    get_from(&client.tenants, id, "Tenant")
}

pub async fn create_tenant(client: &MockNetBoxClient, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/tenancy/tenants/".to_string(), request)?;

    let id = client.next_id();
    let mut tenant = Tenant {
        id,
        url: client.helpers().object_url("tenancy/tenants", id),
        ..Default::default()
    };
    apply_tenant(client, &mut tenant, request);

    lock(&client.tenants).insert(id, tenant.clone());
    Ok(tenant)
}

pub async fn update_tenant(client: &MockNetBoxClient, id: u64, request: &WritableTenant) -> Result<Tenant, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/tenancy/tenants/{}/", id), request)?;
    update_in(&client.tenants, id, "Tenant", |tenant| apply_tenant(client, tenant, request))
}

pub async fn delete_tenant(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.tenants, id, "Tenant")
}
