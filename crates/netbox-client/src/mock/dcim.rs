//! DCIM operations for MockNetBoxClient
//!
//! Handles sites, racks, devices, interfaces, and regions

use super::helpers::{Helpers, assign, assign_choice, assign_nullable, assign_ref, choice};
use super::{MockNetBoxClient, delete_from, get_from, lock, update_in};
use crate::error::NetBoxError;
use crate::models::*;

fn now() -> Option<String> {
    Some(chrono::Utc::now().to_rfc3339())
}

fn apply_site(h: &Helpers, site: &mut Site, w: &WritableSite) {
    assign(&mut site.name, &w.name);
    assign(&mut site.slug, &w.slug);
    assign_choice(&mut site.status, &w.status);
    assign_ref(&mut site.region, &w.region, |id| h.nested_ref("dcim/regions", "Region", id));
    assign_ref(&mut site.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign(&mut site.facility, &w.facility);
    assign_nullable(&mut site.asn, &w.asn);
    assign_nullable(&mut site.time_zone, &w.time_zone);
    assign(&mut site.description, &w.description);
    assign(&mut site.physical_address, &w.physical_address);
    assign(&mut site.shipping_address, &w.shipping_address);
    assign_nullable(&mut site.latitude, &w.latitude);
    assign_nullable(&mut site.longitude, &w.longitude);
    assign(&mut site.contact_name, &w.contact_name);
    assign(&mut site.contact_phone, &w.contact_phone);
    assign(&mut site.contact_email, &w.contact_email);
    assign(&mut site.comments, &w.comments);
    if let Some(tags) = &w.tags {
        site.tags = h.resolve_tags(tags);
    }
    assign(&mut site.custom_fields, &w.custom_fields);
    site.display = site.name.clone();
}

pub async fn get_site(client: &MockNetBoxClient, id: u64) -> Result<Site, NetBoxError> {
    client.check_failure()?;
    get_from(&client.sites, id, "Site")
}

pub async fn create_site(client: &MockNetBoxClient, request: &WritableSite) -> Result<Site, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/dcim/sites/".to_string(), request)?;
    if request.name.is_none() || request.slug.is_none() {
        return Err(NetBoxError::Api(
            "POST /dcim/sites/ failed: 400 Bad Request - name and slug are required".to_string(),
        ));
    }

    let id = client.next_id();
    let h = client.helpers();
    let mut site = Site {
        id,
        url: h.object_url("dcim/sites", id),
        status: Some(choice("active")),
        created: now(),
        last_updated: now(),
        ..Default::default()
    };
    apply_site(&h, &mut site, request);

    lock(&client.sites).insert(id, site.clone());
    Ok(site)
}

pub async fn update_site(client: &MockNetBoxClient, id: u64, request: &WritableSite) -> Result<Site, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/dcim/sites/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.sites, id, "Site", |site| {
        apply_site(&h, site, request);
        site.last_updated = now();
    })
}

pub async fn delete_site(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.sites, id, "Site")
}

fn apply_rack(h: &Helpers, rack: &mut Rack, w: &WritableRack) {
    assign(&mut rack.name, &w.name);
    assign_nullable(&mut rack.facility_id, &w.facility_id);
    if let Some(site) = w.site {
        rack.site = h.nested_ref("dcim/sites", "Site", site);
    }
    assign_ref(&mut rack.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign_choice(&mut rack.status, &w.status);
    assign_ref(&mut rack.role, &w.role, |id| h.nested_ref("dcim/rack-roles", "Rack Role", id));
    assign(&mut rack.serial, &w.serial);
    assign_nullable(&mut rack.asset_tag, &w.asset_tag);
    assign_choice(&mut rack.rack_type, &w.rack_type);
    if let Some(width) = w.width {
        rack.width = Some(ChoiceField::new(width, format!("{} inches", width)));
    }
    assign(&mut rack.u_height, &w.u_height);
    assign(&mut rack.desc_units, &w.desc_units);
    assign_nullable(&mut rack.outer_width, &w.outer_width);
    assign_nullable(&mut rack.outer_depth, &w.outer_depth);
    assign_choice(&mut rack.outer_unit, &w.outer_unit);
    assign(&mut rack.comments, &w.comments);
    if let Some(tags) = &w.tags {
        rack.tags = h.resolve_tags(tags);
    }
    assign(&mut rack.custom_fields, &w.custom_fields);
    rack.display = rack.name.clone();
}

pub async fn get_rack(client: &MockNetBoxClient, id: u64) -> Result<Rack, NetBoxError> {
    client.check_failure()?;
    get_from(&client.racks, id, "Rack")
}

pub async fn create_rack(client: &MockNetBoxClient, request: &WritableRack) -> Result<Rack, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/dcim/racks/".to_string(), request)?;
    if request.name.is_none() || request.site.is_none() {
        return Err(NetBoxError::Api(
            "POST /dcim/racks/ failed: 400 Bad Request - name and site are required".to_string(),
        ));
    }

    let id = client.next_id();
    let h = client.helpers();
    let mut rack = Rack {
        id,
        url: h.object_url("dcim/racks", id),
        status: Some(choice("active")),
        u_height: 42,
        ..Default::default()
    };
    apply_rack(&h, &mut rack, request);

    lock(&client.racks).insert(id, rack.clone());
    Ok(rack)
}

pub async fn update_rack(client: &MockNetBoxClient, id: u64, request: &WritableRack) -> Result<Rack, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/dcim/racks/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.racks, id, "Rack", |rack| apply_rack(&h, rack, request))
}

pub async fn delete_rack(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.racks, id, "Rack")
}

fn apply_device(h: &Helpers, device: &mut Device, w: &WritableDevice) {
    assign_nullable(&mut device.name, &w.name);
    if let Some(id) = w.device_type {
        device.device_type = h.nested_ref("dcim/device-types", "Device Type", id);
    }
    if let Some(id) = w.device_role {
        device.device_role = h.nested_ref("dcim/device-roles", "Device Role", id);
    }
    if let Some(id) = w.site {
        device.site = h.nested_ref("dcim/sites", "Site", id);
    }
    assign_ref(&mut device.rack, &w.rack, |id| h.nested_ref("dcim/racks", "Rack", id));
    assign_nullable(&mut device.position, &w.position);
    assign_choice(&mut device.face, &w.face);
    assign_ref(&mut device.platform, &w.platform, |id| h.nested_ref("dcim/platforms", "Platform", id));
    assign_ref(&mut device.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign(&mut device.serial, &w.serial);
    assign_nullable(&mut device.asset_tag, &w.asset_tag);
    assign_choice(&mut device.status, &w.status);
    assign_ref(&mut device.primary_ip4, &w.primary_ip4, |id| h.nested_ip_address(id));
    assign_ref(&mut device.primary_ip6, &w.primary_ip6, |id| h.nested_ip_address(id));
    assign_ref(&mut device.cluster, &w.cluster, |id| {
        h.nested_ref("virtualization/clusters", "Cluster", id)
    });
    assign(&mut device.comments, &w.comments);
    if let Some(tags) = &w.tags {
        device.tags = h.resolve_tags(tags);
    }
    assign(&mut device.custom_fields, &w.custom_fields);
    device.display = device.name.clone().unwrap_or_default();
}

pub async fn get_device(client: &MockNetBoxClient, id: u64) -> Result<Device, NetBoxError> {
    client.check_failure()?;
    get_from(&client.devices, id, "Device")
}

pub async fn create_device(client: &MockNetBoxClient, request: &WritableDevice) -> Result<Device, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/dcim/devices/".to_string(), request)?;
    if request.device_type.is_none() || request.device_role.is_none() || request.site.is_none() {
        return Err(NetBoxError::Api(
            "POST /dcim/devices/ failed: 400 Bad Request - device_type, device_role and site are required"
                .to_string(),
        ));
    }

    let id = client.next_id();
    let h = client.helpers();
    let mut device = Device {
        id,
        url: h.object_url("dcim/devices", id),
        status: Some(choice("active")),
        ..Default::default()
    };
    apply_device(&h, &mut device, request);

    lock(&client.devices).insert(id, device.clone());
    Ok(device)
}

pub async fn update_device(client: &MockNetBoxClient, id: u64, request: &WritableDevice) -> Result<Device, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/dcim/devices/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.devices, id, "Device", |device| apply_device(&h, device, request))
}

pub async fn delete_device(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.devices, id, "Device")
}

fn apply_interface(h: &Helpers, interface: &mut Interface, w: &WritableInterface) {
    if let Some(id) = w.device {
        interface.device = h.nested_device(id);
    }
    assign(&mut interface.name, &w.name);
    assign(&mut interface.label, &w.label);
    if let Some(kind) = &w.interface_type {
        interface.interface_type = choice(kind);
    }
    assign(&mut interface.enabled, &w.enabled);
    assign_nullable(&mut interface.mtu, &w.mtu);
    assign_nullable(&mut interface.mac_address, &w.mac_address);
    assign(&mut interface.mgmt_only, &w.mgmt_only);
    assign(&mut interface.description, &w.description);
    if let Some(mode) = &w.mode {
        interface.mode = mode.as_deref().map(choice);
    }
    assign_ref(&mut interface.untagged_vlan, &w.untagged_vlan, |id| h.nested_vlan(id));
    if let Some(vlans) = &w.tagged_vlans {
        interface.tagged_vlans = vlans.iter().map(|id| h.nested_vlan(*id)).collect();
    }
    if let Some(status) = &w.connection_status {
        interface.connection_status = status.map(|connected| {
            let label = if connected { "Connected" } else { "Planned" };
            ChoiceField::new(connected, label)
        });
    }
    if let Some(tags) = &w.tags {
        interface.tags = h.resolve_tags(tags);
    }
    interface.display = interface.name.clone();
}

pub async fn get_interface(client: &MockNetBoxClient, id: u64) -> Result<Interface, NetBoxError> {
    client.check_failure()?;
    get_from(&client.interfaces, id, "Interface")
}

pub async fn create_interface(
    client: &MockNetBoxClient,
    request: &WritableInterface,
) -> Result<Interface, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/dcim/interfaces/".to_string(), request)?;
    if request.device.is_none() || request.name.is_none() || request.interface_type.is_none() {
        return Err(NetBoxError::Api(
            "POST /dcim/interfaces/ failed: 400 Bad Request - device, name and type are required"
                .to_string(),
        ));
    }

    let id = client.next_id();
    let h = client.helpers();
    let mut interface = Interface {
        id,
        url: h.object_url("dcim/interfaces", id),
        enabled: true,
        ..Default::default()
    };
    apply_interface(&h, &mut interface, request);

    lock(&client.interfaces).insert(id, interface.clone());
    Ok(interface)
}

pub async fn update_interface(
    client: &MockNetBoxClient,
    id: u64,
    request: &WritableInterface,
) -> Result<Interface, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/dcim/interfaces/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.interfaces, id, "Interface", |interface| {
        apply_interface(&h, interface, request)
    })
}

pub async fn delete_interface(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.interfaces, id, "Interface")
}

fn apply_region(h: &Helpers, region: &mut Region, w: &WritableRegion) {
    assign(&mut region.name, &w.name);
    assign(&mut region.slug, &w.slug);
    assign_ref(&mut region.parent, &w.parent, |id| h.nested_ref("dcim/regions", "Region", id));
    assign(&mut region.description, &w.description);
    region.display = region.name.clone();
}

pub async fn get_region(client: &MockNetBoxClient, id: u64) -> Result<Region, NetBoxError> {
    client.check_failure()?;
    get_from(&client.regions, id, "Region")
}

pub async fn create_region(client: &MockNetBoxClient, request: &WritableRegion) -> Result<Region, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/dcim/regions/".to_string(), request)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut region = Region {
        id,
        url: h.object_url("dcim/regions", id),
        ..Default::default()
    };
    apply_region(&h, &mut region, request);

    lock(&client.regions).insert(id, region.clone());
    Ok(region)
}

pub async fn update_region(client: &MockNetBoxClient, id: u64, request: &WritableRegion) -> Result<Region, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/dcim/regions/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.regions, id, "Region", |region| apply_region(&h, region, request))
}

pub async fn delete_region(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.regions, id, "Region")
}
