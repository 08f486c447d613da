//! IPAM operations for MockNetBoxClient
//!
//! Handles prefixes, available prefixes, IP addresses, aggregates, VRFs, VLANs, and RIRs

use super::helpers::{Helpers, assign, assign_choice, assign_nullable, assign_ref, choice, family_of};
use super::{MockNetBoxClient, delete_from, get_from, lock, update_in};
use crate::error::NetBoxError;
use crate::models::*;
use ipnet::IpNet;

fn now() -> Option<String> {
    Some(chrono::Utc::now().to_rfc3339())
}

fn parse_net(cidr: &str) -> Result<IpNet, NetBoxError> {
    cidr.parse::<IpNet>()
        .map(|net| net.trunc())
        .map_err(|e| NetBoxError::Api(format!("400 Bad Request - invalid prefix {}: {}", cidr, e)))
}

fn overlaps(a: &IpNet, b: &IpNet) -> bool {
    a.contains(b) || b.contains(a)
}

/// Largest free blocks of `net` not covered by any of `used`
fn free_blocks(net: IpNet, used: &[IpNet]) -> Vec<IpNet> {
    if used.iter().any(|u| u.contains(&net)) {
        return Vec::new();
    }
    if !used.iter().any(|u| overlaps(u, &net)) {
        return vec![net];
    }
    match net.subnets(net.prefix_len() + 1) {
        Ok(halves) => halves.flat_map(|half| free_blocks(half, used)).collect(),
        Err(_) => Vec::new(),
    }
}

/// Matches the prefix list filters NetBox supports for the data sources
fn prefix_matches(prefix: &Prefix, filters: &[(&str, &str)]) -> bool {
    let net = prefix.prefix.parse::<IpNet>().ok();
    filters.iter().all(|(key, value)| match *key {
        "prefix" => prefix.prefix == *value,
        "family" => prefix.family.as_ref().is_some_and(|f| f.value.to_string() == *value),
        "status" => prefix.status.as_ref().is_some_and(|s| s.value == *value),
        "mask_length" => net.is_some_and(|n| n.prefix_len().to_string() == *value),
        "within" => match (net, value.parse::<IpNet>()) {
            (Some(n), Ok(outer)) => outer.contains(&n) && outer != n,
            _ => false,
        },
        "within_include" => match (net, value.parse::<IpNet>()) {
            (Some(n), Ok(outer)) => outer.contains(&n),
            _ => false,
        },
        "contains" => match net {
            Some(n) => match value.parse::<IpNet>() {
                Ok(inner) => n.contains(&inner),
                Err(_) => value.parse::<std::net::IpAddr>().is_ok_and(|ip| n.contains(&ip)),
            },
            None => false,
        },
        "site" => prefix.site.as_ref().is_some_and(|s| s.slug == *value),
        "tenant" => prefix.tenant.as_ref().is_some_and(|t| t.slug == *value),
        "role" => prefix.role.as_ref().is_some_and(|r| r.slug == *value),
        "tag" => prefix.tags.iter().any(|t| t.slug == *value),
        "vrf_id" => prefix.vrf.as_ref().is_some_and(|v| v.id.to_string() == *value),
        _ => true,
    })
}

fn apply_prefix(h: &Helpers, prefix: &mut Prefix, w: &WritablePrefix) {
    if let Some(cidr) = &w.prefix {
        prefix.prefix = cidr.clone();
        prefix.family = Some(family_of(cidr));
    }
    assign_ref(&mut prefix.site, &w.site, |id| h.nested_ref("dcim/sites", "Site", id));
    assign_ref(&mut prefix.vrf, &w.vrf, |id| h.nested_vrf(id));
    assign_ref(&mut prefix.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign_ref(&mut prefix.vlan, &w.vlan, |id| h.nested_vlan(id));
    assign_choice(&mut prefix.status, &w.status);
    assign_ref(&mut prefix.role, &w.role, |id| h.nested_ref("ipam/roles", "Role", id));
    assign(&mut prefix.is_pool, &w.is_pool);
    assign(&mut prefix.description, &w.description);
    if let Some(tags) = &w.tags {
        prefix.tags = h.resolve_tags(tags);
    }
    assign(&mut prefix.custom_fields, &w.custom_fields);
    prefix.display = prefix.prefix.clone();
}

pub async fn get_prefix(client: &MockNetBoxClient, id: u64) -> Result<Prefix, NetBoxError> {
    client.check_failure()?;
    get_from(&client.prefixes, id, "Prefix")
}

pub async fn query_prefixes(
    client: &MockNetBoxClient,
    filters: &[(&str, &str)],
    _fetch_all: bool,
) -> Result<Vec<Prefix>, NetBoxError> {
    client.check_failure()?;
    Ok(lock(&client.prefixes)
        .values()
        .filter(|p| prefix_matches(p, filters))
        .cloned()
        .collect())
}

pub async fn create_prefix(client: &MockNetBoxClient, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/ipam/prefixes/".to_string(), request)?;
    let Some(cidr) = &request.prefix else {
        return Err(NetBoxError::Api(
            "POST /ipam/prefixes/ failed: 400 Bad Request - prefix is required".to_string(),
        ));
    };
    parse_net(cidr)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut prefix = Prefix {
        id,
        url: h.object_url("ipam/prefixes", id),
        status: Some(choice("active")),
        created: now(),
        last_updated: now(),
        ..Default::default()
    };
    apply_prefix(&h, &mut prefix, request);

    lock(&client.prefixes).insert(id, prefix.clone());
    Ok(prefix)
}

pub async fn update_prefix(client: &MockNetBoxClient, id: u64, request: &WritablePrefix) -> Result<Prefix, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/ipam/prefixes/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.prefixes, id, "Prefix", |prefix| {
        apply_prefix(&h, prefix, request);
        prefix.last_updated = now();
    })
}

pub async fn delete_prefix(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.prefixes, id, "Prefix")
}

/// Parent network and the child prefixes already allocated inside it
fn parent_and_children(client: &MockNetBoxClient, parent: &Prefix) -> Result<(IpNet, Vec<IpNet>), NetBoxError> {
    let net = parse_net(&parent.prefix)?;
    let children = lock(&client.prefixes)
        .values()
        .filter(|p| p.id != parent.id)
        .filter_map(|p| p.prefix.parse::<IpNet>().ok())
        .filter(|child| net.contains(child) && *child != net)
        .collect();
    Ok((net, children))
}

pub async fn get_available_prefixes(
    client: &MockNetBoxClient,
    prefix_id: u64,
) -> Result<Vec<AvailablePrefix>, NetBoxError> {
    client.check_failure()?;
    let parent = get_from(&client.prefixes, prefix_id, "Prefix")?;
    let (net, children) = parent_and_children(client, &parent)?;

    Ok(free_blocks(net, &children)
        .into_iter()
        .map(|block| AvailablePrefix {
            family: family_of(&block.to_string()).value,
            prefix: block.to_string(),
            vrf: parent.vrf.clone(),
        })
        .collect())
}

pub async fn create_available_prefix(
    client: &MockNetBoxClient,
    prefix_id: u64,
    prefix_length: u8,
) -> Result<Prefix, NetBoxError> {
    client.check_failure()?;
    let path = format!("/ipam/prefixes/{}/available-prefixes/", prefix_id);
    client.record("POST", path.clone(), &AvailablePrefixRequest { prefix_length })?;

    let parent = get_from(&client.prefixes, prefix_id, "Prefix")?;
    let (net, children) = parent_and_children(client, &parent)?;

    let allocated = free_blocks(net, &children)
        .into_iter()
        .filter(|block| block.prefix_len() <= prefix_length)
        .find_map(|block| block.subnets(prefix_length).ok().and_then(|mut s| s.next()))
        .ok_or_else(|| {
            NetBoxError::Api(format!(
                "POST {} failed: 409 Conflict - insufficient space to accommodate a /{} prefix",
                path, prefix_length
            ))
        })?;

    let id = client.next_id();
    let h = client.helpers();
    let cidr = allocated.to_string();
    let prefix = Prefix {
        id,
        url: h.object_url("ipam/prefixes", id),
        display: cidr.clone(),
        family: Some(family_of(&cidr)),
        prefix: cidr,
        vrf: parent.vrf.clone(),
        status: Some(choice("active")),
        created: now(),
        last_updated: now(),
        ..Default::default()
    };

    lock(&client.prefixes).insert(id, prefix.clone());
    Ok(prefix)
}

fn apply_ip_address(h: &Helpers, ip: &mut IPAddress, w: &WritableIPAddress) {
    if let Some(address) = &w.address {
        ip.address = address.clone();
        ip.family = Some(family_of(address));
    }
    assign_ref(&mut ip.vrf, &w.vrf, |id| h.nested_vrf(id));
    assign_ref(&mut ip.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign_choice(&mut ip.status, &w.status);
    assign_choice(&mut ip.role, &w.role);
    assign_nullable(&mut ip.assigned_object_type, &w.assigned_object_type);
    assign_nullable(&mut ip.assigned_object_id, &w.assigned_object_id);
    assign_ref(&mut ip.nat_inside, &w.nat_inside, |id| h.nested_ip_address(id));
    assign(&mut ip.dns_name, &w.dns_name);
    assign(&mut ip.description, &w.description);
    if let Some(tags) = &w.tags {
        ip.tags = h.resolve_tags(tags);
    }
    assign(&mut ip.custom_fields, &w.custom_fields);
    ip.display = ip.address.clone();
}

pub async fn get_ip_address(client: &MockNetBoxClient, id: u64) -> Result<IPAddress, NetBoxError> {
    client.check_failure()?;
    get_from(&client.ip_addresses, id, "IP address")
}

pub async fn create_ip_address(client: &MockNetBoxClient, request: &WritableIPAddress) -> Result<IPAddress, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/ipam/ip-addresses/".to_string(), request)?;
    let Some(address) = &request.address else {
        return Err(NetBoxError::Api(
            "POST /ipam/ip-addresses/ failed: 400 Bad Request - address is required".to_string(),
        ));
    };
    parse_net(address)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut ip = IPAddress {
        id,
        url: h.object_url("ipam/ip-addresses", id),
        status: Some(choice("active")),
        created: now(),
        last_updated: now(),
        ..Default::default()
    };
    apply_ip_address(&h, &mut ip, request);

    lock(&client.ip_addresses).insert(id, ip.clone());
    Ok(ip)
}

pub async fn update_ip_address(
    client: &MockNetBoxClient,
    id: u64,
    request: &WritableIPAddress,
) -> Result<IPAddress, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/ipam/ip-addresses/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.ip_addresses, id, "IP address", |ip| {
        apply_ip_address(&h, ip, request);
        ip.last_updated = now();
    })
}

pub async fn delete_ip_address(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.ip_addresses, id, "IP address")
}

fn apply_aggregate(h: &Helpers, aggregate: &mut Aggregate, w: &WritableAggregate) {
    if let Some(cidr) = &w.prefix {
        aggregate.prefix = cidr.clone();
        aggregate.family = Some(family_of(cidr));
    }
    if let Some(id) = w.rir {
        aggregate.rir = Some(h.nested_ref("ipam/rirs", "RIR", id));
    }
    assign(&mut aggregate.description, &w.description);
    aggregate.display = aggregate.prefix.clone();
}

pub async fn get_aggregate(client: &MockNetBoxClient, id: u64) -> Result<Aggregate, NetBoxError> {
    client.check_failure()?;
    get_from(&client.aggregates, id, "Aggregate")
}

pub async fn query_aggregates(
    client: &MockNetBoxClient,
    filters: &[(&str, &str)],
    _fetch_all: bool,
) -> Result<Vec<Aggregate>, NetBoxError> {
    client.check_failure()?;
    Ok(lock(&client.aggregates)
        .values()
        .filter(|a| {
            filters.iter().all(|(key, value)| match *key {
                "prefix" => a.prefix == *value,
                "family" => a.family.as_ref().is_some_and(|f| f.value.to_string() == *value),
                _ => true,
            })
        })
        .cloned()
        .collect())
}

pub async fn create_aggregate(client: &MockNetBoxClient, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/ipam/aggregates/".to_string(), request)?;
    if let Some(cidr) = &request.prefix {
        parse_net(cidr)?;
    }

    let id = client.next_id();
    let h = client.helpers();
    let mut aggregate = Aggregate {
        id,
        url: h.object_url("ipam/aggregates", id),
        ..Default::default()
    };
    apply_aggregate(&h, &mut aggregate, request);

    lock(&client.aggregates).insert(id, aggregate.clone());
    Ok(aggregate)
}

pub async fn update_aggregate(
    client: &MockNetBoxClient,
    id: u64,
    request: &WritableAggregate,
) -> Result<Aggregate, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/ipam/aggregates/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.aggregates, id, "Aggregate", |aggregate| {
        apply_aggregate(&h, aggregate, request)
    })
}

pub async fn delete_aggregate(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.aggregates, id, "Aggregate")
}

fn apply_vrf(h: &Helpers, vrf: &mut Vrf, w: &WritableVrf) {
    assign(&mut vrf.name, &w.name);
    assign_nullable(&mut vrf.rd, &w.rd);
    assign_ref(&mut vrf.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign(&mut vrf.enforce_unique, &w.enforce_unique);
    assign(&mut vrf.description, &w.description);
    if let Some(tags) = &w.tags {
        vrf.tags = h.resolve_tags(tags);
    }
    assign(&mut vrf.custom_fields, &w.custom_fields);
    vrf.display = vrf.name.clone();
}

pub async fn get_vrf(client: &MockNetBoxClient, id: u64) -> Result<Vrf, NetBoxError> {
    client.check_failure()?;
    get_from(&client.vrfs, id, "VRF")
}

pub async fn create_vrf(client: &MockNetBoxClient, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/ipam/vrfs/".to_string(), request)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut vrf = Vrf {
        id,
        url: h.object_url("ipam/vrfs", id),
        enforce_unique: true,
        ..Default::default()
    };
    apply_vrf(&h, &mut vrf, request);

    lock(&client.vrfs).insert(id, vrf.clone());
    Ok(vrf)
}

pub async fn update_vrf(client: &MockNetBoxClient, id: u64, request: &WritableVrf) -> Result<Vrf, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/ipam/vrfs/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.vrfs, id, "VRF", |vrf| apply_vrf(&h, vrf, request))
}

pub async fn delete_vrf(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.vrfs, id, "VRF")
}

fn apply_vlan(h: &Helpers, vlan: &mut Vlan, w: &WritableVlan) {
    assign_ref(&mut vlan.site, &w.site, |id| h.nested_ref("dcim/sites", "Site", id));
    assign(&mut vlan.vid, &w.vid);
    assign(&mut vlan.name, &w.name);
    assign_ref(&mut vlan.tenant, &w.tenant, |id| h.nested_ref("tenancy/tenants", "Tenant", id));
    assign_choice(&mut vlan.status, &w.status);
    assign_ref(&mut vlan.role, &w.role, |id| h.nested_ref("ipam/roles", "Role", id));
    assign(&mut vlan.description, &w.description);
    if let Some(tags) = &w.tags {
        vlan.tags = h.resolve_tags(tags);
    }
    vlan.display = vlan.name.clone();
}

pub async fn get_vlan(client: &MockNetBoxClient, id: u64) -> Result<Vlan, NetBoxError> {
    client.check_failure()?;
    get_from(&client.vlans, id, "VLAN")
}

pub async fn create_vlan(client: &MockNetBoxClient, request: &WritableVlan) -> Result<Vlan, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/ipam/vlans/".to_string(), request)?;

    let id = client.next_id();
    let h = client.helpers();
    let mut vlan = Vlan {
        id,
        url: h.object_url("ipam/vlans", id),
        status: Some(choice("active")),
        ..Default::default()
    };
    apply_vlan(&h, &mut vlan, request);

    lock(&client.vlans).insert(id, vlan.clone());
    Ok(vlan)
}

pub async fn update_vlan(client: &MockNetBoxClient, id: u64, request: &WritableVlan) -> Result<Vlan, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/ipam/vlans/{}/", id), request)?;
    let h = client.helpers();
    update_in(&client.vlans, id, "VLAN", |vlan| apply_vlan(&h, vlan, request))
}

pub async fn delete_vlan(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.vlans, id, "VLAN")
}

fn apply_rir(rir: &mut Rir, w: &WritableRir) {
    assign(&mut rir.name, &w.name);
    assign(&mut rir.slug, &w.slug);
    rir.display = rir.name.clone();
}

pub async fn get_rir(client: &MockNetBoxClient, id: u64) -> Result<Rir, NetBoxError> {
    client.check_failure()?;
    get_from(&client.rirs, id, "RIR")
}

pub async fn create_rir(client: &MockNetBoxClient, request: &WritableRir) -> Result<Rir, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/ipam/rirs/".to_string(), request)?;

    let id = client.next_id();
    let mut rir = Rir {
        id,
        url: client.helpers().object_url("ipam/rirs", id),
        ..Default::default()
    };
    apply_rir(&mut rir, request);

    lock(&client.rirs).insert(id, rir.clone());
    Ok(rir)
}

pub async fn update_rir(client: &MockNetBoxClient, id: u64, request: &WritableRir) -> Result<Rir, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/ipam/rirs/{}/", id), request)?;
    update_in(&client.rirs, id, "RIR", |rir| apply_rir(rir, request))
}

pub async fn delete_rir(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.rirs, id, "RIR")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_free_blocks_empty_parent() {
        assert_eq!(free_blocks(net("10.0.0.0/16"), &[]), vec![net("10.0.0.0/16")]);
    }

    #[test]
    fn test_free_blocks_around_allocation() {
        let free = free_blocks(net("10.0.0.0/22"), &[net("10.0.0.0/24")]);
        assert_eq!(free, vec![net("10.0.1.0/24"), net("10.0.2.0/23")]);
    }

    #[test]
    fn test_free_blocks_fully_used() {
        assert!(free_blocks(net("10.0.0.0/24"), &[net("10.0.0.0/24")]).is_empty());
    }

    #[tokio::test]
    async fn test_create_available_prefix_takes_first_free_block() {
        let client = MockNetBoxClient::new("http://netbox.test/api");
        let parent = create_prefix(
            &client,
            &WritablePrefix {
                prefix: Some("10.0.0.0/16".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let first = create_available_prefix(&client, parent.id, 24).await.unwrap();
        let second = create_available_prefix(&client, parent.id, 24).await.unwrap();

        assert_eq!(first.prefix, "10.0.0.0/24");
        assert_eq!(second.prefix, "10.0.1.0/24");
        let available = get_available_prefixes(&client, parent.id).await.unwrap();
        assert_eq!(available.first().map(|a| a.prefix.as_str()), Some("10.0.2.0/23"));
    }

    #[tokio::test]
    async fn test_create_available_prefix_too_short() {
        let client = MockNetBoxClient::new("http://netbox.test/api");
        let parent = create_prefix(
            &client,
            &WritablePrefix {
                prefix: Some("10.0.0.0/24".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = create_available_prefix(&client, parent.id, 16).await.unwrap_err();
        assert!(matches!(err, NetBoxError::Api(_)));
    }

    #[tokio::test]
    async fn test_query_prefixes_filters() {
        let client = MockNetBoxClient::new("http://netbox.test/api");
        for cidr in ["10.0.0.0/16", "10.0.1.0/24", "192.168.0.0/24"] {
            create_prefix(
                &client,
                &WritablePrefix {
                    prefix: Some(cidr.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let within = query_prefixes(&client, &[("within", "10.0.0.0/16")], true).await.unwrap();
        assert_eq!(within.len(), 1);
        assert_eq!(within[0].prefix, "10.0.1.0/24");

        let exact = query_prefixes(&client, &[("prefix", "192.168.0.0/24")], true).await.unwrap();
        assert_eq!(exact.len(), 1);
    }
}
