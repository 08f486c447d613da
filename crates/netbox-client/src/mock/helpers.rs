//! Helper functions for creating nested NetBox model types

use crate::models::*;

/// Helper functions for creating nested types in mock implementations
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Absolute URL of an object, e.g. `{base}/dcim/sites/3/`
    pub fn object_url(&self, path: &str, id: u64) -> String {
        format!("{}/{}/{}/", self.base_url, path, id)
    }

    /// Helper to create a NestedRef for any slugged object
    pub fn nested_ref(&self, path: &str, kind: &str, id: u64) -> NestedRef {
        let name = format!("{} {}", kind, id);
        NestedRef {
            id,
            url: self.object_url(path, id),
            display: name.clone(),
            slug: name.to_lowercase().replace(' ', "-"),
            name,
        }
    }

    /// Helper to create NestedVrf
    pub fn nested_vrf(&self, id: u64) -> NestedVrf {
        let name = format!("VRF {}", id);
        NestedVrf {
            id,
            url: self.object_url("ipam/vrfs", id),
            display: name.clone(),
            name,
            rd: None,
        }
    }

    /// Helper to create NestedVlan
    pub fn nested_vlan(&self, id: u64) -> NestedVlan {
        let name = format!("VLAN {}", id);
        NestedVlan {
            id,
            url: self.object_url("ipam/vlans", id),
            display: name.clone(),
            vid: 0,
            name,
        }
    }

    /// Helper to create NestedDevice
    pub fn nested_device(&self, id: u64) -> NestedDevice {
        let name = format!("device-{}", id);
        NestedDevice {
            id,
            url: self.object_url("dcim/devices", id),
            display: name.clone(),
            name: Some(name),
        }
    }

    /// Helper to create NestedIPAddress
    pub fn nested_ip_address(&self, id: u64) -> NestedIPAddress {
        NestedIPAddress {
            id,
            url: self.object_url("ipam/ip-addresses", id),
            display: String::new(),
            address: String::new(),
        }
    }

    /// Tags as NetBox echoes them back: ids and colors filled in
    pub fn resolve_tags(&self, tags: &[NestedTag]) -> Vec<NestedTag> {
        tags.iter()
            .enumerate()
            .map(|(i, tag)| {
                let id = if tag.id == 0 { i as u64 + 1 } else { tag.id };
                NestedTag {
                    id,
                    url: self.object_url("extras/tags", id),
                    display: tag.name.clone(),
                    name: tag.name.clone(),
                    slug: tag.slug.clone(),
                    color: if tag.color.is_empty() {
                        "9e9e9e".to_string()
                    } else {
                        tag.color.clone()
                    },
                }
            })
            .collect()
    }
}

/// Choice field with a label derived from the value (`active` -> `Active`)
pub fn choice(value: &str) -> ChoiceField {
    let mut chars = value.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    ChoiceField::new(value.to_string(), label)
}

/// Address family of a CIDR string, as NetBox reports it
pub fn family_of(cidr: &str) -> ChoiceField<u8> {
    if cidr.contains(':') {
        ChoiceField::new(6, "IPv6".to_string())
    } else {
        ChoiceField::new(4, "IPv4".to_string())
    }
}

/// Overwrite a field when the request body carries it
pub fn assign<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

/// Overwrite a nullable field when the request body carries it (`null` clears)
pub fn assign_nullable<T: Clone>(target: &mut Option<T>, value: &Nullable<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

/// Overwrite a nested reference from an id when the request body carries it
pub fn assign_ref<R>(target: &mut Option<R>, value: &Nullable<u64>, nested: impl Fn(u64) -> R) {
    if let Some(v) = value {
        *target = v.map(nested);
    }
}

/// Overwrite a choice field when the request body carries it
pub fn assign_choice(target: &mut Option<ChoiceField>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(choice(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_label() {
        assert_eq!(choice("active").label, "Active");
        assert_eq!(choice("").label, "");
    }

    #[test]
    fn test_family_of() {
        assert_eq!(family_of("10.0.0.0/8").value, 4);
        assert_eq!(family_of("2001:db8::/32").label, "IPv6");
    }

    #[test]
    fn test_assign_nullable_clears() {
        let mut target = Some(5u64);
        assign_nullable(&mut target, &None);
        assert_eq!(target, Some(5));
        assign_nullable(&mut target, &Some(None));
        assert_eq!(target, None);
    }
}
