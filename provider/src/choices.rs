//! Allow-lists for NetBox's fixed enumerations.
//!
//! Consulted by `Validator::StringInSlice`; values are the API `value` strings,
//! not the display labels.

/// Interface types accepted by `/dcim/interfaces/`
pub const INTERFACE_TYPES: &[&str] = &[
    // Virtual
    "virtual",
    "lag",
    // Ethernet (fixed)
    "100base-tx",
    "1000base-t",
    "2.5gbase-t",
    "5gbase-t",
    "10gbase-t",
    "10gbase-cx4",
    // Ethernet (modular)
    "1000base-x-gbic",
    "1000base-x-sfp",
    "10gbase-x-sfpp",
    "10gbase-x-xfp",
    "10gbase-x-xenpak",
    "10gbase-x-x2",
    "25gbase-x-sfp28",
    "40gbase-x-qsfpp",
    "50gbase-x-sfp28",
    "100gbase-x-cfp",
    "100gbase-x-cfp2",
    "200gbase-x-cfp2",
    "100gbase-x-cfp4",
    "100gbase-x-cpak",
    "100gbase-x-qsfp28",
    "200gbase-x-qsfp56",
    "400gbase-x-qsfpdd",
    "400gbase-x-osfp",
    // Wireless
    "ieee802.11a",
    "ieee802.11g",
    "ieee802.11n",
    "ieee802.11ac",
    "ieee802.11ad",
    "ieee802.11ax",
    // Cellular
    "gsm",
    "cdma",
    "lte",
    // SONET
    "sonet-oc3",
    "sonet-oc12",
    "sonet-oc48",
    "sonet-oc192",
    "sonet-oc768",
    "sonet-oc1920",
    "sonet-oc3840",
    // Fibre Channel
    "1gfc-sfp",
    "2gfc-sfp",
    "4gfc-sfp",
    "8gfc-sfpp",
    "16gfc-sfpp",
    "32gfc-sfp28",
    "128gfc-sfp28",
    // InfiniBand
    "infiniband-sdr",
    "infiniband-ddr",
    "infiniband-qdr",
    "infiniband-fdr10",
    "infiniband-fdr",
    "infiniband-edr",
    "infiniband-hdr",
    "infiniband-ndr",
    "infiniband-xdr",
    // Serial
    "t1",
    "e1",
    "t3",
    "e3",
    // Stacking
    "cisco-stackwise",
    "cisco-stackwise-plus",
    "cisco-flexstack",
    "cisco-flexstack-plus",
    "juniper-vcp",
    "extreme-summitstack",
    "extreme-summitstack-128",
    "extreme-summitstack-256",
    "extreme-summitstack-512",
    "other",
];

pub const INTERFACE_MODES: &[&str] = &["access", "tagged", "tagged-all"];

pub const SITE_STATUSES: &[&str] = &["active", "decommissioning", "planned", "retired", "staging"];

pub const RACK_STATUSES: &[&str] = &["active", "available", "deprecated", "planned", "reserved"];

pub const RACK_TYPES: &[&str] = &[
    "2-post-frame",
    "4-post-cabinet",
    "4-post-frame",
    "wall-cabinet",
    "wall-frame",
];

pub const RACK_OUTER_UNITS: &[&str] = &["in", "mm"];

pub const DEVICE_STATUSES: &[&str] = &[
    "offline",
    "active",
    "planned",
    "staged",
    "failed",
    "inventory",
    "decommissioning",
];

pub const DEVICE_FACES: &[&str] = &["front", "rear"];

pub const CIRCUIT_STATUSES: &[&str] = &[
    "active",
    "decommissioned",
    "deprovisioning",
    "offline",
    "planned",
    "provisioning",
];

pub const IP_ADDRESS_STATUSES: &[&str] = &["active", "deprecated", "dhcp", "reserved", "slaac"];

pub const IP_ADDRESS_ROLES: &[&str] = &[
    "anycast", "carp", "glbp", "hsrp", "loopback", "secondary", "vip", "vrrp",
];

pub const PREFIX_STATUSES: &[&str] = &["active", "container", "deprecated", "reserved"];

pub const VLAN_STATUSES: &[&str] = &["active", "deprecated", "reserved"];
