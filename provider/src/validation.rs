//! Attribute validators run at plan time.
//!
//! Each failure becomes a [`Diagnostic`] carrying the attribute path.

use crate::error::{Diagnostic, Diagnostics};
use chrono::NaiveDate;
use ipnet::IpNet;
use serde::Serialize;
use serde_json::Value;

/// Validator attached to an attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum Validator {
    /// String length, counted in characters, within `[min, max]`
    StringLenBetween {
        /// Smallest accepted length
        min: usize,
        /// Largest accepted length
        max: usize,
    },
    /// String must be one of the listed values
    StringInSlice(&'static [&'static str]),
    /// String must parse as an IPv4 or IPv6 network in CIDR notation
    IsCidr,
    /// Integer within `[min, max]`
    IntBetween {
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
    /// ISO date, `YYYY-MM-DD`
    IsDate,
    /// List holds no repeated element
    NoDuplicates,
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

impl Validator {
    /// Check `value` and report a diagnostic for `path` when it is rejected
    pub fn check(&self, path: &str, value: &Value, diags: &mut Diagnostics) {
        if let Err(detail) = self.validate(path, value) {
            diags.push(Diagnostic::error(path, "Invalid attribute value", detail));
        }
    }

    /// Validate a single value
    pub fn validate(&self, path: &str, value: &Value) -> Result<(), String> {
        match self {
            Validator::StringLenBetween { min, max } => {
                let s = expect_string(path, value)?;
                let len = s.chars().count();
                if len < *min || len > *max {
                    return Err(format!(
                        "expected length of {} to be in the range ({} - {}), got {}",
                        path, min, max, describe(value)
                    ));
                }
                Ok(())
            }
            Validator::StringInSlice(allowed) => {
                let s = expect_string(path, value)?;
                if !allowed.contains(&s) {
                    return Err(format!(
                        "expected {} to be one of {:?}, got {}",
                        path, allowed, s
                    ));
                }
                Ok(())
            }
            Validator::IsCidr => {
                let s = expect_string(path, value)?;
                s.parse::<IpNet>().map(|_| ()).map_err(|e| {
                    format!("expected {} to be a valid IPv4 or IPv6 CIDR, got {}: {}", path, s, e)
                })
            }
            Validator::IntBetween { min, max } => {
                let n = value
                    .as_i64()
                    .ok_or_else(|| format!("expected type of {} to be integer", path))?;
                if n < *min || n > *max {
                    return Err(format!(
                        "expected {} to be in the range ({} - {}), got {}",
                        path, min, max, n
                    ));
                }
                Ok(())
            }
            Validator::IsDate => {
                let s = expect_string(path, value)?;
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map(|_| ())
                    .map_err(|e| format!("expected {} to be a date (YYYY-MM-DD), got {}: {}", path, s, e))
            }
            Validator::NoDuplicates => {
                let items = value
                    .as_array()
                    .ok_or_else(|| format!("expected type of {} to be list", path))?;
                for (i, item) in items.iter().enumerate() {
                    if items[..i].contains(item) {
                        return Err(format!("{} contains duplicate value {}", path, describe(item)));
                    }
                }
                Ok(())
            }
        }
    }
}

fn expect_string<'a>(path: &str, value: &'a Value) -> Result<&'a str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("expected type of {} to be string", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::INTERFACE_TYPES;
    use serde_json::json;

    #[test]
    fn test_is_cidr() {
        assert!(Validator::IsCidr.validate("prefix", &json!("10.0.0.0/16")).is_ok());
        assert!(Validator::IsCidr.validate("address", &json!("10.0.0.1/24")).is_ok());
        assert!(Validator::IsCidr.validate("prefix", &json!("2001:db8::/32")).is_ok());
        assert!(Validator::IsCidr.validate("prefix", &json!("10.0.0.0")).is_err());
        assert!(Validator::IsCidr.validate("prefix", &json!("not-a-cidr")).is_err());
    }

    #[test]
    fn test_string_in_slice() {
        let v = Validator::StringInSlice(INTERFACE_TYPES);
        assert!(v.validate("type", &json!("virtual")).is_ok());
        let err = v.validate("type", &json!("bogus")).unwrap_err();
        assert!(err.contains("got bogus"));
    }

    #[test]
    fn test_no_duplicates() {
        let v = Validator::NoDuplicates;
        assert!(v.validate("tagged_vlans", &json!([30, 10, 20])).is_ok());
        assert!(v.validate("tagged_vlans", &json!([])).is_ok());
        let err = v.validate("tagged_vlans", &json!([10, 10])).unwrap_err();
        assert_eq!(err, "tagged_vlans contains duplicate value 10");
    }

    #[test]
    fn test_string_len_between_bounds() {
        let v = Validator::StringLenBetween { min: 0, max: 200 };
        assert!(v.validate("description", &json!("")).is_ok());
        assert!(v.validate("description", &json!("a".repeat(200))).is_ok());
        assert!(v.validate("description", &json!("a".repeat(201))).is_err());
    }

    #[test]
    fn test_string_len_counts_characters() {
        let v = Validator::StringLenBetween { min: 1, max: 3 };
        assert!(v.validate("name", &json!("äöü")).is_ok());
        assert!(v.validate("name", &json!("")).is_err());
    }

    #[test]
    fn test_int_between() {
        let v = Validator::IntBetween { min: 1, max: 4094 };
        assert!(v.validate("vid", &json!(1)).is_ok());
        assert!(v.validate("vid", &json!(4094)).is_ok());
        assert!(v.validate("vid", &json!(0)).is_err());
        assert!(v.validate("vid", &json!("12")).is_err());
    }

    #[test]
    fn test_is_date() {
        assert!(Validator::IsDate.validate("install_date", &json!("2020-01-31")).is_ok());
        assert!(Validator::IsDate.validate("install_date", &json!("2020-02-31")).is_err());
        assert!(Validator::IsDate.validate("install_date", &json!("31/01/2020")).is_err());
    }

    #[test]
    fn test_check_reports_attribute_path() {
        let mut diags = Diagnostics::new();
        Validator::IsCidr.check("prefix", &json!("nope"), &mut diags);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.attribute.as_deref(), Some("prefix"));
    }
}
