use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::Params;

// ---------------------------------------------------------------------------
// OAuth
// ---------------------------------------------------------------------------

/// Result of exchanging an authorization code or refresh token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Metadata about an access token, as returned by `oauth/v1/access-tokens`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenInfo {
    pub token: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub hub_domain: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub hub_id: Option<u64>,
    #[serde(default)]
    pub app_id: Option<u64>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

// ---------------------------------------------------------------------------
// CRM objects
// ---------------------------------------------------------------------------

/// A `{ "name": ..., "value": ... }` pair, the property format of the
/// tickets and products APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub name: String,
    pub value: Value,
}

impl PropertyValue {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<PropertyValue> for Value {
    fn from(property: PropertyValue) -> Self {
        serde_json::json!(property)
    }
}

/// CRM object kinds that appear in association and property routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Contact,
    Company,
    Deal,
    Ticket,
    Product,
    Owner,
}

impl ObjectType {
    /// `CONTACT`, `COMPANY`, ... as used by deal and engagement associations.
    pub fn as_upper(self) -> &'static str {
        match self {
            ObjectType::Contact => "CONTACT",
            ObjectType::Company => "COMPANY",
            ObjectType::Deal => "DEAL",
            ObjectType::Ticket => "TICKET",
            ObjectType::Product => "PRODUCT",
            ObjectType::Owner => "OWNER",
        }
    }

    /// Singular lower-case name, as some v1 routes spell it.
    pub fn as_lower(self) -> &'static str {
        match self {
            ObjectType::Contact => "contact",
            ObjectType::Company => "company",
            ObjectType::Deal => "deal",
            ObjectType::Ticket => "ticket",
            ObjectType::Product => "product",
            ObjectType::Owner => "owner",
        }
    }

    /// `contacts`, `companies`, ... as used by the properties API.
    pub fn plural(self) -> &'static str {
        match self {
            ObjectType::Contact => "contacts",
            ObjectType::Company => "companies",
            ObjectType::Deal => "deals",
            ObjectType::Ticket => "tickets",
            ObjectType::Product => "products",
            ObjectType::Owner => "owners",
        }
    }
}

// ---------------------------------------------------------------------------
// Deal pipelines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    pub label: String,
    pub display_order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl PipelineStage {
    pub fn new(label: impl Into<String>, display_order: i64) -> Self {
        Self {
            stage_id: None,
            label: label.into(),
            display_order,
            probability: None,
            active: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// Page size, offset and property selection for list endpoints.
///
/// HubSpot endpoints disagree on whether the page size is called `count` or
/// `limit`, so both are sent.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub count: Option<u32>,
    pub offset: Option<u64>,
    pub properties: Vec<String>,
    pub extra: Params,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.properties.push(name.into());
        self
    }

    pub fn extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Render as request parameters, naming the property list `property_key`.
    /// Typed fields win over entries of the same name in `extra`.
    pub fn to_params(&self, property_key: &str) -> Params {
        Params::new()
            .with("count", self.count)
            .with("limit", self.count)
            .with("offset", self.offset)
            .with(property_key, self.properties.clone())
            .filtered()
            .with_defaults(self.extra.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_options_render_both_page_size_names() {
        let params = ListOptions::new()
            .count(50)
            .offset(7)
            .property("subject")
            .extra("timeOffset", 1_700_000_000_000u64)
            .to_params("properties")
            .filtered();
        assert_eq!(params.get("count"), Some(&json!(50)));
        assert_eq!(params.get("limit"), Some(&json!(50)));
        assert_eq!(params.get("offset"), Some(&json!(7)));
        assert_eq!(params.get("properties"), Some(&json!(["subject"])));
        assert_eq!(params.get("timeOffset"), Some(&json!(1_700_000_000_000u64)));
    }

    #[test]
    fn empty_list_options_filter_to_nothing() {
        assert!(ListOptions::new().to_params("property").filtered().is_empty());
    }

    #[test]
    fn pipeline_stage_serializes_camel_case() {
        let stage = PipelineStage::new("Won", 2);
        assert_eq!(
            serde_json::to_value(&stage).unwrap(),
            json!({"label": "Won", "displayOrder": 2, "active": true})
        );
    }

    #[test]
    fn token_info_tolerates_missing_fields() {
        let info: AccessTokenInfo = serde_json::from_value(json!({
            "token": "abc",
            "hub_id": 62515,
            "scopes": ["contacts"]
        }))
        .unwrap();
        assert_eq!(info.hub_id, Some(62515));
        assert!(info.user.is_none());
    }

    #[test]
    fn object_type_renderings() {
        assert_eq!(ObjectType::Company.as_upper(), "COMPANY");
        assert_eq!(ObjectType::Company.plural(), "companies");
    }
}
