use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::ObjectType;
use crate::request::{segment, Endpoint, Params};

/// Property and property-group management for one CRM object type.
pub struct PropertiesClient<'a> {
    base: &'a BaseClient,
    root: String,
}

impl<'a> PropertiesClient<'a> {
    pub(crate) fn new(base: &'a BaseClient, object: ObjectType) -> Self {
        Self {
            base,
            root: format!("properties/v1/{}", object.plural()),
        }
    }

    pub fn list(&self) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("{}/properties", self.root)))
    }

    pub fn get(&self, name: &str) -> Result<Value> {
        self.base.execute(Endpoint::get(format!(
            "{}/properties/named/{}",
            self.root,
            segment(name)
        )))
    }

    pub fn create(&self, property: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post(format!("{}/properties", self.root)).json(property))
    }

    pub fn update(&self, name: &str, property: Value) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!("{}/properties/named/{}", self.root, segment(name)))
                .json(property),
        )
    }

    pub fn delete(&self, name: &str) -> Result<Value> {
        self.base.execute(Endpoint::delete(format!(
            "{}/properties/named/{}",
            self.root,
            segment(name)
        )))
    }

    pub fn groups(&self, include_properties: Option<bool>) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("{}/groups", self.root))
                .params(Params::new().with("includeProperties", include_properties)),
        )
    }

    pub fn group(&self, name: &str, include_properties: Option<bool>) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("{}/groups/named/{}", self.root, segment(name)))
                .params(Params::new().with("includeProperties", include_properties)),
        )
    }

    pub fn create_group(
        &self,
        name: &str,
        display_name: &str,
        display_order: Option<i64>,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("{}/groups", self.root)).params(
                Params::new()
                    .with("name", name)
                    .with("displayName", display_name)
                    .with("displayOrder", display_order),
            ),
        )
    }

    pub fn update_group(&self, name: &str, group: Value) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!("{}/groups/named/{}", self.root, segment(name))).json(group),
        )
    }

    pub fn delete_group(&self, name: &str) -> Result<Value> {
        self.base.execute(Endpoint::delete(format!(
            "{}/groups/named/{}",
            self.root,
            segment(name)
        )))
    }
}
