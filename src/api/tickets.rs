use serde_json::{json, Value};

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::{ListOptions, PropertyValue};
use crate::request::{Endpoint, IdList, Params};

const ROOT: &str = "crm-objects/v1/objects/tickets";

pub struct TicketsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> TicketsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Page through tickets. `properties` are requested in addition to any
    /// set on `options`.
    pub fn list(&self, properties: &[&str], options: &ListOptions) -> Result<Value> {
        let mut wanted: Vec<String> = properties.iter().map(|p| p.to_string()).collect();
        wanted.extend(options.properties.iter().cloned());
        let params = options
            .to_params("properties")
            .with("properties", wanted);
        self.base
            .execute(Endpoint::get(format!("{ROOT}/paged")).params(params))
    }

    pub fn get(&self, ticket_id: u64, properties: &[&str], include_deleted: bool) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("{ROOT}/{ticket_id}")).params(
                Params::new()
                    .with("includeDeletes", include_deleted)
                    .with("properties", properties.to_vec()),
            ),
        )
    }

    /// Read several tickets at once. `ids` may be a comma-separated string or
    /// a list; the call is a POST but only reads. `properties` go in both the
    /// query and the body.
    pub fn get_batch(
        &self,
        ids: impl Into<IdList>,
        properties: &[&str],
        include_deleted: bool,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("{ROOT}/batch-read"))
                .query("includeDeletes", include_deleted)
                .query("properties", properties.to_vec())
                .json(json!({
                    "ids": Value::from(ids.into()),
                    "properties": properties,
                })),
        )
    }

    /// Open a ticket for a contact. `source_type`, `hs_pipeline_stage` and
    /// `created_by` lead the property list, followed by `extra`.
    pub fn create(
        &self,
        contact_id: u64,
        status: &str,
        source_type: Option<&str>,
        extra: Vec<PropertyValue>,
    ) -> Result<Value> {
        let properties: Vec<Value> = [
            PropertyValue::new("source_type", source_type.unwrap_or("EMAIL")),
            PropertyValue::new("hs_pipeline_stage", status),
            PropertyValue::new("created_by", contact_id),
        ]
        .into_iter()
        .chain(extra)
        .map(Value::from)
        .collect();
        self.base
            .execute(Endpoint::post(ROOT).json(Value::Array(properties)))
    }

    pub fn create_batch(&self, tickets: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post(format!("{ROOT}/batch-create")).json(tickets))
    }

    pub fn update(&self, ticket_id: u64, properties: Vec<PropertyValue>) -> Result<Value> {
        let body = Value::Array(properties.into_iter().map(Value::from).collect());
        self.base
            .execute(Endpoint::put(format!("{ROOT}/{ticket_id}")).json(body))
    }

    pub fn update_batch(&self, tickets: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post(format!("{ROOT}/batch-update")).json(tickets))
    }

    pub fn delete(&self, ticket_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("{ROOT}/{ticket_id}")))
    }

    pub fn delete_batch(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("{ROOT}/batch-delete"))
                .json(json!({ "ids": Value::from(ids.into()) })),
        )
    }

    /// Change log entries, filtered by `timestamp`, `changeType`, ...
    pub fn changes(&self, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::get("crm-objects/v1/change-log/tickets").params(params))
    }
}
