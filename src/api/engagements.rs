use serde_json::{json, Map, Value};

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::ObjectType;
use crate::request::{Endpoint, Params};

pub struct EngagementsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> EngagementsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Create an engagement (`NOTE`, `EMAIL`, `TASK`, `MEETING`, `CALL`).
    ///
    /// `engagement.type` is set to `kind` unless the caller already set it.
    /// Empty sections are left out of the body.
    pub fn create(
        &self,
        kind: &str,
        engagement: Map<String, Value>,
        metadata: Value,
        associations: Value,
        attachments: Value,
    ) -> Result<Value> {
        let mut engagement = engagement;
        engagement
            .entry("type")
            .or_insert_with(|| Value::from(kind));
        let body = json!({
            "engagement": engagement,
            "associations": associations,
            "metadata": metadata,
            "attachments": attachments,
        });
        self.base
            .execute(Endpoint::post("engagements/v1/engagements").json(body))
    }

    pub fn update(&self, engagement_id: u64, changes: Value) -> Result<Value> {
        self.base.execute(
            Endpoint::patch(format!("engagements/v1/engagements/{engagement_id}")).json(changes),
        )
    }

    pub fn get(&self, engagement_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("engagements/v1/engagements/{engagement_id}")))
    }

    /// Page through all engagements. `limit` defaults to 100.
    pub fn list(&self, offset: Option<u64>, limit: Option<u32>) -> Result<Value> {
        self.base.execute(
            Endpoint::get("engagements/v1/engagements/paged").params(
                Params::new()
                    .with("limit", limit.unwrap_or(100))
                    .with("offset", offset),
            ),
        )
    }

    pub fn recent(&self, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::get("engagements/v1/engagements/recent/modified").params(params))
    }

    pub fn delete(&self, engagement_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("engagements/v1/engagements/{engagement_id}")))
    }

    pub fn associate(
        &self,
        engagement_id: u64,
        object_type: ObjectType,
        object_id: u64,
    ) -> Result<Value> {
        self.base.execute(Endpoint::put(format!(
            "engagements/v1/engagements/{engagement_id}/associations/{}/{object_id}",
            object_type.as_upper()
        )))
    }

    pub fn list_associated(
        &self,
        object_type: ObjectType,
        object_id: u64,
        params: Params,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!(
                "engagements/v1/engagements/associated/{}/{object_id}/paged",
                object_type.as_upper()
            ))
            .params(params),
        )
    }

    /// Call outcome types configured in the portal.
    pub fn dispositions(&self) -> Result<Value> {
        self.base.execute(Endpoint::get("calling/v1/dispositions"))
    }
}
