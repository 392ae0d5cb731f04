use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::ObjectType;
use crate::request::{Endpoint, Params};

/// Parameters for the paged deal listings.
#[derive(Debug, Clone, Default)]
pub struct ListDealsParams {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
    pub properties: Vec<String>,
    pub properties_with_history: Vec<String>,
    pub include_associations: Option<bool>,
}

impl ListDealsParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("limit", self.limit)
            .with("offset", self.offset)
            .with("properties", self.properties.clone())
            .with("propertiesWithHistory", self.properties_with_history.clone())
            .with("includeAssociations", self.include_associations)
    }
}

/// Parameters for the recently modified/created deal feeds.
#[derive(Debug, Clone, Default)]
pub struct RecentDealsParams {
    pub count: Option<u32>,
    pub offset: Option<u64>,
    /// Epoch milliseconds.
    pub since: Option<u64>,
    pub include_property_versions: Option<bool>,
}

impl RecentDealsParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("count", self.count)
            .with("offset", self.offset)
            .with("since", self.since)
            .with("includePropertyVersions", self.include_property_versions)
    }
}

pub struct DealsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> DealsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn create(&self, deal: Value) -> Result<Value> {
        self.base.execute(Endpoint::post("deals/v1/deal/").json(deal))
    }

    pub fn update(&self, deal_id: u64, deal: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::put(format!("deals/v1/deal/{deal_id}")).json(deal))
    }

    pub fn batch_update(&self, batch: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post("deals/v1/batch-async/update").json(batch))
    }

    pub fn list(&self, params: &ListDealsParams) -> Result<Value> {
        self.base
            .execute(Endpoint::get("deals/v1/deal/paged").params(params.to_params()))
    }

    pub fn recently_modified(&self, params: &RecentDealsParams) -> Result<Value> {
        self.base
            .execute(Endpoint::get("deals/v1/deal/recent/modified").params(params.to_params()))
    }

    pub fn recently_created(&self, params: &RecentDealsParams) -> Result<Value> {
        self.base
            .execute(Endpoint::get("deals/v1/deal/recent/created").params(params.to_params()))
    }

    pub fn delete(&self, deal_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("deals/v1/deal/{deal_id}")))
    }

    pub fn get(&self, deal_id: u64, include_property_versions: Option<bool>) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("deals/v1/deal/{deal_id}")).params(
                Params::new().with("includePropertyVersions", include_property_versions),
            ),
        )
    }

    /// Associate a deal with contacts or companies; `ids` go out as repeated
    /// `id` query pairs.
    pub fn associate(&self, deal_id: u64, object_type: ObjectType, ids: &[u64]) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!(
                "deals/v1/deal/{deal_id}/associations/{}",
                object_type.as_upper()
            ))
            .query("id", ids.to_vec()),
        )
    }

    pub fn remove_association(
        &self,
        deal_id: u64,
        object_type: ObjectType,
        ids: &[u64],
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::delete(format!(
                "deals/v1/deal/{deal_id}/associations/{}",
                object_type.as_upper()
            ))
            .query("id", ids.to_vec()),
        )
    }

    /// Deals associated with a contact or company.
    pub fn associated(
        &self,
        object_type: ObjectType,
        object_id: u64,
        params: &ListDealsParams,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!(
                "deals/v1/deal/associated/{}/{object_id}/paged",
                object_type.as_lower()
            ))
            .params(params.to_params()),
        )
    }
}
