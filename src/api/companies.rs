use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, wrap_properties, Endpoint, Params};

/// Parameters for paging through all companies.
#[derive(Debug, Clone, Default)]
pub struct ListCompaniesParams {
    /// Page size; defaults to 100, max 250.
    pub limit: Option<u32>,
    pub offset: Option<u64>,
    pub properties: Vec<String>,
    pub properties_with_history: Vec<String>,
}

impl ListCompaniesParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("limit", self.limit)
            .with("offset", self.offset)
            .with("properties", self.properties.clone())
            .with("propertiesWithHistory", self.properties_with_history.clone())
    }
}

pub struct CompaniesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> CompaniesClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Create a company; property input is wrapped in `properties` unless it
    /// already is.
    pub fn create(&self, properties: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post("companies/v2/companies").json(wrap_properties(properties)))
    }

    pub fn update(&self, company_id: u64, properties: Value) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!("companies/v2/companies/{company_id}"))
                .json(wrap_properties(properties)),
        )
    }

    /// Queue updates for many companies at once.
    pub fn batch_update(&self, batch: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post("companies/v1/batch-async/update").json(batch))
    }

    pub fn delete(&self, company_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("companies/v2/companies/{company_id}")))
    }

    pub fn list(&self, params: &ListCompaniesParams) -> Result<Value> {
        self.base
            .execute(Endpoint::get("companies/v2/companies/paged").params(params.to_params()))
    }

    pub fn recently_modified(&self, offset: Option<u64>, count: Option<u32>) -> Result<Value> {
        self.base.execute(
            Endpoint::get("companies/v2/companies/recent/modified")
                .params(Params::new().with("offset", offset).with("count", count)),
        )
    }

    pub fn recently_created(&self, offset: Option<u64>, count: Option<u32>) -> Result<Value> {
        self.base.execute(
            Endpoint::get("companies/v2/companies/recent/created")
                .params(Params::new().with("offset", offset).with("count", count)),
        )
    }

    pub fn get_by_domain(&self, domain: &str) -> Result<Value> {
        self.base.execute(Endpoint::get(format!(
            "companies/v2/companies/domain/{}",
            segment(domain)
        )))
    }

    pub fn get(&self, company_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("companies/v2/companies/{company_id}")))
    }

    /// Contacts associated with a company.
    pub fn contacts(
        &self,
        company_id: u64,
        vid_offset: Option<u64>,
        count: Option<u32>,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("companies/v2/companies/{company_id}/contacts"))
                .params(Params::new().with("vidOffset", vid_offset).with("count", count)),
        )
    }

    /// IDs of the contacts associated with a company.
    pub fn contact_ids(
        &self,
        company_id: u64,
        vid_offset: Option<u64>,
        count: Option<u32>,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("companies/v2/companies/{company_id}/vids"))
                .params(Params::new().with("vidOffset", vid_offset).with("count", count)),
        )
    }

    pub fn add_contact(&self, company_id: u64, vid: u64) -> Result<Value> {
        self.base.execute(Endpoint::put(format!(
            "companies/v2/companies/{company_id}/contacts/{vid}"
        )))
    }

    pub fn remove_contact(&self, company_id: u64, vid: u64) -> Result<Value> {
        self.base.execute(Endpoint::delete(format!(
            "companies/v2/companies/{company_id}/contacts/{vid}"
        )))
    }
}
