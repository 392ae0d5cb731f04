use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{Endpoint, Params};

pub struct ContactListsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ContactListsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Create a list. `params` carries `dynamic`, `filters`, `portalId`, ...
    pub fn create(&self, name: &str, params: Params) -> Result<Value> {
        let mut params = params;
        params.insert("name", name);
        self.base
            .execute(Endpoint::post("contacts/v1/lists").params(params))
    }

    pub fn list(&self, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::get("contacts/v1/lists").params(params))
    }

    pub fn get(&self, list_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("contacts/v1/lists/{list_id}")))
    }

    pub fn update(&self, list_id: u64, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::post(format!("contacts/v1/lists/{list_id}")).params(params))
    }

    pub fn delete(&self, list_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("contacts/v1/lists/{list_id}")))
    }

    pub fn get_batch(&self, list_ids: &[u64]) -> Result<Value> {
        self.base.execute(
            Endpoint::get("contacts/v1/lists/batch")
                .params(Params::new().with("listId", list_ids.to_vec())),
        )
    }

    pub fn static_lists(&self, count: Option<u32>, offset: Option<u64>) -> Result<Value> {
        self.base.execute(
            Endpoint::get("contacts/v1/lists/static")
                .params(Params::new().with("count", count).with("offset", offset)),
        )
    }

    pub fn dynamic_lists(&self, count: Option<u32>, offset: Option<u64>) -> Result<Value> {
        self.base.execute(
            Endpoint::get("contacts/v1/lists/dynamic")
                .params(Params::new().with("count", count).with("offset", offset)),
        )
    }

    pub fn contacts_in_list(&self, list_id: u64, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("contacts/v1/lists/{list_id}/contacts/all")).params(params),
        )
    }

    pub fn recent_contacts_in_list(&self, list_id: u64, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("contacts/v1/lists/{list_id}/contacts/recent")).params(params),
        )
    }

    /// Add contacts to a static list by vid and/or email.
    pub fn add_contacts(&self, list_id: u64, vids: &[u64], emails: &[&str]) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("contacts/v1/lists/{list_id}/add")).params(
                Params::new()
                    .with("vids", vids.to_vec())
                    .with("emails", emails.to_vec()),
            ),
        )
    }

    /// Remove contacts from a static list.
    pub fn remove_contacts(&self, list_id: u64, vids: &[u64]) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("contacts/v1/lists/{list_id}/remove"))
                .params(Params::new().with("vids", vids.to_vec())),
        )
    }
}
