use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{Endpoint, Params};

/// File manager metadata.
pub struct FilesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> FilesClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::get("filemanager/api/v2/files").params(params))
    }

    pub fn get(&self, file_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("filemanager/api/v2/files/{file_id}")))
    }

    /// Delete the file and purge it from the CDN.
    pub fn hard_delete(&self, file_id: u64) -> Result<Value> {
        self.base.execute(Endpoint::post(format!(
            "filemanager/api/v2/files/{file_id}/full-delete"
        )))
    }
}
