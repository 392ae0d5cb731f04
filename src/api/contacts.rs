use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, wrap_properties, Endpoint, Params};

/// Which property values the contacts API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyMode {
    ValueOnly,
    ValueAndHistory,
}

impl PropertyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyMode::ValueOnly => "value_only",
            PropertyMode::ValueAndHistory => "value_and_history",
        }
    }
}

/// Which form submissions the contacts API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSubmissionMode {
    All,
    None,
    Newest,
    Oldest,
}

impl FormSubmissionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FormSubmissionMode::All => "all",
            FormSubmissionMode::None => "none",
            FormSubmissionMode::Newest => "newest",
            FormSubmissionMode::Oldest => "oldest",
        }
    }
}

/// Parameters for listing every contact in the portal.
#[derive(Debug, Clone, Default)]
pub struct ListContactsParams {
    /// Page size; HubSpot defaults to 20 and caps at 100.
    pub count: Option<u32>,
    /// `vid-offset` from the previous page.
    pub vid_offset: Option<u64>,
    pub property: Vec<String>,
    pub property_mode: Option<PropertyMode>,
    pub form_submission_mode: Option<FormSubmissionMode>,
    pub show_list_memberships: Option<bool>,
}

impl ListContactsParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("count", self.count)
            .with("vidOffset", self.vid_offset)
            .with("property", self.property.clone())
            .with("propertyMode", self.property_mode.map(PropertyMode::as_str))
            .with(
                "formSubmissionMode",
                self.form_submission_mode.map(FormSubmissionMode::as_str),
            )
            .with("showListMemberships", self.show_list_memberships)
    }
}

pub struct ContactsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ContactsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Create a contact. Plain property input is nested under `properties`;
    /// input that already has a `properties` key is sent unchanged.
    pub fn create(&self, properties: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post("contacts/v1/contact").json(wrap_properties(properties)))
    }

    pub fn update(&self, vid: u64, properties: Value) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("contacts/v1/contact/vid/{vid}/profile"))
                .json(wrap_properties(properties)),
        )
    }

    pub fn create_or_update(&self, email: &str, properties: Value) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!(
                "contacts/v1/contact/createOrUpdate/email/{}",
                segment(email)
            ))
            .json(wrap_properties(properties)),
        )
    }

    /// Create or update many contacts in one request. `batch` is the raw
    /// array of `{email|vid, properties}` objects.
    pub fn create_or_update_batch(&self, batch: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post("contacts/v1/contact/batch/").json(batch))
    }

    pub fn delete(&self, vid: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("contacts/v1/contact/vid/{vid}")))
    }

    /// Page through all contacts. Follow `vid-offset` while `has-more` is true.
    pub fn list(&self, params: &ListContactsParams) -> Result<Value> {
        self.base.execute(
            Endpoint::get("contacts/v1/lists/all/contacts/all").params(params.to_params()),
        )
    }

    /// Recently updated and created contacts (last 30 days).
    pub fn recently_updated(&self, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::get("contacts/v1/lists/recently_updated/contacts/recent").params(params),
        )
    }

    pub fn recently_created(&self, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::get("contacts/v1/lists/all/contacts/recent").params(params))
    }

    pub fn get(&self, vid: u64, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("contacts/v1/contact/vid/{vid}/profile")).params(params),
        )
    }

    pub fn get_by_email(&self, email: &str, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("contacts/v1/contact/email/{}/profile", segment(email)))
                .params(params),
        )
    }

    pub fn get_batch_by_email(&self, emails: &[&str], params: Params) -> Result<Value> {
        let mut params = params;
        params.insert("email", emails.to_vec());
        self.base
            .execute(Endpoint::get("contacts/v1/contact/emails/batch/").params(params))
    }

    /// Look a contact up by its `hubspotutk` tracking cookie.
    pub fn get_by_token(&self, utk: &str, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("contacts/v1/contact/utk/{}/profile", segment(utk)))
                .params(params),
        )
    }

    pub fn search(&self, query: &str, params: Params) -> Result<Value> {
        let mut params = params;
        params.insert("q", query);
        self.base
            .execute(Endpoint::get("contacts/v1/search/query").params(params))
    }

    /// Merge `vid_to_merge` into `vid`.
    pub fn merge(&self, vid: u64, vid_to_merge: u64) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("contacts/v1/contact/merge-vids/{vid}/"))
                .params(Params::new().with("vidToMerge", vid_to_merge)),
        )
    }
}
