use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, Endpoint, Params};

/// Portal users that can own CRM records.
pub struct OwnersClient<'a> {
    base: &'a BaseClient,
}

impl<'a> OwnersClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// All owners, optionally narrowed to one email address.
    pub fn list(&self, email: Option<&str>, include_inactive: Option<bool>) -> Result<Value> {
        self.base.execute(
            Endpoint::get("owners/v2/owners").params(
                Params::new()
                    .with("email", email)
                    .with("includeInactive", include_inactive),
            ),
        )
    }

    pub fn get(&self, owner_id: &str) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("owners/v2/owners/{}", segment(owner_id))))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{pairs, path, query, recording_client};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_filters_by_email() {
        let (client, transport) = recording_client();
        client
            .owners()
            .list(Some("ops@example.com"), Some(false))
            .unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "owners/v2/owners");
        assert_eq!(
            query(&req),
            pairs(&[("email", "ops@example.com"), ("includeInactive", "false")])
        );
    }

    #[test]
    fn get_by_id() {
        let (client, transport) = recording_client();
        client.owners().get("66").unwrap();
        assert_eq!(path(&transport.last()), "owners/v2/owners/66");
    }
}
