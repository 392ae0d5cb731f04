use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, Endpoint, Params};

/// SMTP API tokens for transactional email.
pub struct TransactionalEmailClient<'a> {
    base: &'a BaseClient,
}

impl<'a> TransactionalEmailClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn smtp_tokens(&self) -> Result<Value> {
        self.base
            .execute(Endpoint::get("email/public/v1/smtpapi/tokens"))
    }

    pub fn create_smtp_token(&self, created_by: &str, campaign_name: &str) -> Result<Value> {
        self.base.execute(
            Endpoint::post("email/public/v1/smtpapi/tokens").params(
                Params::new()
                    .with("createdBy", created_by)
                    .with("campaignName", campaign_name),
            ),
        )
    }

    pub fn reset_smtp_password(&self, user_name: &str) -> Result<Value> {
        self.base.execute(Endpoint::post(format!(
            "email/public/v1/smtpapi/tokens/{}/password-reset",
            segment(user_name)
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::request::Method;
    use crate::testing::{path, recording_client};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn create_token_posts_campaign() {
        let (client, transport) = recording_client();
        client
            .transactional_email()
            .create_smtp_token("ops@example.com", "Receipts")
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(path(&req), "email/public/v1/smtpapi/tokens");
        assert_eq!(
            req.json_body().unwrap(),
            json!({"createdBy": "ops@example.com", "campaignName": "Receipts"})
        );
    }

    #[test]
    fn reset_password_targets_user() {
        let (client, transport) = recording_client();
        client
            .transactional_email()
            .reset_smtp_password("smtp-user-1")
            .unwrap();
        assert_eq!(
            path(&transport.last()),
            "email/public/v1/smtpapi/tokens/smtp-user-1/password-reset"
        );
    }
}
