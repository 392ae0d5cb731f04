use serde_json::{json, Value};

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{Endpoint, Params};

/// Webhook subscriptions and settings of one app.
pub struct WebhooksClient<'a> {
    base: &'a BaseClient,
    app_id: u64,
}

impl<'a> WebhooksClient<'a> {
    pub(crate) fn new(base: &'a BaseClient, app_id: u64) -> Self {
        Self { base, app_id }
    }

    pub fn app_id(&self) -> u64 {
        self.app_id
    }

    pub fn subscriptions(&self) -> Result<Value> {
        self.base.execute(Endpoint::get(format!(
            "webhooks/v1/{}/subscriptions",
            self.app_id
        )))
    }

    /// Subscribe to an event such as `contact.propertyChange`.
    pub fn create_subscription(
        &self,
        subscription_type: &str,
        property_name: Option<&str>,
        enabled: bool,
    ) -> Result<Value> {
        let mut details = Params::new().with("subscriptionType", subscription_type);
        if let Some(name) = property_name {
            details.insert("propertyName", name);
        }
        self.base.execute(
            Endpoint::post(format!("webhooks/v1/{}/subscriptions", self.app_id)).json(json!({
                "subscriptionDetails": Value::from(details),
                "enabled": enabled,
            })),
        )
    }

    pub fn update_subscription(&self, subscription_id: u64, enabled: bool) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!(
                "webhooks/v1/{}/subscriptions/{subscription_id}",
                self.app_id
            ))
            .params(Params::new().with("enabled", enabled)),
        )
    }

    pub fn delete_subscription(&self, subscription_id: u64) -> Result<Value> {
        self.base.execute(Endpoint::delete(format!(
            "webhooks/v1/{}/subscriptions/{subscription_id}",
            self.app_id
        )))
    }

    pub fn settings(&self) -> Result<Value> {
        self.base
            .execute(Endpoint::get(format!("webhooks/v1/{}/settings", self.app_id)))
    }

    pub fn update_settings(&self, webhook_url: &str, max_concurrent_requests: u32) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!("webhooks/v1/{}/settings", self.app_id)).params(
                Params::new()
                    .with("webhookUrl", webhook_url)
                    .with("maxConcurrentRequests", max_concurrent_requests),
            ),
        )
    }
}
