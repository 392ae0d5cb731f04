use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, Endpoint, Params};

/// Timeline events and event types of one integration app.
pub struct TimelineClient<'a> {
    base: &'a BaseClient,
    app_id: u64,
}

impl<'a> TimelineClient<'a> {
    pub(crate) fn new(base: &'a BaseClient, app_id: u64) -> Self {
        Self { base, app_id }
    }

    fn route(&self, tail: &str) -> String {
        format!("integrations/v1/{}/timeline/{tail}", self.app_id)
    }

    pub fn app_id(&self) -> u64 {
        self.app_id
    }

    /// Create an event, or update it when `id` already exists.
    pub fn upsert_event(&self, event: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::put(self.route("event")).json(event))
    }

    pub fn get_event(&self, event_type_id: u64, event_id: &str) -> Result<Value> {
        self.base.execute(Endpoint::get(
            self.route(&format!("event/{event_type_id}/{}", segment(event_id))),
        ))
    }

    pub fn event_types(&self) -> Result<Value> {
        self.base.execute(Endpoint::get(self.route("event-types")))
    }

    /// `params` may carry `headerTemplate`, `detailTemplate`, `objectType`.
    pub fn create_event_type(&self, user_id: u64, name: &str, params: Params) -> Result<Value> {
        let params = params
            .with("applicationId", self.app_id)
            .with("name", name);
        self.base.execute(
            Endpoint::post(self.route("event-types"))
                .query("userId", user_id)
                .params(params),
        )
    }

    pub fn update_event_type(&self, event_type_id: u64, params: Params) -> Result<Value> {
        self.base.execute(
            Endpoint::put(self.route(&format!("event-types/{event_type_id}"))).params(params),
        )
    }

    pub fn delete_event_type(&self, event_type_id: u64, user_id: u64) -> Result<Value> {
        self.base.execute(
            Endpoint::delete(self.route(&format!("event-types/{event_type_id}")))
                .query("userId", user_id),
        )
    }

    pub fn event_type_properties(&self, event_type_id: u64) -> Result<Value> {
        self.base.execute(Endpoint::get(
            self.route(&format!("event-types/{event_type_id}/properties")),
        ))
    }

    pub fn create_event_type_property(
        &self,
        event_type_id: u64,
        name: &str,
        label: &str,
        property_type: &str,
        params: Params,
    ) -> Result<Value> {
        let params = params
            .with("name", name)
            .with("label", label)
            .with("propertyType", property_type);
        self.base.execute(
            Endpoint::post(self.route(&format!("event-types/{event_type_id}/properties")))
                .params(params),
        )
    }

    pub fn update_event_type_property(
        &self,
        event_type_id: u64,
        property_id: u64,
        params: Params,
    ) -> Result<Value> {
        let params = params.with("id", property_id);
        self.base.execute(
            Endpoint::put(self.route(&format!("event-types/{event_type_id}/properties")))
                .params(params),
        )
    }

    pub fn delete_event_type_property(&self, event_type_id: u64, property_id: u64) -> Result<Value> {
        self.base.execute(Endpoint::delete(self.route(&format!(
            "event-types/{event_type_id}/properties/{property_id}"
        ))))
    }
}

#[cfg(test)]
mod tests {
    use crate::request::{Method, Params};
    use crate::testing::{pairs, path, query, recording_client};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn upsert_puts_event() {
        let (client, transport) = recording_client();
        client
            .timeline(300)
            .upsert_event(json!({"id": "evt-1", "eventTypeId": 12}))
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(path(&req), "integrations/v1/300/timeline/event");
    }

    #[test]
    fn create_event_type_sends_user_in_query() {
        let (client, transport) = recording_client();
        client
            .timeline(300)
            .create_event_type(
                77,
                "Order shipped",
                Params::new().with("headerTemplate", "Order {{id}}"),
            )
            .unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "integrations/v1/300/timeline/event-types");
        assert_eq!(query(&req), pairs(&[("userId", "77")]));
        assert_eq!(
            req.json_body().unwrap(),
            json!({
                "applicationId": 300,
                "name": "Order shipped",
                "headerTemplate": "Order {{id}}",
            })
        );
    }

    #[test]
    fn update_property_adds_id() {
        let (client, transport) = recording_client();
        client
            .timeline(300)
            .update_event_type_property(12, 5, Params::new().with("label", "Total"))
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(
            path(&req),
            "integrations/v1/300/timeline/event-types/12/properties"
        );
        assert_eq!(req.json_body().unwrap(), json!({"id": 5, "label": "Total"}));
    }

    #[test]
    fn delete_event_type_keeps_user_query() {
        let (client, transport) = recording_client();
        client.timeline(300).delete_event_type(12, 77).unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(query(&req), pairs(&[("userId", "77")]));
        assert!(req.body.is_none());
    }

    #[test]
    fn event_ids_are_encoded_as_one_segment() {
        let (client, transport) = recording_client();
        client.timeline(7).get_event(1, "order#42").unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "integrations/v1/7/timeline/event/1/order%2342");
        assert_eq!(req.query(), Some("hapikey=demo"));
    }
}
