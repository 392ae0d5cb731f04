use serde_json::{json, Value};

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{Endpoint, IdList, Params};

const ROOT: &str = "crm-objects/v1/objects/products";

pub struct ProductsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ProductsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self, offset: Option<u64>, properties: &[&str]) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("{ROOT}/paged")).params(
                Params::new()
                    .with("offset", offset)
                    .with("properties", properties.to_vec()),
            ),
        )
    }

    pub fn get(
        &self,
        product_id: u64,
        properties: &[&str],
        include_deleted: Option<bool>,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!("{ROOT}/{product_id}")).params(
                Params::new()
                    .with("includeDeletes", include_deleted)
                    .with("properties", properties.to_vec()),
            ),
        )
    }

    pub fn get_batch(
        &self,
        ids: impl Into<IdList>,
        properties: &[&str],
        include_deleted: Option<bool>,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("{ROOT}/batch-read"))
                .query("includeDeletes", include_deleted)
                .query("properties", properties.to_vec())
                .json(json!({
                    "ids": Value::from(ids.into()),
                    "properties": properties,
                })),
        )
    }

    /// Create a product from a `[{name, value}, ...]` property array.
    pub fn create(&self, product: Value) -> Result<Value> {
        self.base.execute(Endpoint::post(ROOT).json(product))
    }

    pub fn create_batch(&self, products: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post(format!("{ROOT}/batch-create")).json(products))
    }

    pub fn update(&self, product_id: u64, product: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::put(format!("{ROOT}/{product_id}")).json(product))
    }

    pub fn update_batch(&self, products: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post(format!("{ROOT}/batch-update")).json(products))
    }

    pub fn delete(&self, product_id: u64) -> Result<Value> {
        self.base
            .execute(Endpoint::delete(format!("{ROOT}/{product_id}")))
    }

    pub fn delete_batch(&self, ids: impl Into<IdList>) -> Result<Value> {
        self.base.execute(
            Endpoint::post(format!("{ROOT}/batch-delete"))
                .json(json!({ "ids": Value::from(ids.into()) })),
        )
    }

    pub fn changes(&self, params: Params) -> Result<Value> {
        self.base
            .execute(Endpoint::get("crm-objects/v1/change-log/products").params(params))
    }
}

#[cfg(test)]
mod tests {
    use crate::request::{Method, Params};
    use crate::testing::{pairs, path, query, recording_client};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn list_omits_missing_offset() {
        let (client, transport) = recording_client();
        client.products().list(None, &["name", "price"]).unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "crm-objects/v1/objects/products/paged");
        assert_eq!(
            query(&req),
            pairs(&[("properties", "name"), ("properties", "price")])
        );
    }

    #[test]
    fn batch_read_keeps_ids_in_body() {
        let (client, transport) = recording_client();
        client
            .products()
            .get_batch(&[10u64, 11][..], &["name"], None)
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(query(&req), pairs(&[("properties", "name")]));
        assert_eq!(
            req.json_body().unwrap(),
            json!({"ids": ["10", "11"], "properties": ["name"]})
        );
    }

    #[test]
    fn update_is_a_put() {
        let (client, transport) = recording_client();
        client
            .products()
            .update(10, json!([{"name": "price", "value": "9.99"}]))
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(path(&req), "crm-objects/v1/objects/products/10");
    }

    #[test]
    fn changes_forward_filters() {
        let (client, transport) = recording_client();
        client
            .products()
            .changes(Params::new().with("timestamp", 1_500_000_000_000u64))
            .unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "crm-objects/v1/change-log/products");
        assert_eq!(query(&req), pairs(&[("timestamp", "1500000000000")]));
    }
}
