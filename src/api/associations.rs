use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{Endpoint, Params};

const ROOT: &str = "crm-associations/v1/associations";

/// HubSpot-defined association type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationDefinition(pub u32);

impl AssociationDefinition {
    pub const CONTACT_TO_COMPANY: Self = Self(1);
    pub const COMPANY_TO_CONTACT: Self = Self(2);
    pub const DEAL_TO_CONTACT: Self = Self(3);
    pub const CONTACT_TO_DEAL: Self = Self(4);
    pub const DEAL_TO_COMPANY: Self = Self(5);
    pub const COMPANY_TO_DEAL: Self = Self(6);
    pub const COMPANY_TO_ENGAGEMENT: Self = Self(7);
    pub const ENGAGEMENT_TO_COMPANY: Self = Self(8);
    pub const CONTACT_TO_ENGAGEMENT: Self = Self(9);
    pub const ENGAGEMENT_TO_CONTACT: Self = Self(10);
    pub const DEAL_TO_ENGAGEMENT: Self = Self(11);
    pub const ENGAGEMENT_TO_DEAL: Self = Self(12);
    pub const PARENT_TO_CHILD_COMPANY: Self = Self(13);
    pub const CHILD_TO_PARENT_COMPANY: Self = Self(14);
    pub const CONTACT_TO_TICKET: Self = Self(15);
    pub const TICKET_TO_CONTACT: Self = Self(16);
    pub const TICKET_TO_ENGAGEMENT: Self = Self(17);
    pub const ENGAGEMENT_TO_TICKET: Self = Self(18);
    pub const DEAL_TO_LINE_ITEM: Self = Self(19);
    pub const LINE_ITEM_TO_DEAL: Self = Self(20);
    pub const COMPANY_TO_TICKET: Self = Self(25);
    pub const TICKET_TO_COMPANY: Self = Self(26);
    pub const DEAL_TO_TICKET: Self = Self(27);
    pub const TICKET_TO_DEAL: Self = Self(28);

    pub fn id(self) -> u32 {
        self.0
    }
}

/// One association edge, as sent to the create and delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub from_object_id: u64,
    pub to_object_id: u64,
    pub definition_id: AssociationDefinition,
    pub category: String,
}

impl Association {
    /// A `HUBSPOT_DEFINED` association.
    pub fn new(from_object_id: u64, to_object_id: u64, definition: AssociationDefinition) -> Self {
        Self {
            from_object_id,
            to_object_id,
            definition_id: definition,
            category: "HUBSPOT_DEFINED".to_string(),
        }
    }
}

pub struct AssociationsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> AssociationsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// IDs associated with `object_id` under one definition.
    pub fn list(
        &self,
        object_id: u64,
        definition: AssociationDefinition,
        limit: Option<u32>,
        offset: Option<u64>,
    ) -> Result<Value> {
        self.base.execute(
            Endpoint::get(format!(
                "{ROOT}/{object_id}/HUBSPOT_DEFINED/{}",
                definition.id()
            ))
            .params(Params::new().with("limit", limit).with("offset", offset)),
        )
    }

    pub fn create(&self, association: &Association) -> Result<Value> {
        self.base
            .execute(Endpoint::put(ROOT).json(json!(association)))
    }

    pub fn create_batch(&self, associations: &[Association]) -> Result<Value> {
        self.base
            .execute(Endpoint::put(format!("{ROOT}/create-batch")).json(json!(associations)))
    }

    pub fn delete(&self, association: &Association) -> Result<Value> {
        self.base.execute(
            Endpoint::put(format!("{ROOT}/delete")).json(json!(association)),
        )
    }

    pub fn delete_batch(&self, associations: &[Association]) -> Result<Value> {
        self.base
            .execute(Endpoint::put(format!("{ROOT}/delete-batch")).json(json!(associations)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use crate::testing::{pairs, path, query, recording_client};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_uses_definition_in_route() {
        let (client, transport) = recording_client();
        client
            .associations()
            .list(12, AssociationDefinition::TICKET_TO_CONTACT, Some(10), None)
            .unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "crm-associations/v1/associations/12/HUBSPOT_DEFINED/16");
        assert_eq!(query(&req), pairs(&[("limit", "10")]));
    }

    #[test]
    fn create_puts_edge() {
        let (client, transport) = recording_client();
        client
            .associations()
            .create(&Association::new(1, 2, AssociationDefinition::CONTACT_TO_TICKET))
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(path(&req), "crm-associations/v1/associations");
        assert_eq!(
            req.json_body().unwrap(),
            json!({
                "fromObjectId": 1,
                "toObjectId": 2,
                "definitionId": 15,
                "category": "HUBSPOT_DEFINED",
            })
        );
    }

    #[test]
    fn batches_send_arrays() {
        let (client, transport) = recording_client();
        let edges = [
            Association::new(1, 2, AssociationDefinition::DEAL_TO_LINE_ITEM),
            Association::new(1, 3, AssociationDefinition::DEAL_TO_LINE_ITEM),
        ];
        client.associations().create_batch(&edges).unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "crm-associations/v1/associations/create-batch");
        assert_eq!(req.json_body().unwrap().as_array().map(Vec::len), Some(2));

        client.associations().delete(&edges[0]).unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(path(&req), "crm-associations/v1/associations/delete");
    }

    #[test]
    fn definition_serializes_as_number() {
        let edge = Association::new(5, 6, AssociationDefinition::COMPANY_TO_TICKET);
        assert_eq!(serde_json::to_value(&edge).unwrap()["definitionId"], json!(25));
    }
}
