use serde_json::{json, Value};

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::PipelineStage;
use crate::request::{segment, Endpoint};

pub struct DealPipelinesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> DealPipelinesClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn get(&self, pipeline_id: &str) -> Result<Value> {
        self.base.execute(Endpoint::get(format!(
            "deals/v1/pipelines/{}",
            segment(pipeline_id)
        )))
    }

    pub fn list(&self) -> Result<Value> {
        self.base.execute(Endpoint::get("deals/v1/pipelines"))
    }

    pub fn create(&self, label: &str, display_order: i64, stages: &[PipelineStage]) -> Result<Value> {
        let body = json!({
            "label": label,
            "displayOrder": display_order,
            "stages": stages,
        });
        self.base
            .execute(Endpoint::post("deals/v1/pipelines").json(body))
    }

    /// Replace a pipeline. Stages left out of `stages` are removed.
    pub fn update(
        &self,
        pipeline_id: &str,
        label: &str,
        display_order: i64,
        stages: &[PipelineStage],
    ) -> Result<Value> {
        let body = json!({
            "pipelineId": pipeline_id,
            "label": label,
            "displayOrder": display_order,
            "stages": stages,
        });
        self.base.execute(
            Endpoint::put(format!("deals/v1/pipelines/{}", segment(pipeline_id))).json(body),
        )
    }

    pub fn delete(&self, pipeline_id: &str) -> Result<Value> {
        self.base.execute(Endpoint::delete(format!(
            "deals/v1/pipelines/{}",
            segment(pipeline_id)
        )))
    }
}
