use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, Endpoint, Params};

/// Marketing calendar events and tasks. Dates are epoch milliseconds.
pub struct CalendarClient<'a> {
    base: &'a BaseClient,
}

impl<'a> CalendarClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    fn events(&self, route: &str, start_date: u64, end_date: u64, params: Params) -> Result<Value> {
        let params = params
            .with("startDate", start_date)
            .with("endDate", end_date);
        self.base.execute(Endpoint::get(route).params(params))
    }

    pub fn content_events(&self, start_date: u64, end_date: u64, params: Params) -> Result<Value> {
        self.events("calendar/v1/events/content", start_date, end_date, params)
    }

    pub fn social_events(&self, start_date: u64, end_date: u64, params: Params) -> Result<Value> {
        self.events("calendar/v1/events/social", start_date, end_date, params)
    }

    pub fn task_events(&self, start_date: u64, end_date: u64, params: Params) -> Result<Value> {
        self.events("calendar/v1/events/task", start_date, end_date, params)
    }

    pub fn all_events(&self, start_date: u64, end_date: u64, params: Params) -> Result<Value> {
        self.events("calendar/v1/events", start_date, end_date, params)
    }

    pub fn create_task(&self, task: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::post("calendar/v1/events/task").json(task))
    }

    pub fn get_task(&self, task_id: &str) -> Result<Value> {
        self.base.execute(Endpoint::get(task_route(task_id)))
    }

    pub fn update_task(&self, task_id: &str, task: Value) -> Result<Value> {
        self.base
            .execute(Endpoint::put(task_route(task_id)).json(task))
    }

    pub fn delete_task(&self, task_id: &str) -> Result<Value> {
        self.base.execute(Endpoint::delete(task_route(task_id)))
    }
}

fn task_route(task_id: &str) -> String {
    format!("calendar/v1/events/task/{}", segment(task_id))
}
