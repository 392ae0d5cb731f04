use serde_json::Value;

use crate::client::BaseClient;
use crate::error::Result;
use crate::request::{segment, Endpoint, Params};

/// Report granularity accepted by the analytics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Total,
    Daily,
    Weekly,
    Monthly,
    Summarize(SummaryPeriod),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl TimePeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Total => "total",
            TimePeriod::Daily => "daily",
            TimePeriod::Weekly => "weekly",
            TimePeriod::Monthly => "monthly",
            TimePeriod::Summarize(SummaryPeriod::Daily) => "summarize/daily",
            TimePeriod::Summarize(SummaryPeriod::Weekly) => "summarize/weekly",
            TimePeriod::Summarize(SummaryPeriod::Monthly) => "summarize/monthly",
        }
    }
}

/// Traffic and content reports. Dates are `YYYYMMDD`.
pub struct AnalyticsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> AnalyticsClient<'a> {
    pub(crate) fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    fn report(&self, category: &str, period: TimePeriod, start: &str, end: &str, params: Params) -> Result<Value> {
        let params = params.with("start", start).with("end", end);
        self.base.execute(
            Endpoint::get(format!(
                "analytics/v2/reports/{}/{}",
                segment(category),
                period.as_str()
            ))
            .params(params),
        )
    }

    /// Data broken down by `totals`, `sessions`, `sources`, `geolocation`, ...
    pub fn breakdown(
        &self,
        breakdown_by: &str,
        period: TimePeriod,
        start: &str,
        end: &str,
        params: Params,
    ) -> Result<Value> {
        self.report(breakdown_by, period, start, end, params)
    }

    /// Data for one object type: `pages`, `forms`, `social-assists`, ...
    pub fn object_report(
        &self,
        object_type: &str,
        period: TimePeriod,
        start: &str,
        end: &str,
        params: Params,
    ) -> Result<Value> {
        self.report(object_type, period, start, end, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pairs, path, query, recording_client};
    use pretty_assertions::assert_eq;

    #[test]
    fn dates_override_extra_params() {
        let (client, transport) = recording_client();
        client
            .analytics()
            .breakdown(
                "sources",
                TimePeriod::Total,
                "20240101",
                "20240131",
                Params::new().with("start", "19990101").with("limit", 5),
            )
            .unwrap();
        let req = transport.last();
        assert_eq!(path(&req), "analytics/v2/reports/sources/total");
        assert_eq!(
            query(&req),
            pairs(&[("end", "20240131"), ("limit", "5"), ("start", "20240101")])
        );
    }

    #[test]
    fn summarized_periods_span_two_segments() {
        let (client, transport) = recording_client();
        client
            .analytics()
            .object_report(
                "pages",
                TimePeriod::Summarize(SummaryPeriod::Weekly),
                "20240101",
                "20240301",
                Params::new(),
            )
            .unwrap();
        assert_eq!(
            path(&transport.last()),
            "analytics/v2/reports/pages/summarize/weekly"
        );
    }
}
