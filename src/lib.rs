//! HubSpot REST API client library for Rust.
//!
//! A blocking client for the [HubSpot API](https://developers.hubspot.com/docs/api/overview).
//! Every call turns into one HTTP request: parameters are shaped the way
//! HubSpot expects, credentials are attached, and the reply comes back as a
//! [`serde_json::Value`] or a [`HubSpotError`].
//!
//! # Quick Start
//!
//! ```no_run
//! use hubspot_client::{ClientConfig, HubSpotClient, Params};
//!
//! let config = ClientConfig::with_api_key("my-api-key").unwrap();
//! let client = HubSpotClient::new(config).unwrap();
//!
//! // Look up a contact by email
//! let contact = client
//!     .contacts()
//!     .get_by_email("jane@example.com", Params::new())
//!     .unwrap();
//! println!("vid: {}", contact["vid"]);
//! ```
//!
//! An OAuth access token takes precedence over an API key when both are set.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-export the main public types at the crate root for convenience.
pub use api::{
    AnalyticsClient, Association, AssociationDefinition, AssociationsClient, CalendarClient,
    CompaniesClient, ContactListsClient, ContactsClient, DealPipelinesClient, DealsClient,
    EngagementsClient, FilesClient, FormSubmissionMode, ListCompaniesParams, ListContactsParams,
    ListDealsParams, OwnersClient, ProductsClient, PropertiesClient, PropertyMode,
    RecentDealsParams, SummaryPeriod, TicketsClient, TimePeriod, TimelineClient,
    TransactionalEmailClient, WebhooksClient,
};
pub use client::HubSpotClient;
pub use config::{ClientConfig, ClientConfigBuilder, Credentials};
pub use error::{HubSpotError, Result};
pub use models::{
    AccessTokenInfo, ListOptions, ObjectType, PipelineStage, PropertyValue, TokenResponse,
};
pub use request::{build_request, Endpoint, IdList, Method, Params, RequestDescriptor};
pub use response::interpret;
pub use transport::{CancelToken, HttpTransport, RawResponse, Transport};
