//! Endpoint families. Each client borrows the shared [`HubSpotClient`]
//! internals and maps its methods onto HubSpot routes.
//!
//! [`HubSpotClient`]: crate::HubSpotClient

pub mod analytics;
pub mod associations;
pub mod calendar;
pub mod companies;
pub mod contact_lists;
pub mod contacts;
pub mod deals;
pub mod engagements;
pub mod files;
pub mod owners;
pub mod pipelines;
pub mod products;
pub mod properties;
pub mod tickets;
pub mod timeline;
pub mod transactional_email;
pub mod webhooks;

pub use analytics::{AnalyticsClient, SummaryPeriod, TimePeriod};
pub use associations::{Association, AssociationDefinition, AssociationsClient};
pub use calendar::CalendarClient;
pub use companies::{CompaniesClient, ListCompaniesParams};
pub use contact_lists::ContactListsClient;
pub use contacts::{ContactsClient, FormSubmissionMode, ListContactsParams, PropertyMode};
pub use deals::{DealsClient, ListDealsParams, RecentDealsParams};
pub use engagements::EngagementsClient;
pub use files::FilesClient;
pub use owners::OwnersClient;
pub use pipelines::DealPipelinesClient;
pub use products::ProductsClient;
pub use properties::PropertiesClient;
pub use tickets::TicketsClient;
pub use timeline::TimelineClient;
pub use transactional_email::TransactionalEmailClient;
pub use webhooks::WebhooksClient;
