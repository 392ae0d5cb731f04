use std::sync::Arc;

use serde_json::Value;

use crate::api::{
    AnalyticsClient, AssociationsClient, CalendarClient, CompaniesClient, ContactListsClient,
    ContactsClient, DealPipelinesClient, DealsClient, EngagementsClient, FilesClient,
    OwnersClient, ProductsClient, PropertiesClient, TicketsClient, TimelineClient,
    TransactionalEmailClient, WebhooksClient,
};
use crate::config::ClientConfig;
use crate::error::{HubSpotError, Result};
use crate::models::{AccessTokenInfo, ObjectType, TokenResponse};
use crate::request::{segment, Endpoint, Params};
use crate::response::{decode, interpret, is_status_ok};
use crate::transport::{CancelToken, HttpTransport, Transport};

// ---------------------------------------------------------------------------
// Internal request plumbing
// ---------------------------------------------------------------------------

/// Configuration and transport shared by every sub-client.
#[derive(Clone)]
pub(crate) struct BaseClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    cancel: Option<CancelToken>,
}

impl BaseClient {
    /// Build the request, dispatch it and interpret the response.
    pub(crate) fn execute(&self, endpoint: Endpoint) -> Result<Value> {
        let request = endpoint.build(&self.config);

        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            tracing::debug!(method = %request.method, route = request.route(), "request cancelled before dispatch");
            return Err(HubSpotError::Cancelled);
        }

        tracing::debug!(method = %request.method, route = request.route(), "sending HubSpot request");
        let response = self.transport.send(&request).map_err(|e| {
            tracing::warn!(method = %request.method, route = request.route(), error = %e, "transport failure");
            e
        })?;

        if !is_status_ok(response.status) {
            tracing::warn!(
                method = %request.method,
                route = request.route(),
                status = response.status,
                "HubSpot returned an error status"
            );
        }
        interpret(response)
    }
}

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for interacting with the HubSpot API.
///
/// ```no_run
/// use hubspot_client::{ClientConfig, HubSpotClient};
/// use serde_json::json;
///
/// let config = ClientConfig::with_oauth_token("my-token").unwrap();
/// let client = HubSpotClient::new(config).unwrap();
/// let created = client.contacts().create(json!({"email": "jane@example.com"})).unwrap();
/// println!("new contact: {}", created["vid"]);
/// ```
#[derive(Clone)]
pub struct HubSpotClient {
    base: BaseClient,
}

impl HubSpotClient {
    /// Create a client that talks HTTP through `reqwest`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of a custom [`Transport`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base: BaseClient {
                config: Arc::new(config),
                transport,
                cancel: None,
            },
        }
    }

    /// Create a client from `HUBSPOT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// A handle sharing this client's configuration and transport whose
    /// requests fail with [`HubSpotError::Cancelled`] once `token` fires.
    pub fn with_cancel_token(&self, token: CancelToken) -> Self {
        let mut base = self.base.clone();
        base.cancel = Some(token);
        Self { base }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.base.config
    }

    /// Run an arbitrary endpoint with this client's credentials.
    pub fn execute(&self, endpoint: Endpoint) -> Result<Value> {
        self.base.execute(endpoint)
    }

    // -- OAuth ---------------------------------------------------------------

    /// Exchange an authorization code for access and refresh tokens.
    pub fn get_oauth_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        code: &str,
    ) -> Result<TokenResponse> {
        let params = Params::new()
            .with("grant_type", "authorization_code")
            .with("client_id", client_id)
            .with("client_secret", client_secret)
            .with("redirect_uri", redirect_uri)
            .with("code", code);
        self.token_exchange(params)
    }

    /// Trade a refresh token for a fresh access token.
    pub fn refresh_oauth_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        refresh_token: &str,
    ) -> Result<TokenResponse> {
        let params = Params::new()
            .with("grant_type", "refresh_token")
            .with("client_id", client_id)
            .with("client_secret", client_secret)
            .with("redirect_uri", redirect_uri)
            .with("refresh_token", refresh_token);
        self.token_exchange(params)
    }

    fn token_exchange(&self, params: Params) -> Result<TokenResponse> {
        let endpoint = Endpoint::post("oauth/v1/token")
            .params(params)
            .form()
            .without_auth();
        decode(self.base.execute(endpoint)?)
    }

    pub fn get_oauth_token_info(&self, token: &str) -> Result<AccessTokenInfo> {
        let endpoint = Endpoint::get(format!("oauth/v1/access-tokens/{}", segment(token)));
        decode(self.base.execute(endpoint)?)
    }

    /// API call usage for the current day.
    pub fn check_daily_usage(&self) -> Result<Value> {
        self.base.execute(Endpoint::get("integrations/v1/limit/daily"))
    }

    // -- sub-client accessors ------------------------------------------------

    pub fn analytics(&self) -> AnalyticsClient<'_> {
        AnalyticsClient::new(&self.base)
    }

    pub fn associations(&self) -> AssociationsClient<'_> {
        AssociationsClient::new(&self.base)
    }

    pub fn calendar(&self) -> CalendarClient<'_> {
        CalendarClient::new(&self.base)
    }

    pub fn companies(&self) -> CompaniesClient<'_> {
        CompaniesClient::new(&self.base)
    }

    pub fn company_properties(&self) -> PropertiesClient<'_> {
        PropertiesClient::new(&self.base, ObjectType::Company)
    }

    pub fn contacts(&self) -> ContactsClient<'_> {
        ContactsClient::new(&self.base)
    }

    pub fn contact_lists(&self) -> ContactListsClient<'_> {
        ContactListsClient::new(&self.base)
    }

    pub fn contact_properties(&self) -> PropertiesClient<'_> {
        PropertiesClient::new(&self.base, ObjectType::Contact)
    }

    pub fn deals(&self) -> DealsClient<'_> {
        DealsClient::new(&self.base)
    }

    pub fn deal_pipelines(&self) -> DealPipelinesClient<'_> {
        DealPipelinesClient::new(&self.base)
    }

    pub fn deal_properties(&self) -> PropertiesClient<'_> {
        PropertiesClient::new(&self.base, ObjectType::Deal)
    }

    pub fn engagements(&self) -> EngagementsClient<'_> {
        EngagementsClient::new(&self.base)
    }

    pub fn files(&self) -> FilesClient<'_> {
        FilesClient::new(&self.base)
    }

    pub fn owners(&self) -> OwnersClient<'_> {
        OwnersClient::new(&self.base)
    }

    pub fn products(&self) -> ProductsClient<'_> {
        ProductsClient::new(&self.base)
    }

    pub fn tickets(&self) -> TicketsClient<'_> {
        TicketsClient::new(&self.base)
    }

    /// Timeline API for the integration app `app_id`.
    pub fn timeline(&self, app_id: u64) -> TimelineClient<'_> {
        TimelineClient::new(&self.base, app_id)
    }

    pub fn transactional_email(&self) -> TransactionalEmailClient<'_> {
        TransactionalEmailClient::new(&self.base)
    }

    /// Webhooks API for the integration app `app_id`.
    pub fn webhooks(&self, app_id: u64) -> WebhooksClient<'_> {
        WebhooksClient::new(&self.base, app_id)
    }
}
