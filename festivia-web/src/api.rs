//! Role-scoped API client.
//!
//! Each client is bound to one role's endpoint namespace and tags every
//! outgoing request with that role's current bearer token when one is
//! persisted. Responses come back as-is: there is no retry, no token
//! refresh, and no logout-on-403 anywhere in this path.

use festivia_shared::models::{
    BookingSummary, CreatorSummary, DashboardStats, EventSummary, LoginRequest, LoginResponse,
    NewEvent, NewSubscription, PageQuery, Paged, Role, Subscription, UserSummary,
};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};

use crate::config::FrontendConfig;
use crate::error::{ApiError, ok_or_api_error};
use crate::session::store;

thread_local! {
    static SHARED_CLIENTS: OnceCell<[FestiviaClient; 3]> = const { OnceCell::new() };
}

/// Lightweight API client for one role's namespace.
#[derive(Clone, Debug)]
pub struct FestiviaClient {
    role: Role,
    base_url: String,
    client: Client,
}

impl FestiviaClient {
    /// Create a new client bound to `role` under the given base URL.
    pub fn new(role: Role, base_url: &str) -> Self {
        Self {
            role,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-role shared instance, built lazily from configuration.
    pub fn shared(role: Role) -> Self {
        SHARED_CLIENTS.with(|cell| {
            let clients = cell.get_or_init(|| {
                let config = FrontendConfig::default();
                Role::ALL.map(|role| Self::new(role, config.api_base_url()))
            });
            let index = Role::ALL
                .iter()
                .position(|candidate| *candidate == role)
                .unwrap_or_default();
            clients[index].clone()
        })
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// `{base}/{role}/{path}`.
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.role,
            path.trim_start_matches('/')
        )
    }

    /// Attach the current persisted token, if any. The persisted store
    /// is read at request time so a login in this tab is picked up
    /// without rebuilding the client.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match store::read(self.role).token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("login");
        let response = self.client.post(url).json(payload).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Tell the server the session ended. Local teardown happens in the
    /// session state regardless of this call's outcome.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.api_url("logout");
        let response = self.authorize(self.client.post(url)).send().await?;
        ok_or_api_error(response).await?;
        Ok(())
    }

    /// Aggregated dashboard figures for this role.
    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        let url = self.api_url("dashboard");
        let response = self.authorize(self.client.get(url)).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// List subscription plans visible to this role.
    pub async fn list_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        let url = self.api_url("subscriptions");
        let response = self.authorize(self.client.get(url)).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Create a subscription plan (creator namespace).
    pub async fn create_subscription(
        &self,
        payload: &NewSubscription,
    ) -> Result<Subscription, ApiError> {
        let url = self.api_url("subscriptions");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Subscribe the current user to a plan.
    pub async fn subscribe(&self, plan_id: &str) -> Result<Subscription, ApiError> {
        let url = self.api_url(&format!("subscriptions/{plan_id}/subscribe"));
        let response = self.authorize(self.client.post(url)).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Cancel a subscription.
    pub async fn cancel_subscription(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("subscriptions/{id}"));
        let response = self.authorize(self.client.delete(url)).send().await?;
        ok_or_api_error(response).await?;
        Ok(())
    }

    /// Paginated events for this role (all events for admin, own events
    /// for a creator).
    pub async fn events(&self, query: PageQuery) -> Result<Paged<EventSummary>, ApiError> {
        let url = self.api_url("events");
        let response = self
            .authorize(self.client.get(url))
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Submit a new event for approval (creator namespace).
    pub async fn create_event(&self, payload: &NewEvent) -> Result<EventSummary, ApiError> {
        let url = self.api_url("events");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Paginated booking history (user namespace).
    pub async fn bookings(&self, query: PageQuery) -> Result<Paged<BookingSummary>, ApiError> {
        let url = self.api_url("bookings");
        let response = self
            .authorize(self.client.get(url))
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Creator accounts awaiting approval (admin namespace).
    pub async fn pending_creators(&self) -> Result<Vec<CreatorSummary>, ApiError> {
        let url = self.api_url("approvals");
        let response = self.authorize(self.client.get(url)).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Approve a pending creator account (admin namespace).
    pub async fn approve_creator(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("approvals/{id}/approve"));
        let response = self.authorize(self.client.patch(url)).send().await?;
        ok_or_api_error(response).await?;
        Ok(())
    }

    /// Reject a pending creator account (admin namespace).
    pub async fn reject_creator(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("approvals/{id}/reject"));
        let response = self.authorize(self.client.patch(url)).send().await?;
        ok_or_api_error(response).await?;
        Ok(())
    }

    /// Paginated user accounts (admin namespace).
    pub async fn users(&self, query: PageQuery) -> Result<Paged<UserSummary>, ApiError> {
        let url = self.api_url("users");
        let response = self
            .authorize(self.client.get(url))
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Paginated creator accounts (admin namespace).
    pub async fn creators(&self, query: PageQuery) -> Result<Paged<CreatorSummary>, ApiError> {
        let url = self.api_url("creators");
        let response = self
            .authorize(self.client.get(url))
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Flip a user account's blocked flag (admin namespace).
    pub async fn toggle_user_block(&self, id: &str) -> Result<UserSummary, ApiError> {
        let url = self.api_url(&format!("users/{id}/block"));
        let response = self.authorize(self.client.patch(url)).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }

    /// Flip a creator account's blocked flag (admin namespace).
    pub async fn toggle_creator_block(&self, id: &str) -> Result<CreatorSummary, ApiError> {
        let url = self.api_url(&format!("creators/{id}/block"));
        let response = self.authorize(self.client.patch(url)).send().await?;
        Ok(ok_or_api_error(response).await?.json().await?)
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
