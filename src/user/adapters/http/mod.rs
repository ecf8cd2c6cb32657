//! HTTP client for the external identity registry.
//!
//! The registry answers `GET {base}/info?passportSerie=S&passportNumber=N`
//! with a JSON body carrying `surname`, `name`, `patronymic` and `address`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::user::{
    domain::{PassportNumber, PersonalDetails},
    ports::{IdentityResolver, IdentityResolverError, IdentityResult},
};

/// Body returned by the identity registry.
#[derive(Debug, Deserialize)]
struct IdentityPayload {
    surname: String,
    name: String,
    #[serde(default)]
    patronymic: String,
    address: String,
}

impl From<IdentityPayload> for PersonalDetails {
    fn from(payload: IdentityPayload) -> Self {
        Self::new(
            payload.surname,
            payload.name,
            payload.patronymic,
            payload.address,
        )
    }
}

/// Identity resolver backed by the registry's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpIdentityResolver {
    base_url: String,
    client: reqwest::Client,
}

impl HttpIdentityResolver {
    /// Creates a resolver for the registry rooted at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored. Without a timeout, requests
    /// wait for as long as the registry keeps the connection open.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityResolverError::Transport`] when the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> IdentityResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }
        let client = builder.build().map_err(IdentityResolverError::transport)?;
        let base: String = base_url.into();

        Ok(Self {
            base_url: base.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Returns the lookup URL for a passport.
    #[must_use]
    pub fn lookup_url(&self, passport: &PassportNumber) -> String {
        format!(
            "{}/info?passportSerie={}&passportNumber={}",
            self.base_url,
            passport.series(),
            passport.number()
        )
    }
}

#[async_trait]
impl IdentityResolver for HttpIdentityResolver {
    async fn resolve(&self, passport: &PassportNumber) -> IdentityResult<PersonalDetails> {
        let url = self.lookup_url(passport);
        tracing::debug!(%url, "querying identity registry");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(IdentityResolverError::transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(IdentityResolverError::UnexpectedStatus(status.as_u16()));
        }

        let payload: IdentityPayload = response
            .json()
            .await
            .map_err(IdentityResolverError::invalid_response)?;
        Ok(payload.into())
    }
}
