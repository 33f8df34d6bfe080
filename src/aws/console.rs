use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::{Credentials, Partition};
use crate::constants::FEDERATION_ISSUER;

// AWS Federation API types (internal use only)
// These types match the exact JSON format expected by AWS federation endpoint

/// Session credentials format for AWS federation getSigninToken API
#[derive(Debug, Serialize)]
struct SessionCredentials<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
    #[serde(rename = "sessionKey")]
    session_key: &'a str,
    #[serde(rename = "sessionToken")]
    session_token: &'a str,
}

impl<'a> From<&'a Credentials> for SessionCredentials<'a> {
    fn from(creds: &'a Credentials) -> Self {
        Self {
            session_id: &creds.access_key_id,
            session_key: &creds.secret_access_key,
            session_token: &creds.session_token,
        }
    }
}

/// Response from AWS federation getSigninToken API
#[derive(Debug, Deserialize)]
struct SigninTokenResponse {
    #[serde(rename = "SigninToken")]
    signin_token: String,
}

/// Client for the AWS federation (sign-in) endpoint
#[derive(Debug, Clone)]
pub struct Federation {
    endpoint: Url,
    destination: String,
    client: Client,
}

impl Federation {
    pub fn new(endpoint: Url, destination: impl Into<String>) -> Self {
        Self {
            endpoint,
            destination: destination.into(),
            client: Client::new(),
        }
    }

    /// Federation endpoint and console home of the given partition
    pub fn for_partition(partition: Partition) -> Result<Self> {
        let amazon_domain = partition.console_domain();
        let endpoint = Url::parse(&format!("https://signin.{amazon_domain}/federation"))?;
        let destination = format!("https://console.{amazon_domain}/console/home");
        Ok(Self::new(endpoint, destination))
    }

    #[cfg(test)]
    fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Exchange temporary credentials for a console login URL
    pub async fn login_url_for(&self, creds: &Credentials, duration_seconds: i32) -> Result<Url> {
        let signin_token = self.signin_token(creds, duration_seconds).await?;
        Ok(self.login_url(&signin_token))
    }

    /// Get signin token from AWS federation endpoint
    pub async fn signin_token(&self, creds: &Credentials, duration_seconds: i32) -> Result<String> {
        let session_json = serde_json::to_string(&SessionCredentials::from(creds))?;

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("Action", "getSigninToken")
            .append_pair("SessionDuration", &duration_seconds.to_string())
            .append_pair("Session", &session_json);

        info!("Requesting sign-in token from {}", self.endpoint);
        debug!("Session duration: {} seconds", duration_seconds);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to get signin token")?;

        if !response.status().is_success() {
            bail!("Failed to get signin token: {}", response.status());
        }

        let token_response: SigninTokenResponse = response
            .json()
            .await
            .context("Failed to parse signin token response")?;

        Ok(token_response.signin_token)
    }

    /// Build the console login URL carrying a sign-in token
    pub fn login_url(&self, signin_token: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("Action", "login")
            .append_pair("Issuer", FEDERATION_ISSUER)
            .append_pair("Destination", &self.destination)
            .append_pair("SigninToken", signin_token);
        url
    }
}
