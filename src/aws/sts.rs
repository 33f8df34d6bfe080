use anyhow::{Context, Result};
use aws_config::{
    BehaviorVersion, Region, SdkConfig, ecs::EcsCredentialsProvider,
    imds::credentials::ImdsCredentialsProvider, meta::credentials::CredentialsProviderChain,
    profile::ProfileFileCredentialsProvider,
    web_identity_token::WebIdentityTokenCredentialsProvider,
};
use aws_credential_types::{
    Credentials as BaseCredentials,
    provider::{ProvideCredentials, error::CredentialsError},
};
use aws_sdk_sts::Client as StsClient;
use tracing::{debug, info};

use super::{Credentials, Environment, RoleRequest};
use crate::{constants::DEFAULT_AWS_REGION, error::MissingCredentials};

/// Credential chain in the SDK's default order, with environment-variable
/// credentials taken from the snapshot instead of the live environment
fn credentials_chain(env: &Environment, profile: Option<&str>) -> CredentialsProviderChain {
    let mut profile_provider = ProfileFileCredentialsProvider::builder();
    if let Some(profile) = profile {
        profile_provider = profile_provider.profile_name(profile);
    }
    let profile_provider = profile_provider.build();

    let chain = match env.static_credentials() {
        Some(creds) => CredentialsProviderChain::first_try("Environment", creds)
            .or_else("Profile", profile_provider),
        None => {
            debug!("No key pair in the environment snapshot, skipping environment credentials");
            CredentialsProviderChain::first_try("Profile", profile_provider)
        }
    };

    chain
        .or_else(
            "WebIdentityToken",
            WebIdentityTokenCredentialsProvider::builder().build(),
        )
        .or_else("EcsContainer", EcsCredentialsProvider::builder().build())
        .or_else(
            "Ec2InstanceMetadata",
            ImdsCredentialsProvider::builder().build(),
        )
}

/// Load AWS config whose credentials come from an environment snapshot.
///
/// Region priority: explicit override -> env/profile chain -> DEFAULT_AWS_REGION
pub async fn load_config(
    env: &Environment,
    profile: Option<&str>,
    region: Option<&str>,
) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials_chain(env, profile));

    if let Some(profile) = profile {
        debug!("Profile: {}", profile);
        loader = loader.profile_name(profile);
    }
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }

    let loaded = loader.load().await;

    match loaded.region() {
        Some(region) => {
            info!("Using region: {}", region);
            loaded
        }
        None => {
            info!(
                "No region configured, using default {} for STS",
                DEFAULT_AWS_REGION
            );
            loaded
                .into_builder()
                .region(Region::new(DEFAULT_AWS_REGION))
                .build()
        }
    }
}

/// Resolve base credentials once, before any STS call
pub async fn resolve_base_credentials(config: &SdkConfig) -> Result<BaseCredentials> {
    let provider = config.credentials_provider().ok_or(MissingCredentials)?;

    match provider.provide_credentials().await {
        Ok(creds) => {
            debug!("Base credentials resolved (access key {})", creds.access_key_id());
            Ok(creds)
        }
        Err(CredentialsError::CredentialsNotLoaded(_)) => Err(MissingCredentials.into()),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to load base AWS credentials")),
    }
}

/// Account ID of the identity behind the base credentials
pub async fn caller_account_id(client: &StsClient) -> Result<String> {
    info!("Calling AWS STS GetCallerIdentity");

    let response = client
        .get_caller_identity()
        .send()
        .await
        .context("Failed to get caller identity")?;

    let account = response
        .account()
        .context("AWS STS GetCallerIdentity returned no account")?;

    debug!("Account: {}", account);
    Ok(account.to_string())
}

/// Assume role with the base credentials of the client
pub async fn assume_role(client: &StsClient, request: &RoleRequest) -> Result<Credentials> {
    let role_arn = request.role_arn();

    info!("Calling AWS STS AssumeRole");
    debug!("Role ARN: {}", role_arn);
    debug!("Session name: {}", request.session_name);
    debug!("Duration: {} seconds", request.duration_seconds);

    let response = client
        .assume_role()
        .role_arn(&role_arn)
        .role_session_name(&request.session_name)
        .duration_seconds(request.duration_seconds)
        .send()
        .await
        .with_context(|| format!("Failed to assume role {role_arn}"))?;

    let sts_creds = response
        .credentials()
        .context("AWS STS returned no credentials")?;

    let credentials = Credentials {
        access_key_id: sts_creds.access_key_id().to_string(),
        secret_access_key: sts_creds.secret_access_key().to_string(),
        session_token: sts_creds.session_token().to_string(),
        expiration: *sts_creds.expiration(),
    };

    info!("Successfully obtained AWS credentials");
    Ok(credentials)
}
