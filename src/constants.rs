/// Session name used for the AssumeRole call unless overridden
pub const DEFAULT_SESSION_NAME: &str = "AssumeRoleSession";

/// Minimum session duration in seconds
pub const MIN_SESSION_DURATION_SECS: i64 = 3600;

/// Maximum session duration in seconds
pub const MAX_SESSION_DURATION_SECS: i64 = 43200;

/// Default session duration in seconds (12h)
pub const DEFAULT_SESSION_DURATION_SECS: i64 = MAX_SESSION_DURATION_SECS;

/// Default AWS region for STS operations when no region is configured
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Issuer sent with the federation login request
pub const FEDERATION_ISSUER: &str = "NA";

/// Environment variable holding a temporary session token
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Environment variable holding an access key id
pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding a secret access key
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Message shown when the credential chain yields nothing
pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "No AWS credentials found. Run `aws configure` first.";
