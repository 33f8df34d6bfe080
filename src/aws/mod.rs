use aws_smithy_types::DateTime;

pub mod console;
pub mod credentials;
pub mod environment;
pub mod partition;
pub mod sts;

/// AWS temporary credentials structure
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime,
}

/// Everything needed to assume one role, fixed once built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequest {
    pub account_id: String,
    pub role_name: String,
    pub duration_seconds: i32,
    pub session_name: String,
    pub partition: Partition,
}

impl RoleRequest {
    /// Fully-qualified ARN of the role to assume
    pub fn role_arn(&self) -> String {
        format!(
            "arn:{}:iam::{}:role/{}",
            self.partition.as_str(),
            self.account_id,
            self.role_name
        )
    }
}

// Re-export commonly used types (functions should be accessed via module path)
pub use console::Federation;
pub use environment::Environment;
pub use partition::Partition;
