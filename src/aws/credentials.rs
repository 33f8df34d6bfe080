use aws_smithy_types::date_time::Format;

use super::Credentials;
use crate::constants::{ENV_ACCESS_KEY_ID, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN};

impl Credentials {
    /// Shell snippet exporting the credentials as the standard AWS variables
    pub fn shell_exports(&self) -> String {
        format!(
            "# Export following vars in your shell for API/CLI access:\n\
             export {ENV_ACCESS_KEY_ID}={}\n\
             export {ENV_SECRET_ACCESS_KEY}={}\n\
             export {ENV_SESSION_TOKEN}={}\n\
             # Credentials expire at: {}\n",
            self.access_key_id,
            self.secret_access_key,
            self.session_token,
            self.expiration_display(),
        )
    }

    fn expiration_display(&self) -> String {
        self.expiration
            .fmt(Format::DateTime)
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
