use std::{collections::HashMap, env};

use aws_credential_types::Credentials as BaseCredentials;
use tracing::debug;

use crate::constants::{ENV_ACCESS_KEY_ID, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN};

/// Owned snapshot of the process environment.
///
/// Environment-variable credentials reach the SDK only through this snapshot,
/// so stripping a stale session never mutates global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the current process environment, skipping non-UTF-8 entries
    pub fn capture() -> Self {
        env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Drop a temporary session left over from a previous role assumption.
    ///
    /// When a session token is present, the paired access key and secret key
    /// belong to that session too and are removed with it. Long-lived keys
    /// without a token are kept.
    pub fn without_temporary_session(mut self) -> Self {
        if self.contains(ENV_SESSION_TOKEN) {
            debug!("Ignoring temporary session credentials found in the environment");
            for key in [ENV_ACCESS_KEY_ID, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN] {
                self.vars.remove(key);
            }
        }
        self
    }

    /// Key pair (and token, if any) held by the snapshot
    pub fn static_credentials(&self) -> Option<BaseCredentials> {
        let access_key_id = self.get(ENV_ACCESS_KEY_ID).filter(|v| !v.is_empty())?;
        let secret_access_key = self.get(ENV_SECRET_ACCESS_KEY).filter(|v| !v.is_empty())?;
        let session_token = self.get(ENV_SESSION_TOKEN).map(str::to_string);

        Some(BaseCredentials::new(
            access_key_id,
            secret_access_key,
            session_token,
            None,
            "Environment",
        ))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
