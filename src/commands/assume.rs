use anyhow::{Context, Result};
use aws_sdk_sts::Client as StsClient;
use clap::Args;
use tracing::info;

use crate::{
    aws::{Environment, Federation, Partition, RoleRequest, sts},
    browser,
    cli::int_range,
    constants::{
        DEFAULT_SESSION_DURATION_SECS, DEFAULT_SESSION_NAME, MAX_SESSION_DURATION_SECS,
        MIN_SESSION_DURATION_SECS,
    },
};

#[derive(Debug, Clone, Args)]
pub struct AssumeCommand {
    #[arg(required_unless_present = "completions", help = "Role to assume")]
    pub role: Option<String>,

    #[arg(
        short = 'a',
        long,
        help = "Specify an account ID, instead of auto-discovering it"
    )]
    pub account: Option<String>,

    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_SESSION_DURATION_SECS,
        value_parser = int_range(MIN_SESSION_DURATION_SECS, MAX_SESSION_DURATION_SECS),
        help = "Temp credentials validity in seconds; the role's maximum session duration must allow it (default role maximum is 3600)"
    )]
    pub time: i64,

    #[arg(short = 'p', long, help = "AWS profile holding the base credentials")]
    pub profile: Option<String>,

    #[arg(short = 'r', long, help = "AWS region (defaults to the configured one)")]
    pub region: Option<String>,

    #[arg(
        short = 'n',
        long,
        default_value = DEFAULT_SESSION_NAME,
        help = "Role session name"
    )]
    pub session_name: String,

    #[arg(short = 'o', long, help = "Open the login URL in the default browser")]
    pub open: bool,
}

impl AssumeCommand {
    pub async fn execute(self, env: Environment) -> Result<()> {
        let role_name = self
            .role
            .clone()
            .context("A role name is required")?;

        info!("Assuming role: {}", role_name);

        let env = env.without_temporary_session();
        let config =
            sts::load_config(&env, self.profile.as_deref(), self.region.as_deref()).await;
        sts::resolve_base_credentials(&config).await?;

        let partition = config
            .region()
            .map(|r| Partition::from_region(r.as_ref()))
            .unwrap_or_default();
        let client = StsClient::new(&config);

        let account_id = match self.explicit_account() {
            Some(account) => account.to_string(),
            None => sts::caller_account_id(&client)
                .await
                .context("Failed to discover the AWS account ID")?,
        };

        let request = self.role_request(role_name, account_id, partition)?;
        let credentials = sts::assume_role(&client, &request).await?;

        println!("{}", credentials.shell_exports());

        let login_url = Federation::for_partition(partition)?
            .login_url_for(&credentials, request.duration_seconds)
            .await
            .context("Failed to generate console login URL")?;

        println!("# Login URL: {login_url}");

        if self.open {
            browser::open(login_url.as_str())?;
        }

        Ok(())
    }

    /// Account given on the command line; an empty value counts as absent
    fn explicit_account(&self) -> Option<&str> {
        self.account.as_deref().filter(|a| !a.is_empty())
    }

    fn role_request(
        &self,
        role_name: String,
        account_id: String,
        partition: Partition,
    ) -> Result<RoleRequest> {
        let duration_seconds =
            i32::try_from(self.time).context("Session duration does not fit in 32 bits")?;

        Ok(RoleRequest {
            account_id,
            role_name,
            duration_seconds,
            session_name: self.session_name.clone(),
            partition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> AssumeCommand {
        Cli::try_parse_from(std::iter::once("awsrole").chain(args.iter().copied()))
            .unwrap()
            .assume
    }

    #[test]
    fn test_role_request_from_explicit_account() {
        let cmd = parse(&["--account", "123456789012", "MyRole"]);
        let account = cmd.explicit_account().unwrap().to_string();
        let request = cmd
            .role_request("MyRole".to_string(), account, Partition::Aws)
            .unwrap();

        assert_eq!(request.role_arn(), "arn:aws:iam::123456789012:role/MyRole");
        assert_eq!(request.duration_seconds, 43200);
        assert_eq!(request.session_name, DEFAULT_SESSION_NAME);
    }

    #[test]
    fn test_role_request_custom_duration_and_session() {
        let cmd = parse(&["-t", "3600", "-n", "deploy", "Deployer"]);
        let request = cmd
            .role_request("Deployer".to_string(), "111122223333".to_string(), Partition::AwsCn)
            .unwrap();

        assert_eq!(request.duration_seconds, 3600);
        assert_eq!(request.session_name, "deploy");
        assert_eq!(request.role_arn(), "arn:aws-cn:iam::111122223333:role/Deployer");
    }

    #[test]
    fn test_empty_account_is_discovered() {
        let cmd = parse(&["--account", "", "MyRole"]);
        assert_eq!(cmd.explicit_account(), None);

        let cmd = parse(&["MyRole"]);
        assert_eq!(cmd.explicit_account(), None);
    }
}
