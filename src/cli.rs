use anyhow::Result;
use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::{
    aws::Environment,
    commands::{AssumeCommand, CompletionsCommand},
    error::RangeError,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "awsrole",
    version,
    about = "Generate temporary credentials and a console login URL for an AWS role",
    long_about = None
)]
pub struct Cli {
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        exclusive = true,
        help = "Print a shell completion script and exit"
    )]
    pub completions: Option<Shell>,

    #[command(flatten)]
    pub assume: AssumeCommand,
}

impl Cli {
    pub async fn execute(self, env: Environment) -> Result<()> {
        match self.completions {
            Some(shell) => {
                CompletionsCommand { shell }.execute();
                Ok(())
            }
            None => self.assume.execute(env).await,
        }
    }
}

/// Value parser accepting integers within `[min, max]` inclusive
pub fn int_range(
    min: i64,
    max: i64,
) -> impl Fn(&str) -> Result<i64, RangeError> + Clone + Send + Sync + 'static {
    move |value: &str| {
        let parsed: i64 = value.parse()?;
        if parsed < min || parsed > max {
            return Err(RangeError::OutOfRange {
                value: parsed,
                min,
                max,
            });
        }
        Ok(parsed)
    }
}
