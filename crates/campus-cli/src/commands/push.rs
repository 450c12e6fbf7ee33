//! Push-token commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use campus_api::push::PushPlatform;
use campus_client::App;

use crate::output::{self, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum PushCommand {
    /// Register a device push token with the backend
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// The device push token
    pub token: String,

    /// Device platform: android, ios, or web
    #[arg(long, default_value = "android")]
    pub platform: String,
}

impl PushCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        match self {
            PushCommand::Register(args) => {
                let platform = parse_platform(&args.platform)?;
                let registered = app
                    .push_registrar()
                    .register_if_needed(&args.token, platform)
                    .await?;

                if registered {
                    output::success(format, "Push token registered");
                } else {
                    output::success(format, "Push token already registered");
                }
                Ok(())
            }
        }
    }
}

fn parse_platform(raw: &str) -> Result<PushPlatform> {
    match raw {
        "android" => Ok(PushPlatform::Android),
        "ios" => Ok(PushPlatform::Ios),
        "web" => Ok(PushPlatform::Web),
        other => bail!("unknown platform {other:?}; use android, ios, or web"),
    }
}
