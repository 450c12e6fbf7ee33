//! Campus CLI - command-line front end for the Campus client engine.
//!
//! Provides commands for:
//! - Logging in and out
//! - Listing, watching, and marking notifications
//! - Following users, hashtags, and universities
//! - Registering a device push token

use anyhow::Result;
use clap::{Parser, Subcommand};

use campus_client::{App, ClientConfig};

mod commands;
mod output;

use commands::auth::{LoginCommand, LogoutCommand};
use commands::follow::{FollowCommand, StatusCommand, UnfollowCommand};
use commands::notifications::NotificationsCommand;
use commands::push::PushCommand;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "campus", version, about = "University social network client")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in with university credentials
    Login(LoginCommand),
    /// Log out and clear the stored session
    Logout(LogoutCommand),
    /// Notification inbox
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Follow a user, #hashtag, or university
    Follow(FollowCommand),
    /// Unfollow a user, #hashtag, or university
    Unfollow(UnfollowCommand),
    /// Show follow status for one or more targets
    Status(StatusCommand),
    /// Push notification utilities
    #[command(subcommand)]
    Push(PushCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    campus_client::init_tracing();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let app = App::new(ClientConfig::from_env())?;

    match cli.command {
        Commands::Login(cmd) => cmd.execute(&app, format).await,
        Commands::Logout(cmd) => cmd.execute(&app, format).await,
        Commands::Notifications(cmd) => cmd.execute(&app, format).await,
        Commands::Follow(cmd) => cmd.execute(&app, format).await,
        Commands::Unfollow(cmd) => cmd.execute(&app, format).await,
        Commands::Status(cmd) => cmd.execute(&app, format).await,
        Commands::Push(cmd) => cmd.execute(&app, format).await,
    }
}
