//! Login / logout commands.

use anyhow::Result;
use clap::Args;

use campus_client::App;

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// University e-mail address
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        app.session()
            .login(app.api(), &self.email, &self.password)
            .await?;

        output::success(format, &format!("Logged in as {}", self.email));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        if !app.session().is_logged_in() {
            output::success(format, "Already logged out");
            return Ok(());
        }

        app.session().logout(app.api()).await?;
        output::success(format, "Logged out");
        Ok(())
    }
}
