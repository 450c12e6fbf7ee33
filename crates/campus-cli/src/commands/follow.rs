//! Follow / unfollow / status commands.
//!
//! Targets are written as `#hashtag`, `user:ID`, or `university:ID`
//! (`uni:ID` also works).

use anyhow::{bail, Result};
use clap::Args;

use campus_api::follows::FollowStatusRequest;
use campus_client::App;
use campus_shared::{FollowTarget, HashtagName, UniversityId, UserId};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct FollowCommand {
    /// Target: `#hashtag`, `user:ID`, or `university:ID`
    pub target: String,
}

impl FollowCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let target = parse_target(&self.target)?;
        app.api().follow(&target).await?;
        output::success(format, &format!("Now following {target}"));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct UnfollowCommand {
    /// Target: `#hashtag`, `user:ID`, or `university:ID`
    pub target: String,
}

impl UnfollowCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let target = parse_target(&self.target)?;
        app.api().unfollow(&target).await?;
        output::success(format, &format!("Unfollowed {target}"));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Targets: `#hashtag`, `user:ID`, or `university:ID`
    #[arg(required = true)]
    pub targets: Vec<String>,
}

impl StatusCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let targets = self
            .targets
            .iter()
            .map(|raw| parse_target(raw))
            .collect::<Result<Vec<_>>>()?;

        let mut request = FollowStatusRequest::default();
        for target in &targets {
            match target {
                FollowTarget::User(id) => request.users.push(*id),
                FollowTarget::Hashtag(name) => request.hashtags.push(name.clone()),
                FollowTarget::University(id) => request.universities.push(*id),
            }
        }

        let status = app.api().follow_status(&request).await?;

        if format.is_json() {
            let entries: Vec<_> = targets
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "target": t.to_string(),
                        "following": status.is_following(t),
                    })
                })
                .collect();
            output::json(format, &serde_json::json!({ "statuses": entries }));
            return Ok(());
        }

        for target in &targets {
            let state = if status.is_following(target) {
                "following"
            } else {
                "not following"
            };
            println!("{target}: {state}");
        }
        Ok(())
    }
}

/// Parse a command-line target argument.
fn parse_target(raw: &str) -> Result<FollowTarget> {
    let raw = raw.trim();

    if raw.starts_with('#') {
        let name = HashtagName::new(raw);
        if name.is_empty() {
            bail!("empty hashtag name");
        }
        return Ok(FollowTarget::Hashtag(name));
    }

    if let Some(id) = raw.strip_prefix("user:") {
        return Ok(FollowTarget::User(UserId(id.parse()?)));
    }
    if let Some(id) = raw
        .strip_prefix("university:")
        .or_else(|| raw.strip_prefix("uni:"))
    {
        return Ok(FollowTarget::University(UniversityId(id.parse()?)));
    }

    bail!("unrecognized target {raw:?}; use '#hashtag', 'user:ID', or 'university:ID'")
}
