//! Notification inbox commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use campus_client::{App, ClientEvent};
use campus_shared::Notification;

use crate::output::{self, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List the most recent notifications
    List(ListArgs),
    /// Poll in the foreground and print inbox updates until Ctrl-C
    Watch,
    /// Mark the given notification ids read
    MarkRead(MarkReadArgs),
    /// Mark every notification read
    MarkAllRead,
    /// Ask the backend to send a test notification
    Test,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Only show unread notifications
    #[arg(long)]
    pub unread: bool,
}

#[derive(Debug, Args)]
pub struct MarkReadArgs {
    /// Notification ids
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

impl NotificationsCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        match self {
            NotificationsCommand::List(args) => list(app, format, args).await,
            NotificationsCommand::Watch => watch(app, format).await,
            NotificationsCommand::MarkRead(args) => {
                app.inbox().mark_read(&args.ids).await?;
                output::success(format, &format!("Marked {} notification(s) read", args.ids.len()));
                Ok(())
            }
            NotificationsCommand::MarkAllRead => {
                app.inbox().mark_all_read().await?;
                output::success(format, "Marked all notifications read");
                Ok(())
            }
            NotificationsCommand::Test => {
                app.push_registrar().send_test_notification().await?;
                output::success(format, "Test notification requested");
                Ok(())
            }
        }
    }
}

async fn list(app: &App, format: OutputFormat, args: &ListArgs) -> Result<()> {
    let inbox = app.inbox();

    inbox.refresh().await;
    for _ in 1..args.pages {
        inbox.load_more().await;
    }

    let snapshot = inbox.snapshot();
    if let Some(error) = &snapshot.error {
        anyhow::bail!("failed to fetch notifications: {error}");
    }

    if format.is_json() {
        output::json(
            format,
            &serde_json::json!({
                "unread_count": snapshot.unread_count,
                "has_more": snapshot.has_more,
                "items": snapshot.items,
            }),
        );
        return Ok(());
    }

    println!(
        "{} notification(s), {} unread",
        snapshot.items.len(),
        snapshot.unread_count
    );
    for item in snapshot.items.iter().filter(|n| !args.unread || !n.read) {
        print_notification(item);
    }
    if snapshot.has_more {
        output::info(format, "(more available; use --pages)");
    }
    Ok(())
}

async fn watch(app: &App, format: OutputFormat) -> Result<()> {
    let mut events = app.events().subscribe();
    let handle = app
        .start_polling()
        .ok_or_else(|| anyhow::anyhow!("a poller is already running"))?;

    output::info(format, "watching for notifications; Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => {
                match event {
                    Ok(ClientEvent::InboxUpdated { unread_count }) => {
                        if format.is_json() {
                            output::json(format, &serde_json::json!({
                                "event": "inbox_updated",
                                "unread_count": unread_count,
                            }));
                        } else {
                            println!("inbox updated: {unread_count} unread");
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }
    }

    handle.stop();
    Ok(())
}

fn print_notification(n: &Notification) {
    let marker = if n.read { " " } else { "*" };
    let body = if n.body.is_empty() {
        n.kind.as_str()
    } else {
        n.body.as_str()
    };
    println!(
        "{marker} [{}] {} {}",
        n.id,
        n.created_at.format("%Y-%m-%d %H:%M"),
        body
    );
}
