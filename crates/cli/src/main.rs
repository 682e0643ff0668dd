use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use consumer_model::{Consumer, DEFAULT_DATETIME_FORMAT};
use obp_client::{ApiClient, ClientConfig};
use pipeline::{ActiveFilters, QueryParams};
use serde::Serialize;
use tracing::debug;
use views::{ConsumerViews, DetailPage, IndexPage, Level, Notification, ToggleOutcome, ViewsConfig};

/// consumer-admin - manage API consumers
#[derive(Parser)]
#[command(name = "consumer-admin")]
#[command(about = "List, inspect, enable and disable API consumers", long_about = None)]
struct Cli {
    /// Management API root, including the version
    #[arg(long, env = "OBP_API_ROOT", default_value = "http://127.0.0.1:8080/obp/v3.0.0")]
    api_root: String,

    /// DirectLogin token
    #[arg(long, env = "OBP_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// chrono format of consumer creation dates
    #[arg(long, env = "API_DATETIMEFORMAT", default_value = DEFAULT_DATETIME_FORMAT)]
    datetime_format: String,

    /// Request timeout in seconds
    #[arg(long, env = "OBP_API_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Print the page as JSON instead of a listing
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List consumers, newest first
    List {
        /// Only consumers of this application type
        #[arg(long)]
        app_type: Option<String>,

        /// Only enabled (true) or disabled (false) consumers
        #[arg(long, value_parser = ["true", "false"])]
        enabled: Option<String>,

        /// Only consumers created within this period
        #[arg(long, value_parser = ["minute", "hour", "day", "week", "month", "year"])]
        time: Option<String>,

        /// Raw query string, e.g. "app_type=Web&time=week"
        #[arg(long)]
        query: Option<String>,
    },

    /// Show a single consumer
    Show {
        consumer_id: String,
    },

    /// Enable a consumer
    Enable {
        consumer_id: String,

        /// Where the listing should return to
        #[arg(long)]
        next: Option<String>,

        /// Query string to carry over to the listing
        #[arg(long)]
        query: Option<String>,
    },

    /// Disable a consumer
    Disable {
        consumer_id: String,

        #[arg(long)]
        next: Option<String>,

        #[arg(long)]
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = ApiClient::new(ClientConfig {
        api_root: cli.api_root.clone(),
        token: cli.token.clone(),
        timeout_secs: cli.timeout_secs,
    })
    .context("Failed to build management API client")?;

    let views = ConsumerViews::new(
        Arc::new(client),
        ViewsConfig {
            datetime_format: cli.datetime_format.clone(),
            ..ViewsConfig::default()
        },
    );

    let ok = match cli.command {
        Commands::List {
            app_type,
            enabled,
            time,
            query,
        } => {
            let params = list_params(query.as_deref(), app_type, enabled, time);
            handle_list(&views, &params, cli.json).await?
        }
        Commands::Show { consumer_id } => handle_show(&views, &consumer_id, cli.json).await?,
        Commands::Enable {
            consumer_id,
            next,
            query,
        } => {
            let params = QueryParams::parse(query.as_deref().unwrap_or_default());
            let outcome = views.enable(&consumer_id, next.as_deref(), &params).await;
            handle_toggle(&outcome, cli.json)?
        }
        Commands::Disable {
            consumer_id,
            next,
            query,
        } => {
            let params = QueryParams::parse(query.as_deref().unwrap_or_default());
            let outcome = views.disable(&consumer_id, next.as_deref(), &params).await;
            handle_toggle(&outcome, cli.json)?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Build the listing parameters. Explicit flags win over the raw query.
fn list_params(
    query: Option<&str>,
    app_type: Option<String>,
    enabled: Option<String>,
    time: Option<String>,
) -> QueryParams {
    let mut params = QueryParams::parse(query.unwrap_or_default());
    for (key, value) in [("app_type", app_type), ("enabled", enabled), ("time", time)] {
        if let Some(value) = value {
            params.append(key, value);
        }
    }
    debug!("Listing with params: {}", params);
    params
}

/// Handle the 'list' command
async fn handle_list(views: &ConsumerViews, params: &QueryParams, json: bool) -> Result<bool> {
    let page = views.index(params).await;
    if json {
        print_json(&page)?;
    } else {
        print_notifications(&page.notifications);
        print_index(&page);
    }
    Ok(!has_errors(&page.notifications))
}

/// Handle the 'show' command
async fn handle_show(views: &ConsumerViews, consumer_id: &str, json: bool) -> Result<bool> {
    let page: DetailPage = views.detail(consumer_id).await;
    if json {
        print_json(&page)?;
    } else {
        print_notifications(&page.notifications);
        if let Some(consumer) = &page.consumer {
            print_consumer(consumer);
        }
    }
    Ok(!has_errors(&page.notifications))
}

/// Handle the 'enable' and 'disable' commands
fn handle_toggle(outcome: &ToggleOutcome, json: bool) -> Result<bool> {
    if json {
        print_json(outcome)?;
    } else {
        print_notifications(std::slice::from_ref(&outcome.notification));
        println!("{} {}", "Next:".bold(), outcome.redirect_url);
    }
    Ok(!outcome.notification.is_error())
}

fn has_errors(notifications: &[Notification]) -> bool {
    notifications.iter().any(Notification::is_error)
}

fn print_json<T: Serialize>(page: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(page).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        match notification.level {
            Level::Success => println!("{} {}", "✓".green(), notification.message),
            Level::Error => eprintln!("{} {}", "✗".red(), notification.message.red()),
        }
    }
}

fn print_index(page: &IndexPage) {
    let stats = &page.statistics;
    println!(
        "{}",
        format!(
            "{} consumers, {} developers, {} app names",
            stats.consumers_num, stats.unique_developer_email_num, stats.unique_name_num
        )
        .bold()
        .blue()
    );
    print_active_filters(&page.active_filters);

    for (rank, consumer) in page.consumers.iter().enumerate() {
        let state = if consumer.enabled {
            "enabled".green()
        } else {
            "disabled".red()
        };
        println!(
            "{}. {} [{}] {} {} <{}> ({})",
            (rank + 1).to_string().green(),
            consumer.app_name.bold(),
            consumer.app_type,
            state,
            consumer.created,
            consumer.developer_email,
            consumer.consumer_id
        );
    }
}

fn print_active_filters(active: &ActiveFilters) {
    let applied: Vec<String> = active
        .iter()
        .filter_map(|f| f.value.as_ref().map(|v| format!("{}={}", f.key, v)))
        .collect();
    if !applied.is_empty() {
        println!("{}Filters: {}", "• ".cyan(), applied.join(", "));
    }
}

fn print_consumer(consumer: &Consumer) {
    println!("{}", format!("Consumer {}", consumer.consumer_id).bold().blue());
    let state = if consumer.enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };
    println!("{}App name: {}", "• ".green(), consumer.app_name);
    println!("{}App type: {}", "• ".green(), consumer.app_type);
    println!("{}State: {}", "• ".green(), state);
    println!("{}Description: {}", "• ".green(), consumer.description);
    println!("{}Developer email: {}", "• ".green(), consumer.developer_email);
    println!("{}Redirect URL: {}", "• ".green(), consumer.redirect_url);
    println!("{}Created by: {}", "• ".green(), consumer.created_by_user_id);
    println!("{}Created: {}", "• ".green(), consumer.created);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_params_flags_override_query() {
        let params = list_params(
            Some("app_type=Mobile&time=week"),
            Some("Web".to_string()),
            None,
            None,
        );
        assert_eq!(params.get("app_type"), Some("Web"));
        assert_eq!(params.get("time"), Some("week"));
        assert_eq!(params.get("enabled"), None);
    }

    #[test]
    fn test_list_params_without_query() {
        let params = list_params(None, None, Some("false".to_string()), None);
        assert_eq!(params.encode(), "enabled=false");
    }
}
