mod constants;
mod directory;
mod models;
mod services;
mod utils;
mod webnews;

use clap::Parser;
use tracing::{error, info};

use crate::{
    constants::{
        API_AGENT, DEFAULT_LDAP_URL, DEFAULT_SEARCH_BASE, DEFAULT_WEBNEWS_URL, LOG_DIRECTIVE,
        PRODUCTION_NEWSGROUP, TEST_NEWSGROUP,
    },
    directory::Directory,
    models::Error,
    services::birthday_service::birthday_message,
    webnews::Webnews,
};

#[derive(Parser)]
#[command(about = "Find users with a birthday.")]
struct Args {
    /// Specify a username.
    user: String,
    /// Specify the password for the user.
    password: String,
    /// API key for posting to WebNews
    apikey: String,
    /// Posts to csh.test instead of csh.noise
    #[arg(short, long)]
    test: bool,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let args = Args::parse();

    if args.apikey.is_empty() {
        println!("No API key provided.");
        return;
    }

    let config = load_configuration();

    if let Err(e) = run(&args, &config).await {
        error!("Birthday run failed: {}", e);
        std::process::exit(1);
    }
}

/// Endpoints the bot talks to, overridable from the environment
struct Config {
    ldap_url: String,
    search_base: String,
    webnews_url: String,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load endpoint configuration from environment variables, with defaults
fn load_configuration() -> Config {
    Config {
        ldap_url: std::env::var("LDAP_URL").unwrap_or_else(|_| DEFAULT_LDAP_URL.to_string()),
        search_base: std::env::var("LDAP_SEARCH_BASE")
            .unwrap_or_else(|_| DEFAULT_SEARCH_BASE.to_string()),
        webnews_url: std::env::var("WEBNEWS_URL")
            .unwrap_or_else(|_| DEFAULT_WEBNEWS_URL.to_string()),
    }
}

/// Query the directory for today's birthdays and post the announcement
async fn run(args: &Args, config: &Config) -> Result<(), Error> {
    let mut directory = Directory::bind(
        &config.ldap_url,
        &config.search_base,
        &args.user,
        &args.password,
    )
    .await?;

    let today = chrono::Local::now().date_naive();
    let Some(announcement) = birthday_message(&mut directory, today).await? else {
        println!("No birthdays today.");
        return Ok(());
    };

    let newsgroup = if args.test {
        TEST_NEWSGROUP
    } else {
        PRODUCTION_NEWSGROUP
    };
    let webnews = Webnews::new(&config.webnews_url, &args.apikey, API_AGENT);
    webnews
        .compose(newsgroup, &announcement.subject, &announcement.body)
        .await?;
    info!("Posted birthday announcement to {}", newsgroup);

    println!("{}", announcement.body);

    Ok(())
}
