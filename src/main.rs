use anyhow::Result;
use clap::Parser;
use hermes::commands::{config::Options, msg};
use hermes::logging::DEFAULT_LOG_FILE;
use std::path::PathBuf;
use std::time::Duration;

/// Default channel when none is given.
const DEFAULT_CHANNEL: &str = "egg-logs";

/// hermes - post a message to a Slack channel
///
/// The bot token is read from the `slack_token` file next to the executable,
/// or from HERMES_SLACK_TOKEN when set. Failed deliveries are retried 5 times.
///
/// Examples:
///   hermes msg "backup finished"               # Post to #egg-logs
///   hermes -v msg "disk almost full" egg-alerts
#[derive(Parser, Debug)]
#[command(author, version = env!("HERMES_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Echo every log entry to standard output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// File holding the Slack bot token (defaults to slack_token next to the executable)
    #[arg(long, env = "HERMES_TOKEN_FILE", value_name = "PATH", global = true)]
    token_file: Option<PathBuf>,

    /// Slack Web API URL (defaults to https://slack.com/api)
    #[arg(long = "api-url", env = "HERMES_API_URL", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Log file, rotated at 10 MB with 5 backups
    #[arg(
        long,
        env = "HERMES_LOG_FILE",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        global = true
    )]
    log_file: PathBuf,

    /// Seconds to wait between delivery attempts
    #[arg(
        long,
        env = "HERMES_RETRY_DELAY",
        value_name = "SECS",
        default_value_t = 30,
        global = true
    )]
    retry_delay: u64,

    /// Accept tokens without the xoxb- prefix
    #[arg(long, global = true)]
    no_prefix_check: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Send a message to a channel
    Msg(MsgArgs),
}

#[derive(clap::Args, Debug)]
pub struct MsgArgs {
    /// Message to send
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Channel to send to, with or without the leading '#'
    #[arg(value_name = "CHANNEL", env = "HERMES_CHANNEL", default_value = DEFAULT_CHANNEL)]
    pub channel: String,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            token_file: self.token_file.clone(),
            api_url: self.api_url.clone(),
            retry_delay: Duration::from_secs(self.retry_delay),
            check_prefix: !self.no_prefix_check,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    hermes::logging::init(&cli.log_file, cli.verbose)?;
    let runtime = hermes::runtime::RealRuntime;
    let options = cli.options();

    match cli.command {
        Commands::Msg(args) => msg(runtime, &options, &args.message, &args.channel).await?,
    }
    Ok(())
}
