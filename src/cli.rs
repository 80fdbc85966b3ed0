use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when logs should also go to stdout.
///
/// The bot always logs to the console. A one-shot preview keeps stdout for
/// the rendered output unless debug mode asks for logs too.
pub fn logs_to_stdout(args: &Args) -> bool {
    !args.once || args.debug
}

/// SF Servers Discord bot
///
/// Answers the /servers slash command with a live overview of the SF HL2DM
/// servers: player names, teams and stats, packed into a single embed.
///
/// Configuration is read from `.env`, the config file and `SF_BOT_*`
/// environment variables, in that order.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch and render the server list once, print it to the terminal and exit.
    /// No Discord connection is made.
    #[arg(short, long)]
    pub once: bool,

    /// Also print logs to the terminal in --once mode.
    #[arg(short, long, help_heading = "Debug")]
    pub debug: bool,

    /// Path to a config file. Defaults to the platform config directory.
    #[arg(long = "config", value_name = "PATH", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}
