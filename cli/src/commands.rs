pub mod entries;
pub mod listing;
pub mod report;

use clap::Subcommand;
use core::time::Duration as StdDuration;
use indicatif::ProgressBar;
use inquire::Password;
use time::{macros::format_description, Duration, OffsetDateTime, UtcOffset};
use toggl_api::{Client, Resources};

use crate::persistence::Settings;

const FORMAT_R: &[time::format_description::FormatItem] = format_description!("[hour]:[minute]");

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configure this client
    Configure {
        #[command(subcommand)]
        command: ConfigureCommands,
    },

    /// Check that the configured token is accepted
    Ping,

    /// List workspaces
    #[clap(alias = "ws")]
    Workspaces,

    /// List clients
    Clients,

    /// Print a weekly, detailed or summary report
    Report(report::Command),

    /// Start a time entry
    Start(entries::Command),
}

#[derive(Debug, Subcommand)]
pub enum ConfigureCommands {
    /// Store the API token (prompts when omitted)
    Token { value: Option<String> },
    /// Default workspace for reports
    Workspace { id: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    ApiError(toggl_api::Error),
    Config(confy::ConfyError),
    Prompt(inquire::InquireError),
    MissingToken,
    MissingWorkspace,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiError(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "Could not access configuration: {e}"),
            Self::Prompt(e) => write!(f, "{e}"),
            Self::MissingToken => write!(
                f,
                "No API token, run `toggl configure token` or set {}",
                crate::persistence::TOKEN_ENV
            ),
            Self::MissingWorkspace => write!(f, "No workspace, pass --workspace or run `toggl configure workspace`"),
        }
    }
}

impl std::error::Error for Error {}

impl From<toggl_api::Error> for Error {
    fn from(value: toggl_api::Error) -> Self {
        Error::ApiError(value)
    }
}

impl From<confy::ConfyError> for Error {
    fn from(value: confy::ConfyError) -> Self {
        Error::Config(value)
    }
}

impl From<inquire::InquireError> for Error {
    fn from(value: inquire::InquireError) -> Self {
        Error::Prompt(value)
    }
}

pub fn execute(command: &Commands) -> Result<()> {
    let mut cfg = Settings::load()?;

    if let Commands::Configure { command } = command {
        match command {
            ConfigureCommands::Token { value } => {
                let token = match value {
                    Some(value) => value.to_owned(),
                    None => Password::new("API token").without_confirmation().prompt()?,
                };
                cfg.api_token = Some(token);
            }
            ConfigureCommands::Workspace { id } => cfg.workspace_id = Some(*id),
        }
        return cfg.store();
    }

    let resources = Resources::toggl();
    let client = Client::new(cfg.api_key()?, &resources);
    match command {
        Commands::Ping => wrap_in_spinner(|| listing::ping(&client), |s| s),
        Commands::Workspaces => wrap_in_spinner(|| listing::workspaces(&client), |s| s),
        Commands::Clients => wrap_in_spinner(|| listing::clients(&client), |s| s),
        Commands::Report(cmd) => {
            let workspace_id = cfg.workspace_id(cmd.workspace)?;
            wrap_in_spinner(|| report::run(&client, workspace_id, cmd), |s| s)
        }
        Commands::Start(cmd) => wrap_in_spinner(|| entries::start(&client, cmd), |s| s),
        Commands::Configure { .. } => unreachable!("handled above"),
    }
}

fn wrap_in_spinner<T, F, O>(f: F, ok: O) -> Result<()>
where
    F: FnOnce() -> Result<T>,
    O: FnOnce(T) -> String,
{
    if super::is_interactive() {
        let s = start_spinner();
        match f() {
            Ok(t) => {
                s.finish_with_message(ok(t));
                Ok(())
            }
            Err(e) => {
                s.finish_and_clear();
                Err(e)
            }
        }
    } else {
        println!("{}", ok(f()?));
        Ok(())
    }
}

fn start_spinner() -> ProgressBar {
    let s = ProgressBar::new_spinner();
    s.set_message("Connecting with toggl...");
    s.enable_steady_tick(StdDuration::new(0, 100_000_000));
    s
}

fn format_duration(duration: Duration) -> String {
    let minutes = duration.whole_minutes();
    format!("{:1}:{:02}", minutes / 60, minutes % 60)
}

fn local_time_format(datetime: OffsetDateTime) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    datetime.to_offset(offset).time().format(&FORMAT_R).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use time::Duration;

    #[test]
    fn it_formats_durations_as_hours_and_minutes() {
        assert_eq!(super::format_duration(Duration::minutes(75)), "1:15");
        assert_eq!(super::format_duration(Duration::milliseconds(36004000)), "10:00");
        assert_eq!(super::format_duration(Duration::ZERO), "0:00");
    }
}
