use anyhow::{Context, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::Select;
use tracing::debug;
use uvdata_core::{
    Config, UvRequest,
    city::{self, CITIES},
    model::DateInput,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "uvdata", version, about = "ARPANSA UV index CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the default city interactively.
    Configure,

    /// List supported cities and their coordinates.
    Cities,

    /// Show a day of UV readings for a city.
    Show {
        /// City name, e.g. "sydney" or "alice springs". Falls back to the configured default.
        city: Option<String>,

        /// Date as YYYY-MM-DD; if absent, today in local time.
        #[arg(long)]
        date: Option<String>,

        /// Full request as JSON, e.g. '{"location":"Sydney","date":"2024-12-01"}'.
        #[arg(long, conflicts_with_all = ["city", "date"])]
        request: Option<String>,

        /// Print the series as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Cities => {
                print!("{}", output::render_cities(CITIES));
                Ok(())
            }
            Command::Show { city, date, request, json } => {
                let config = Config::load()?;

                let request = match request {
                    Some(raw) => {
                        let value: serde_json::Value =
                            serde_json::from_str(&raw).context("Failed to parse --request JSON")?;
                        UvRequest::try_from(value)?
                    }
                    None => {
                        let location = city
                            .or_else(|| config.default_location.clone())
                            .ok_or_else(|| {
                                anyhow!(
                                    "No city given and no default configured.\n\
                                     Hint: pass a city (e.g. `uvdata show sydney`) or run `uvdata configure`."
                                )
                            })?;
                        let date = match date {
                            Some(text) => DateInput::Text(text),
                            None => DateInput::from(Local::now()),
                        };
                        UvRequest::new(location, date)
                    }
                };

                debug!(?request, api_url = config.api_url(), "fetching");
                let samples = config.client().fetch(&request).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&samples)?);
                } else {
                    print!("{}", output::render_samples(&samples));
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let names: Vec<&str> = city::names().collect();
    let start = config
        .default_location()
        .and_then(|current| names.iter().position(|name| *name == current))
        .unwrap_or(0);

    let choice = Select::new("Default city:", names)
        .with_starting_cursor(start)
        .prompt()
        .context("City selection was cancelled")?;

    config.set_default_location(choice)?;
    config.save()?;

    println!("Default city set to {choice} ({})", Config::config_file_path()?.display());
    Ok(())
}
