mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use sandhi_rs::{Locale, Sandhi, SandhiConfig};

#[derive(Parser)]
#[command(name = "sandhi", about = "Numerology, ritual calendar and lunisolar day CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Display language (en, ru, he); overrides the config file
    #[arg(long, global = true)]
    locale: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Personal numerology values for a date
    Numerology {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Target date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Kin, 13-moon date and year bearer
    Tzolkin {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Tithi, nakshatra, yoga, vara and karana
    Panchanga {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Rahu Kala and other day divisions from sunrise and sunset
    Muhurta {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local sunrise (HH:MM)
        #[arg(long)]
        sunrise: String,
        /// Local sunset (HH:MM)
        #[arg(long)]
        sunset: String,
        /// Also report the hora at this local time (HH:MM)
        #[arg(long)]
        at: Option<String>,
    },
    /// Scored forecast starting at a date
    Forecast {
        /// First date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Birth date (YYYY-MM-DD) for the numerology rules
        #[arg(long)]
        birth: Option<String>,
        /// Number of days, default from config (30)
        #[arg(long)]
        days: Option<u32>,
    },
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

fn load_sandhi(cli: &Cli) -> Result<Sandhi> {
    let config = match &cli.config {
        Some(path) => SandhiConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SandhiConfig::default(),
    };
    let sandhi = Sandhi::new(&config)?;
    Ok(match &cli.locale {
        Some(tag) => sandhi.with_locale_tag(tag)?,
        None => sandhi,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let sandhi = load_sandhi(&cli)?;
    let locale: Locale = sandhi.locale();
    log::debug!("locale {locale}");

    match cli.command {
        Commands::Numerology { birth, date } => {
            let date = date.unwrap_or_else(today);
            let profile = sandhi.numerology(&birth, &date)?;
            if cli.json {
                print_json(&profile)?;
            } else {
                render::numerology(&date, &profile, locale);
            }
        }

        Commands::Tzolkin { date } => {
            let day = sandhi.position(&date.unwrap_or_else(today))?;
            if cli.json {
                print_json(&day)?;
            } else {
                render::ritual(&day, locale);
            }
        }

        Commands::Panchanga { date } => {
            let day = sandhi.panchanga(&date.unwrap_or_else(today))?;
            if cli.json {
                print_json(&day)?;
            } else {
                render::lunisolar(&day, locale);
            }
        }

        Commands::Muhurta {
            date,
            sunrise,
            sunset,
            at,
        } => {
            let m = sandhi.muhurta(&date, &sunrise, &sunset)?;
            let hora = at
                .map(|at| sandhi.hora(&date, &sunrise, &sunset, &at))
                .transpose()?;
            if cli.json {
                print_json(&serde_json::json!({ "muhurta": m, "hora": hora }))?;
            } else {
                render::muhurta(&m, hora.as_ref(), locale);
            }
        }

        Commands::Forecast { date, birth, days } => {
            let start = date.unwrap_or_else(today);
            let records = match days {
                Some(n) => sandhi.forecast(&start, birth.as_deref(), n)?,
                None => sandhi.monthly_forecast(&start, birth.as_deref())?,
            };
            if cli.json {
                print_json(&records)?;
            } else {
                render::forecast(&records, locale);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}
