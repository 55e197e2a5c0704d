// Meal Calendar
// Main entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use meal_calendar::models::calendar_day::Granularity;
use meal_calendar::models::capabilities::Tier;
use meal_calendar::models::date_rule::DateRangeRule;
use meal_calendar::models::session::{Session, UserProfile};
use meal_calendar::models::settings::{Settings, WeekStart};
use meal_calendar::services::calendar::{CalendarDateSelector, Clock, SystemClock};
use meal_calendar::services::session::SessionStore;
use meal_calendar::services::settings::SettingsService;
use meal_calendar::ui_term::{grid::LEGEND, render_period, render_summary};
use meal_calendar::utils::date::parse_iso_date;

/// Pick meal-planning days from the terminal
#[derive(Parser)]
#[command(name = "meal-calendar")]
#[command(about = "Browse and pick meal-planning dates", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RangeArgs {
    /// Earliest selectable date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    min: Option<NaiveDate>,

    /// Latest selectable date
    #[arg(long, value_parser = parse_date)]
    max: Option<NaiveDate>,
}

#[derive(Args)]
struct ViewArgs {
    /// Date whose period is shown (defaults to today)
    #[arg(long, value_parser = parse_date)]
    anchor: Option<NaiveDate>,

    /// Date to highlight
    #[arg(long, value_parser = parse_date)]
    select: Option<NaiveDate>,

    /// Steps forward (positive) or backward (negative) from the anchor
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    shift: i32,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month(ViewArgs),
    /// Show a week strip
    Week(ViewArgs),
    /// Report whether a date can be picked
    Check {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        #[command(flatten)]
        range: RangeArgs,
    },
    /// Store a session for a logged-in user
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Mark the account as Pro
        #[arg(long)]
        pro: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// Inspect or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the active settings
    Show,
    /// Change week-start conventions
    Set {
        #[arg(long)]
        month_week_start: Option<WeekStart>,
        #[arg(long)]
        week_view_start: Option<WeekStart>,
    },
    /// Restore default settings
    Reset,
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    parse_iso_date(input).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Meal Calendar");

    let settings_service = SettingsService::locate(cli.config.as_deref())?;
    let settings = settings_service.get().context("Failed to load settings")?;
    let session_store = SessionStore::resolve(settings.session.path.as_deref())?;

    match cli.command {
        Commands::Month(args) => show_period(&settings, &session_store, Granularity::Month, args),
        Commands::Week(args) => show_period(&settings, &session_store, Granularity::Week, args),
        Commands::Check { date, range } => check_date(&session_store, date, range),
        Commands::Login {
            token,
            id,
            name,
            email,
            pro,
        } => {
            let tier = if pro { Tier::Pro } else { Tier::Free };
            let mut session = Session::default();
            session.login(token, UserProfile::new(id, name, email, tier));
            session_store.save(&session).context("Failed to save session")?;
            println!("Logged in ({} tier)", tier);
            Ok(())
        }
        Commands::Logout => {
            match session_store.logout().context("Failed to clear session")? {
                Some(profile) => println!("Logged out {}", profile.name),
                None => println!("Logged out"),
            }
            Ok(())
        }
        Commands::Whoami => {
            let session = session_store.load().context("Failed to load session")?;
            match (&session.profile, session.is_authenticated()) {
                (Some(profile), true) => println!(
                    "{} <{}> id={} tier={}",
                    profile.name, profile.email, profile.id, profile.tier
                ),
                _ => println!("Not logged in"),
            }
            Ok(())
        }
        Commands::Config(command) => run_config(&settings_service, settings, command),
    }
}

fn build_rule(session: &Session, range: &RangeArgs) -> Result<DateRangeRule> {
    DateRangeRule::for_range(&session.capabilities(), range.min, range.max)
        .context("Invalid --min/--max range")
}

fn show_period(
    settings: &Settings,
    store: &SessionStore,
    granularity: Granularity,
    args: ViewArgs,
) -> Result<()> {
    let session = store.load().context("Failed to load session")?;
    let rule = build_rule(&session, &args.range)?;

    let mut selector = CalendarDateSelector::with_system_clock(rule, settings.calendar.clone());
    selector.set_granularity(granularity);
    selector.open(args.anchor);

    let moved = selector.navigate_by(granularity, args.shift);
    if moved < args.shift.unsigned_abs() {
        log::debug!(
            "Navigation stopped at {} after {} of {} steps",
            selector.anchor(),
            moved,
            args.shift.unsigned_abs()
        );
    }

    if let Some(date) = args.select {
        if !selector.select_date(date) {
            println!("{} is not available and was not selected", date);
        }
    }

    print!("{}", render_period(&selector));
    println!("{}", render_summary(&selector));
    println!("{}", LEGEND);
    Ok(())
}

fn check_date(store: &SessionStore, date: NaiveDate, range: RangeArgs) -> Result<()> {
    let session = store.load().context("Failed to load session")?;
    let rule = build_rule(&session, &range)?;
    let today = SystemClock.today();

    match rule.disabled_reason(date, today) {
        Some(reason) => println!("{}: unavailable ({})", date, reason),
        None => println!("{}: available", date),
    }
    Ok(())
}

fn run_config(service: &SettingsService, mut settings: Settings, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            println!("# {}", service.path().display());
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigCommand::Set {
            month_week_start,
            week_view_start,
        } => {
            if let Some(start) = month_week_start {
                settings.calendar.month_week_start = start;
            }
            if let Some(start) = week_view_start {
                settings.calendar.week_view_start = start;
            }
            service.update(&settings).context("Failed to save settings")?;
            println!("Settings saved to {}", service.path().display());
        }
        ConfigCommand::Reset => {
            service.reset().context("Failed to reset settings")?;
            println!("Settings reset");
        }
    }
    Ok(())
}
