mod cli;
mod render;

use std::future::Future;
use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sankhya_core::{
    BirthDate, LushoGrid, analyze_date, career_paths, compatibility, health_focus, identify_yogas,
    lucky_dates, mahadasha_sequence, planet_for, reduce,
};
use sankhya_server::{ReadingClient, ServiceConfig, reading_prompt};

use crate::cli::{Cli, Command, DateArgs};

fn main() {
    let cli = Cli::parse();
    sankhya_server::logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn birth_date(args: &DateArgs) -> Result<BirthDate> {
    BirthDate::new(args.day, args.month, args.year).context("invalid birth date")
}

fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    ServiceConfig::load(path).context("failed to load configuration")
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze { date, json } => {
            let record = analyze_date(birth_date(&date)?);
            if json {
                let text = serde_json::to_string_pretty(&record)
                    .context("failed to serialize analysis")?;
                println!("{text}");
            } else {
                print!("{}", render::analysis(&record));
            }
        }

        Command::Reduce { n, master } => {
            let r = reduce(n, master);
            println!("{n} -> {r} ({})", planet_for(r));
        }

        Command::Grid { date } => {
            let d = birth_date(&date)?;
            let grid = LushoGrid::from_date(d.day(), d.month(), d.year());
            print!("{}", render::grid(&grid));
            println!("Present: {}", render::join(&grid.present_numbers));
            println!("Missing: {}", render::join(&grid.missing_numbers));
        }

        Command::Yogas { date } => {
            let d = birth_date(&date)?;
            let grid = LushoGrid::from_date(d.day(), d.month(), d.year());
            print!("{}", render::yogas(&identify_yogas(&grid.present_numbers)));
        }

        Command::Mahadasha { destiny } => {
            print!("{}", render::mahadasha(&mahadasha_sequence(destiny)));
        }

        Command::Compat { date, partner_day } => {
            if !(1..=31).contains(&partner_day) {
                bail!("invalid partner day: {partner_day} (expected 1..=31)");
            }
            let record = analyze_date(birth_date(&date)?);
            let c = compatibility(&record.friendly_unfriendly, partner_day);
            println!("{}", render::compatibility(&c));
        }

        Command::LuckyDates {
            date,
            for_year,
            for_month,
        } => {
            if !(1..=12).contains(&for_month) {
                bail!("invalid month: {for_month} (expected 1..=12)");
            }
            let record = analyze_date(birth_date(&date)?);
            let days = lucky_dates(&record.friendly_unfriendly, for_year, for_month);
            println!(
                "Lucky dates in {for_year}-{for_month:02}: {}",
                render::join(&days)
            );
        }

        Command::Guidance { date } => {
            let record = analyze_date(birth_date(&date)?);
            let careers = career_paths(
                record.psychic_number.number,
                record.destiny_number.number,
            );
            println!("Career paths:");
            for c in &careers {
                println!("  {c}");
            }
            println!("Health focus:");
            let health = health_focus(&record.lusho_grid.missing_numbers);
            if health.is_empty() {
                println!("  none");
            }
            for h in &health {
                println!("  {h}");
            }
        }

        Command::Prompt { date } => {
            let record = analyze_date(birth_date(&date)?);
            println!("{}", reading_prompt(&record));
        }

        Command::Reading { date, config } => {
            let record = analyze_date(birth_date(&date)?);
            let config = load_config(config.as_deref())?;
            let client =
                ReadingClient::new(config.reading).context("failed to build reading client")?;
            let text = block_on(client.generate(&record))?.context("reading request failed")?;
            println!("{text}");
        }

        Command::Serve { config, bind } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(addr) = bind {
                config.bind = addr;
            }
            tracing::info!(bind = %config.bind, "starting service");
            block_on(sankhya_server::serve(config))?.context("server failed")?;
        }
    }
    Ok(())
}
