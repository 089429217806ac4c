use crate::cli::Command;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use packhub::domain::config::AppConfig;
use packhub::kernel::flags::FeatureFlags;
use packhub::kernel::routing::Navigation;
use packhub::modules::packing::{generate_code, generate_code_today};
use std::io::Write;
use tracing::info;

pub(crate) fn run(command: Command, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let flags = FeatureFlags::resolve(&config.flags);

    match command {
        Command::Routes { json } => routes(&packhub::navigation(&flags), json, out),
        Command::Nav => nav(&packhub::navigation(&flags), out),
        Command::Flags => {
            serde_json::to_writer_pretty(&mut *out, &flags)?;
            writeln!(out)?;
            Ok(())
        },
        Command::Check => check(out),
        Command::PalletCode { date, shift, caliber, format_id, company } => {
            pallet_code(date, &shift, &caliber, &format_id, &company, out)
        },
    }
}

fn routes(nav: &Navigation, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, nav)?;
        writeln!(out)?;
        return Ok(());
    }

    for route in nav {
        writeln!(
            out,
            "{:<28} {:<28} {}",
            route.path,
            route.view.component(),
            route.feature_flag().unwrap_or("-")
        )?;
    }
    Ok(())
}

fn nav(nav: &Navigation, out: &mut impl Write) -> Result<()> {
    for section in nav.sections() {
        writeln!(out, "{}", section.name.unwrap_or("(none)"))?;
        for route in section.routes {
            let trail: Vec<_> = route.meta.breadcrumbs.iter().map(|c| c.label.as_ref()).collect();
            writeln!(out, "  {:<20} {:<28} {}", route.meta.title, route.path, trail.join(" > "))?;
        }
    }
    Ok(())
}

fn check(out: &mut impl Write) -> Result<()> {
    let registry = packhub::registry();
    registry.validate().context("Route tables are malformed")?;

    let routes: usize = registry.tables().iter().map(|t| t.len()).sum();
    info!(modules = registry.tables().len(), routes, "Route tables validated");
    writeln!(out, "ok: {} modules, {routes} routes", registry.tables().len())?;
    Ok(())
}

fn pallet_code(
    date: Option<NaiveDate>,
    shift: &str,
    caliber: &str,
    format_id: &str,
    company: &str,
    out: &mut impl Write,
) -> Result<()> {
    let code = match date {
        Some(date) => generate_code(date, shift, caliber, format_id, company),
        None => generate_code_today(shift, caliber, format_id, company),
    };
    writeln!(out, "{code}")?;
    Ok(())
}
