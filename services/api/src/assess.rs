use crate::infra::load_catalog;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wws_rent_check::config::AppConfig;
use wws_rent_check::error::AppError;
use wws_rent_check::workflows::wws::{
    Assessment, AssessmentPayload, MaxRent, RentCheckService, RentSchedule,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file describing the housing unit
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Reference date for schedule selection (defaults to the file's `as_of`, then today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Schedule file overriding WWS_SCHEDULE_PATH
    #[arg(long)]
    pub(crate) schedule: Option<PathBuf>,
    /// Print the assessment as JSON instead of a readable breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScheduleArgs {
    /// Date to resolve the schedule for (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Schedule file overriding WWS_SCHEDULE_PATH
    #[arg(long)]
    pub(crate) schedule: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        as_of,
        schedule,
        json,
    } = args;

    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.schedule, schedule)?;
    let service = RentCheckService::new(Arc::new(catalog));

    let payload = read_payload(&input)?;
    let as_of = as_of
        .or(payload.as_of)
        .unwrap_or_else(|| Local::now().date_naive());
    let assessment = service.assess(payload.request, as_of)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_assessment(&assessment));
    }

    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let ScheduleArgs { as_of, schedule } = args;

    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.schedule, schedule)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let effective = catalog.effective_on(as_of)?;

    print!("{}", render_schedule(effective, as_of));
    Ok(())
}

pub(crate) fn read_payload(path: &Path) -> Result<AssessmentPayload, AppError> {
    let file = File::open(path)?;
    let payload = serde_json::from_reader(BufReader::new(file))?;
    Ok(payload)
}

pub(crate) fn render_assessment(assessment: &Assessment) -> String {
    let breakdown = &assessment.breakdown;
    let rent = &assessment.rent;
    let mut out = String::new();

    let _ = writeln!(out, "WWS rent check");
    if let Some(address) = &assessment.address {
        let _ = writeln!(out, "Address: {address}");
    }
    let _ = writeln!(
        out,
        "Housing type: {} | schedule {} (effective {}) | as of {}",
        assessment.housing_type.label(),
        assessment.schedule_label,
        assessment.schedule_effective_from,
        assessment.as_of
    );

    let _ = writeln!(out, "Points:");
    let kitchen = &breakdown.kitchen;
    let _ = write!(
        out,
        "  - Kitchen: {:.2} (counter {:.2} + appliances {:.2}",
        kitchen.final_points, kitchen.counter_points, kitchen.appliance_points
    );
    if let Some(sharers) = kitchen.sharer_count.filter(|_| kitchen.shared) {
        let _ = write!(out, ", shared by {sharers}");
    }
    let _ = writeln!(out, ")");

    let sanitary = &breakdown.sanitary;
    let _ = write!(
        out,
        "  - Sanitary: {:.2} (toilet {:.2} + washing {:.2} + heating {:.2} + thermostats {:.2}",
        sanitary.final_points,
        sanitary.toilet_points,
        sanitary.washing_points,
        sanitary.heating_points,
        sanitary.thermostat_bonus
    );
    if let Some(sharers) = sanitary.sharer_count.filter(|_| sanitary.shared) {
        let _ = write!(out, ", shared by {sharers}");
    }
    let _ = writeln!(out, ")");

    let surface = &breakdown.surface;
    let _ = write!(
        out,
        "  - Surface: {:.2} (private {:.2} + shared {:.2}",
        surface.total, surface.private_points, surface.shared_points
    );
    if let (Some(sharers), Some(source)) = (surface.sharer_count, surface.sharer_source) {
        let _ = write!(out, ", {sharers} sharers");
        if source.is_inferred() {
            let _ = write!(out, " (inferred)");
        }
    }
    let _ = writeln!(out, ")");

    let energy_label = breakdown
        .energy
        .label
        .map(|label| label.label())
        .unwrap_or("none");
    let _ = writeln!(
        out,
        "  - Energy: {:.2} (label {energy_label})",
        breakdown.energy.points
    );
    let _ = writeln!(
        out,
        "  - Outdoor: {:.2} (private {:.2} + shared {:.2})",
        breakdown.outdoor.total, breakdown.outdoor.private_points, breakdown.outdoor.shared_points
    );

    let woz = &breakdown.woz;
    if woz.applied {
        let _ = writeln!(
            out,
            "  - WOZ: {:.2} (raw {:.2}, cap {:.2})",
            woz.capped_points, woz.raw_points, woz.cap
        );
    } else {
        let _ = writeln!(out, "  - WOZ: not applicable");
    }
    let _ = writeln!(out, "Total points: {:.2}", breakdown.total_points);

    let _ = writeln!(
        out,
        "Sector: {} | maximum rent {}",
        rent.category.label(),
        rent.max_rent
    );
    match (rent.current_rent, rent.overpayment_amount) {
        (Some(current), Some(excess)) => {
            let _ = writeln!(
                out,
                "Current rent €{current:.2} exceeds the maximum by €{excess:.2}"
            );
        }
        (Some(current), None) => {
            let _ = writeln!(out, "Current rent €{current:.2}");
        }
        (None, _) => {}
    }
    let _ = writeln!(out, "Status: {}", assessment.status.label());

    out
}

pub(crate) fn render_schedule(schedule: &RentSchedule, as_of: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Rent schedule {} (effective {}, resolved for {as_of})",
        schedule.label, schedule.effective_from
    );
    let _ = writeln!(out, "Energy label points:");
    for (label, points) in &schedule.energy_points {
        let _ = writeln!(out, "  - {}: {points:.2}", label.label());
    }
    let _ = writeln!(
        out,
        "WOZ: €{:.2} per point, capped at {:.0}% of the other sections",
        schedule.woz_rate_per_point,
        schedule.woz_cap_ratio * 100.0
    );
    let formula = &schedule.rent_formula;
    let _ = writeln!(
        out,
        "Social rent: €{:.2} + €{:.2} × points, at most {}",
        formula.base_rent,
        formula.points_rate,
        MaxRent::Capped(formula.upper_bound)
    );
    let _ = writeln!(
        out,
        "Liberalized from {:.2} points",
        schedule.liberalization_threshold
    );
    out
}
