use clap::{Parser, Subcommand};
use ld_psychro::{AirState, moist_air_density};
use ld_sim::{
    CfmSelection, HourOptions, HourReport, SelectorConfig, auto_select_cfm, lpm_from_cfm, run_hour,
};
use ld_solution::{Salt, SolutionComposition};
use ld_transfer::ContactorGeometry;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "ld-cli")]
#[command(about = "Liquid-desiccant dehumidification simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit machine-readable JSON instead of the text summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate one hour of absorption at a fixed airflow
    Run {
        /// Air dry-bulb temperature in degrees C
        #[arg(long)]
        temp_c: f64,
        /// Relative humidity in percent
        #[arg(long)]
        rh: f64,
        /// Airflow rate in CFM
        #[arg(long)]
        cfm: f64,
        /// Liquid flow in LPM; derived from the airflow at L/G = 1.2 when omitted
        #[arg(long)]
        lpm: Option<f64>,
        /// Initial solution mass in kg
        #[arg(long, default_value_t = 500.0)]
        mass: f64,
        /// Minutes to integrate
        #[arg(long, default_value_t = 60)]
        minutes: u32,
        /// Salt loading as NAME=MASS_FRACTION, repeatable (default CaCl2=0.4 MgCl2=0.04 CaNO32=0.12)
        #[arg(long = "salt", value_parser = parse_salt_spec)]
        salts: Vec<(Salt, f64)>,
    },
    /// Find the smallest airflow meeting an hourly absorption target
    Select {
        /// Air dry-bulb temperature in degrees C
        #[arg(long)]
        temp_c: f64,
        /// Relative humidity in percent
        #[arg(long)]
        rh: f64,
        /// Hourly absorption target in kg
        #[arg(long, default_value_t = 80.0)]
        threshold: f64,
        /// Initial solution mass in kg
        #[arg(long, default_value_t = 500.0)]
        mass: f64,
        /// Minutes to integrate per candidate
        #[arg(long, default_value_t = 60)]
        minutes: u32,
        /// Salt loading as NAME=MASS_FRACTION, repeatable
        #[arg(long = "salt", value_parser = parse_salt_spec)]
        salts: Vec<(Salt, f64)>,
    },
    /// List the supported desiccant salts
    Salts,
}

fn parse_salt_spec(spec: &str) -> Result<(Salt, f64), String> {
    let (name, frac) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=MASS_FRACTION, got '{spec}'"))?;
    let salt: Salt = name.parse().map_err(|e| format!("{e}"))?;
    let frac: f64 = frac
        .parse()
        .map_err(|_| format!("'{frac}' is not a number"))?;
    Ok((salt, frac))
}

fn default_loading() -> Vec<(Salt, f64)> {
    vec![
        (Salt::CaCl2, 0.4),
        (Salt::MgCl2, 0.04),
        (Salt::CaNO32, 0.12),
    ]
}

fn build_charge(mass: f64, salts: &[(Salt, f64)]) -> CliResult<SolutionComposition> {
    let loading = if salts.is_empty() {
        default_loading()
    } else {
        salts.to_vec()
    };
    Ok(SolutionComposition::from_mass_fractions(mass, &loading)?)
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            temp_c,
            rh,
            cfm,
            lpm,
            mass,
            minutes,
            salts,
        } => cmd_run(temp_c, rh, cfm, lpm, mass, minutes, &salts, cli.json),
        Commands::Select {
            temp_c,
            rh,
            threshold,
            mass,
            minutes,
            salts,
        } => cmd_select(temp_c, rh, threshold, mass, minutes, &salts, cli.json),
        Commands::Salts => cmd_salts(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    temp_c: f64,
    rh_percent: f64,
    cfm: f64,
    lpm: Option<f64>,
    mass: f64,
    minutes: u32,
    salts: &[(Salt, f64)],
    json: bool,
) -> CliResult<()> {
    let air = AirState::from_celsius(temp_c, rh_percent / 100.0)?;
    let charge = build_charge(mass, salts)?;

    let lpm = match lpm {
        Some(v) => v,
        None => {
            let rho_air = moist_air_density(air.celsius(), air.relative_humidity_percent());
            lpm_from_cfm(cfm, 1.2, rho_air, 1380.0)?
        }
    };

    let opts = HourOptions {
        duration_minutes: minutes,
        ..Default::default()
    };
    let report = run_hour(
        &air,
        cfm,
        lpm,
        charge,
        &ContactorGeometry::default(),
        &opts,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_hour_summary(cfm, lpm, &report);
    }
    Ok(())
}

fn cmd_select(
    temp_c: f64,
    rh_percent: f64,
    threshold: f64,
    mass: f64,
    minutes: u32,
    salts: &[(Salt, f64)],
    json: bool,
) -> CliResult<()> {
    let air = AirState::from_celsius(temp_c, rh_percent / 100.0)?;
    let charge = build_charge(mass, salts)?;

    let config = SelectorConfig {
        threshold_kg: threshold,
        ..Default::default()
    };
    let opts = HourOptions {
        duration_minutes: minutes,
        ..Default::default()
    };
    let selection = auto_select_cfm(
        &air,
        &charge,
        &ContactorGeometry::default(),
        &opts,
        &config,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        print_selection_summary(threshold, &selection);
    }
    Ok(())
}

fn cmd_salts() -> CliResult<()> {
    println!("Supported salts:");
    for salt in Salt::ALL {
        println!(
            "  {:<8} {} (M = {:.3} kg/kmol)",
            salt.key(),
            salt.display_name(),
            salt.molar_mass()
        );
    }
    Ok(())
}

fn print_hour_summary(cfm: f64, lpm: f64, report: &HourReport) {
    println!("✓ Hour complete: {:.0} CFM, {:.1} LPM", cfm, lpm);
    println!("  Water absorbed: {:.3} kg", report.total_absorbed_kg);
    println!("  Minutes:        {}", report.minutes.len());
    println!(
        "  Final solution: {:.1} kg at {:.1}% salt",
        report.final_composition.total_mass_kg(),
        report.final_composition.total_salt_fraction() * 100.0
    );
}

fn print_selection_summary(threshold: f64, selection: &CfmSelection) {
    if selection.met_threshold {
        println!("✓ Target met: {} CFM", selection.cfm);
    } else {
        println!(
            "✗ Target of {:.1} kg not reachable; best effort at {} CFM",
            threshold, selection.cfm
        );
    }
    println!("  Liquid flow:    {:.1} LPM", selection.lpm);
    println!(
        "  Water absorbed: {:.3} kg/h",
        selection.report.total_absorbed_kg
    );
}
