use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use log::{info, warn};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use proc_schedule::config::SimulationConfig;
use proc_schedule::loader::load_processes_file;
use proc_schedule::scheduler::{run_policies, Policy};
use proc_schedule::{logging, report, SimError, SimResult};

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    config: SimulationConfig,
    json: bool,
    verbosity: u8,
}

fn command() -> Command {
    Command::new("proc-schedule")
        .version(crate_version!())
        .about("Simulates CPU scheduling policies over a CSV process list")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("CSV file with rows: id, burst, arrival[, priority]"),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .action(ArgAction::Append)
                .help("Policy to run: fcfs, srtf or priority (repeatable, default: all)"),
        )
        .arg(
            Arg::new("fcfs-accounting")
                .long("fcfs-accounting")
                .value_name("MODE")
                .help("FCFS waiting-time model: carry-over (default) or clocked"),
        )
        .arg(
            Arg::new("priority-clock")
                .long("priority-clock")
                .value_name("ORIGIN")
                .help("Priority clock origin: first-listed (default) or earliest-arrival"),
        )
        .arg(
            Arg::new("priority-ties")
                .long("priority-ties")
                .value_name("ORDER")
                .help("Equal-priority ordering: arrival (default) or id"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Run each policy on its own thread"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print outcomes as JSON instead of tables"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log to stderr (-v info, -vv debug, -vvv trace)"),
        )
}

/// Parses an optional option value with `FromStr`.
fn parse_option<T>(matches: &ArgMatches, name: &str) -> SimResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(name)
        .map(|raw| raw.parse::<T>())
        .transpose()
        .map_err(|e| SimError::invalid_arguments(e.to_string()))
}

fn parse_args<I, T>(args: I) -> SimResult<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if !e.use_stderr() => e.exit(), // --help / --version
        Err(e) => return Err(SimError::invalid_arguments(e.to_string().trim_end())),
    };

    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let [input] = <[PathBuf; 1]>::try_from(inputs)
        .map_err(|_| SimError::invalid_arguments("must give a scheduling file to process"))?;

    let mut config = SimulationConfig::new().with_parallel(matches.get_flag("parallel"));
    if let Some(names) = matches.get_many::<String>("policy") {
        let policies = names
            .map(|n| n.parse::<Policy>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SimError::invalid_arguments(e.to_string()))?;
        config = config.with_policies(policies);
    }
    if let Some(accounting) = parse_option(&matches, "fcfs-accounting")? {
        config = config.with_fcfs_accounting(accounting);
    }
    if let Some(clock) = parse_option(&matches, "priority-clock")? {
        config = config.with_priority_clock(clock);
    }
    if let Some(ties) = parse_option(&matches, "priority-ties")? {
        config = config.with_priority_ties(ties);
    }

    Ok(CliArgs {
        input,
        config,
        json: matches.get_flag("json"),
        verbosity: matches.get_count("verbose"),
    })
}

fn run() -> SimResult<()> {
    let args = parse_args(std::env::args_os())?;

    if let Err(e) = logging::init(logging::level_for_verbosity(args.verbosity)) {
        eprintln!("logger unavailable: {e}");
    }
    info!("configuration: {:?}", args.config);

    let processes = load_processes_file(&args.input)?;
    if processes.is_empty() {
        warn!("{} contains no processes", args.input.display());
    }

    let outcomes = run_policies(&processes, &args.config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &outcomes).map_err(|e| SimError::output(e.into()))?;
        writeln!(out).map_err(SimError::output)?;
    } else {
        report::write_reports(&mut out, &outcomes).map_err(SimError::output)?;
    }
    out.flush().map_err(SimError::output)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
