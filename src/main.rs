use std::num::NonZeroUsize;
use std::process;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use hashbench::output::{json, terminal};
use hashbench::{suggest_work_factor, Algorithm, Config, RunReport, Sampler, WorkFactor};

#[derive(Parser, Debug)]
#[command(
    name = "hashbench",
    about = "Measure password-hashing cost across work factors",
    version,
    rename_all = "kebab-case"
)]
struct Cli {
    /// Algorithm to benchmark: bcrypt, pbkdf2-sha256 or pbkdf2-sha512
    algorithm: String,

    /// Work-factor values (bcrypt cost rounds or PBKDF2 iteration count)
    #[arg(required_unless_present = "target_ms", conflicts_with = "target_ms")]
    work_factors: Vec<WorkFactor>,

    /// Samples measured per work-factor value
    #[arg(short = 's', long = "samples", default_value = "10")]
    samples: NonZeroUsize,

    /// Suggest the work factor closest to this mean cost instead of
    /// measuring a work-factor list
    #[arg(long = "target-ms", value_name = "MILLIS")]
    target_ms: Option<u64>,

    /// Emit the report as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = Algorithm::resolve(&cli.algorithm)?;
    let config = Config::new().samples(cli.samples.get());

    if let Some(millis) = cli.target_ms {
        let target = Duration::from_millis(millis);
        let work_factor = suggest_work_factor(algorithm, target, config)?;
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "algorithm": algorithm,
                    "target_ms": millis,
                    "work_factor": work_factor,
                })
            );
        } else {
            println!("{}", terminal::format_suggestion(algorithm, target, work_factor));
        }
        return Ok(());
    }

    let sampler = Sampler::new(config);
    let results = sampler.run(&algorithm.work_unit(), &cli.work_factors)?;
    let report = RunReport { algorithm, samples: cli.samples.get(), results };

    if cli.json {
        println!("{}", json::to_json_pretty(&report)?);
    } else {
        print!("{}", terminal::format_report(&report));
    }
    Ok(())
}
