//! Chroma Merge entry point
//!
//! Headless native runner: paces the simulation at the configured step rate
//! and logs the population as it merges down.
//!
//! Usage: `chroma-merge [config.json] [--seed N] [--seconds S]`

use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chroma_merge::render::{colors, extract_instances};
use chroma_merge::{Driver, SimConfig};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    seed: Option<u64>,
    seconds: Option<f32>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                parsed.seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            "--seconds" => {
                let value = args.next().ok_or("--seconds needs a value")?;
                parsed.seconds = Some(
                    value
                        .parse()
                        .map_err(|_| format!("bad duration: {value}"))?,
                );
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag: {arg}")),
            _ => parsed.config_path = Some(arg),
        }
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            eprintln!("usage: chroma-merge [config.json] [--seed N] [--seconds S]");
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config_path {
        Some(path) => SimConfig::load(path),
        None => Ok(SimConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut driver = match Driver::new(config, seed) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Chroma Merge (native) starting with seed {seed}");
    run(&mut driver, args.seconds.unwrap_or(10.0));
    ExitCode::SUCCESS
}

/// Step, "render", and check for shutdown until `seconds` have passed
fn run(driver: &mut Driver, seconds: f32) {
    let frame = Duration::from_secs_f32(driver.step_dt());
    let steps_per_second = driver.config.step_rate as u64;
    let start = Instant::now();
    let mut last = start;
    log::info!("Clear color {:?}", colors::BACKGROUND.to_rgba());

    while start.elapsed().as_secs_f32() < seconds {
        let now = Instant::now();
        let report = driver.update((now - last).as_secs_f32());
        last = now;

        if report.merges > 0 {
            log::debug!("{} merge(s) this frame", report.merges);
        }

        // Renderer stand-in: read-only pass over the active bodies
        let instances = extract_instances(&driver.population);

        let ticks = driver.population.time_ticks;
        if report.collisions() > 0 || ticks % steps_per_second == 0 {
            let stats = driver.population.stats();
            log::info!(
                "tick {ticks}: {} drawn, {} absorbed, largest radius {:.1}, area {:.0}",
                instances.len(),
                stats.absorbed,
                stats.largest_radius,
                stats.total_area
            );
        }

        let spent = now.elapsed();
        if spent < frame {
            std::thread::sleep(frame - spent);
        }
    }

    let stats = driver.population.stats();
    log::info!(
        "Stopped after {} steps with {} active bodies",
        driver.population.time_ticks,
        stats.active
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(args(&["world.json", "--seed", "42", "--seconds", "2.5"])).unwrap();
        assert_eq!(parsed.config_path.as_deref(), Some("world.json"));
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.seconds, Some(2.5));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["--seed"])).is_err());
        assert!(parse_args(args(&["--seed", "abc"])).is_err());
        assert!(parse_args(args(&["--fast"])).is_err());
    }
}
