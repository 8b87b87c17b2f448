//! Command-line front end for the cipher engine. Commands stay small so the
//! output is easy to pipe; diagnostics go to stderr with an `[enigma]` prefix.

use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use enigma_rs::config::{load_config, DebugLevel, MachineConfig};
use enigma_rs::integrity::config_fingerprint;
use enigma_rs::Machine;
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;

const CONFIG_ENV: &str = "ENIGMA_CONFIG";
const DEBUG_ENV: &str = "ENIGMA_DEBUG";
const DEFAULT_CONFIG: &str = "enigma.json";

fn print_usage() {
    eprintln!("Commands (config from --config <path>, ${CONFIG_ENV} or {DEFAULT_CONFIG}):\n  encode <text>\n  trace <text>\n  fingerprint\n  random-config [seed]");
}

struct Diagnostics {
    level: DebugLevel,
}

impl Diagnostics {
    /// `${DEBUG_ENV}` wins over the config file; a value it cannot parse is an error.
    fn new(configured: DebugLevel) -> Result<Self, String> {
        let level = resolve_level(configured, env::var(DEBUG_ENV).ok().as_deref())?;
        Ok(Self { level })
    }

    fn info(&self, message: impl Display) {
        if self.level >= DebugLevel::Info {
            eprintln!("[enigma] {message}");
        }
    }

    fn trace(&self, message: impl Display) {
        if self.level >= DebugLevel::Trace {
            eprintln!("[enigma] {message}");
        }
    }
}

fn resolve_level(configured: DebugLevel, from_env: Option<&str>) -> Result<DebugLevel, String> {
    match from_env {
        Some(value) => value.parse().map_err(|e| format!("{DEBUG_ENV}: {e}")),
        None => Ok(configured),
    }
}

/// Splits `--config <path>` out of the argument list.
fn take_config_path(args: &mut Vec<String>) -> Result<PathBuf, String> {
    if let Some(pos) = args.iter().position(|arg| arg == "--config") {
        if pos + 1 >= args.len() {
            return Err("--config requires a path".to_string());
        }
        let path = args.remove(pos + 1);
        args.remove(pos);
        return Ok(PathBuf::from(path));
    }
    let from_env = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    Ok(PathBuf::from(from_env))
}

fn open_machine(path: &Path) -> Result<(MachineConfig, Machine, Diagnostics), String> {
    let config = load_config(path).map_err(|e| format!("config load failed: {e}"))?;
    let diagnostics = Diagnostics::new(config.debug_level)?;
    let machine = Machine::from_config(&config).map_err(|e| format!("machine setup failed: {e}"))?;

    diagnostics.info(format_args!("config loaded from {}", path.display()));
    if let Some(name) = &config.name {
        diagnostics.info(format_args!("config name: {name}"));
    }
    match config_fingerprint(&config) {
        Ok(fingerprint) => diagnostics.info(format_args!("config SHA-256: {fingerprint}")),
        Err(err) => diagnostics.info(format_args!("config fingerprint unavailable: {err}")),
    }
    diagnostics.info(format_args!("start window: {}", machine.window()));
    Ok((config, machine, diagnostics))
}

fn run(mut args: Vec<String>) -> Result<(), String> {
    let config_path = take_config_path(&mut args)?;
    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return Ok(());
    };

    match command {
        "encode" | "trace" => {
            if args.len() != 2 {
                print_usage();
                return Ok(());
            }
            let (_, mut machine, diagnostics) = open_machine(&config_path)?;
            let (output, traces) = machine.encode_traced(&args[1]);
            for trace in &traces {
                diagnostics.trace(trace);
            }
            if command == "trace" {
                for trace in &traces {
                    println!("{trace}");
                }
            } else {
                println!("{output}");
            }
            diagnostics.info(format_args!("end window: {}", machine.window()));
        }
        "fingerprint" => {
            let (config, _, _) = open_machine(&config_path)?;
            let fingerprint = config_fingerprint(&config).map_err(|e| format!("fingerprint failed: {e}"))?;
            println!("{fingerprint}");
        }
        "random-config" => {
            let config = match args.get(1) {
                Some(seed) => {
                    let seed: u64 = seed.parse().map_err(|_| format!("invalid seed '{seed}'"))?;
                    MachineConfig::random(&mut StdRng::seed_from_u64(seed))
                }
                None => MachineConfig::random(&mut OsRng),
            };
            let json = config.to_json_pretty().map_err(|e| format!("{e}"))?;
            println!("{json}");
        }
        _ => print_usage(),
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(error) = run(args) {
        eprintln!("enigma-rs failed: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_level, take_config_path};
    use enigma_rs::config::DebugLevel;

    #[test]
    fn debug_env_overrides_config() {
        assert_eq!(resolve_level(DebugLevel::Info, None), Ok(DebugLevel::Info));
        assert_eq!(resolve_level(DebugLevel::Off, Some("trace")), Ok(DebugLevel::Trace));
        assert_eq!(resolve_level(DebugLevel::Trace, Some("")), Ok(DebugLevel::Off));
    }

    #[test]
    fn rejects_unknown_debug_env() {
        let err = resolve_level(DebugLevel::Info, Some("verbose")).unwrap_err();
        assert!(err.starts_with("ENIGMA_DEBUG: "), "unexpected error: {err}");
        assert!(err.contains("verbose"));
    }

    #[test]
    fn config_flag_is_split_out() {
        let mut args = vec!["encode".to_string(), "--config".to_string(), "day.json".to_string(), "HI".to_string()];
        let path = take_config_path(&mut args).expect("flag has a path");
        assert_eq!(path.to_str(), Some("day.json"));
        assert_eq!(args, ["encode", "HI"]);
        assert!(take_config_path(&mut vec!["--config".to_string()]).is_err());
    }
}
