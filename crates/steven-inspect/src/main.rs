mod catalogue;
mod config;
mod report;

use config::InspectConfig;
use tracing::info;

const DEFAULT_CONFIG: &str = "inspect.toml";

struct Args {
    config_path: String,
    ids: Vec<u16>,
}

/// `[--config <path>] [combined-id ...]`; ids are decimal or `0x` hex.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut config_path = DEFAULT_CONFIG.to_owned();
    let mut ids = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next().ok_or("--config needs a path")?;
            continue;
        }
        ids.push(parse_id(&arg).ok_or_else(|| format!("invalid combined id: {arg}"))?);
    }
    Ok(Args { config_path, ids })
}

fn parse_id(s: &str) -> Option<u16> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: steven-inspect [--config <path>] [combined-id ...]");
            std::process::exit(2);
        }
    };

    let config = match InspectConfig::load_or_default(&args.config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", args.config_path);
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "steven-inspect v{} (vanilla catalogue: {}, {} configured blocks)",
        env!("CARGO_PKG_VERSION"),
        config.catalogue.vanilla,
        config.blocks.len()
    );

    let registry = match catalogue::build_registry(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to build block registry: {e}");
            std::process::exit(1);
        }
    };

    let entries = if args.ids.is_empty() {
        report::table_entries(&registry, config.output.include_unplaced)
    } else {
        report::lookup_entries(&registry, &args.ids)
    };

    match report::render(&entries, config.output.format) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Failed to render output: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.config_path, DEFAULT_CONFIG);
        assert!(parsed.ids.is_empty());
    }

    #[test]
    fn config_and_ids() {
        let parsed = args(&["--config", "blocks.toml", "16", "0x113"]).unwrap();
        assert_eq!(parsed.config_path, "blocks.toml");
        assert_eq!(parsed.ids, vec![16, 0x113]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&["--config"]).is_err());
        assert!(args(&["stone"]).is_err());
        assert!(args(&["65536"]).is_err());
        assert!(args(&["0xZZ"]).is_err());
    }
}
