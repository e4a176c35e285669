use std::env;

use anyhow::{anyhow, Context, Result};
use fakerbot::config::{config_file_path, ensure_workspace_structure, load_or_default, save};
use fakerbot::Locale;

fn main() -> Result<()> {
    ensure_workspace_structure()?;
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = !config_path.exists();

    if let Some(token) = args.token {
        if config.telegram.bot_token != token {
            config.telegram.bot_token = token;
            changed = true;
        }
    }
    if let Some(codes) = args.locales {
        let normalized = normalize_locales(&codes)?;
        if config.locales.enabled != normalized {
            config.locales.enabled = normalized;
            changed = true;
        }
    }
    if let Some(level) = args.log_level {
        if config.logging.level != level {
            config.logging.level = level;
            changed = true;
        }
    }
    if let Some(limit) = args.history_limit {
        if config.history.default_limit != limit {
            config.history.default_limit = limit;
            changed = true;
        }
    }

    if changed {
        save(&config)?;
        println!("Bot settings recorded at {}", config_path.display());
    } else {
        println!("Bot settings already configured.");
    }
    if config.resolved_bot_token().is_none() {
        println!("No bot token yet. Pass --token or set FAKERBOT_BOT_TOKEN before starting the bot.");
    }

    Ok(())
}

struct CliArgs {
    token: Option<String>,
    locales: Option<String>,
    log_level: Option<String>,
    history_limit: Option<usize>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut parsed = Self {
            token: None,
            locales: None,
            log_level: None,
            history_limit: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--token" => {
                    parsed.token = Some(args.next().context("Expected a bot token after --token")?);
                }
                "--locales" => {
                    parsed.locales = Some(
                        args.next()
                            .context("Expected comma-separated locale codes after --locales")?,
                    );
                }
                "--log-level" => {
                    parsed.log_level =
                        Some(args.next().context("Expected a level after --log-level")?);
                }
                "--history-limit" => {
                    let raw = args
                        .next()
                        .context("Expected a number after --history-limit")?;
                    let limit = raw
                        .parse::<usize>()
                        .ok()
                        .filter(|limit| *limit > 0)
                        .with_context(|| format!("Invalid history limit '{raw}'"))?;
                    parsed.history_limit = Some(limit);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(parsed)
    }
}

fn normalize_locales(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            code.parse::<Locale>()
                .map(|locale| locale.code().to_string())
                .map_err(|err| anyhow!("{err}. Known codes: {}", known_codes()))
        })
        .collect()
}

fn known_codes() -> String {
    Locale::ALL
        .iter()
        .map(|locale| locale.code())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_usage() {
    println!("FakerBot setup");
    println!("Records bot settings in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --token <token>          Telegram bot token");
    println!("  --locales <a,b,...>      Locales offered by /generate (default: all)");
    println!("  --log-level <filter>     Tracing filter, e.g. info or fakerbot=debug");
    println!("  --history-limit <n>      Default /history entry count (default: 10)");
}
