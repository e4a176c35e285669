use std::{env, fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Utc};
use fakerbot::profiles::{synthesize, LocaleCatalog, SynthesisOptions};
use fakerbot::reports::{profile_text, HtmlRenderer};
use fakerbot::{Locale, StoredProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Offline preview: synthesizes profiles without touching the bot or store.
fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let catalog = LocaleCatalog::builtin()?;
    let source = catalog.field_source(args.locale)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let options = SynthesisOptions {
        couple_sex_to_name_gender: args.coupled,
    };
    let year = Utc::now().year();
    let records: Vec<_> = (0..args.count)
        .map(|_| synthesize(source, &mut rng, year, options))
        .collect();

    match args.html {
        Some(path) => {
            let entries: Vec<StoredProfile> = records
                .into_iter()
                .map(|record| StoredProfile::new(0, None, record))
                .collect();
            let html = HtmlRenderer::new("preview").render_history(&entries);
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} profiles to {}", entries.len(), path.display());
        }
        None => {
            for record in &records {
                println!("{}", profile_text(record));
            }
        }
    }
    Ok(())
}

struct CliArgs {
    locale: Locale,
    count: usize,
    seed: Option<u64>,
    coupled: bool,
    html: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut parsed = Self {
            locale: Locale::En,
            count: 1,
            seed: None,
            coupled: false,
            html: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--locale" => {
                    let code = args.next().context("Expected a locale code after --locale")?;
                    parsed.locale = code.parse()?;
                }
                "--count" => {
                    parsed.count = args
                        .next()
                        .context("Expected a number after --count")?
                        .parse()
                        .context("count must be a positive integer")?;
                }
                "--seed" => {
                    parsed.seed = Some(
                        args.next()
                            .context("Expected a number after --seed")?
                            .parse()
                            .context("seed must be an unsigned integer")?,
                    );
                }
                "--coupled" => parsed.coupled = true,
                "--html" => {
                    parsed.html = Some(PathBuf::from(
                        args.next().context("Expected a file path after --html")?,
                    ));
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Usage: generate [--locale <code>] [--count <n>] [--seed <n>] [--coupled] [--html <file>]"
                    ));
                }
            }
        }
        Ok(parsed)
    }
}
