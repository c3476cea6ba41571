use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{Catalog, Factor, FACTORS};
use pipeline::{PreferenceSpec, Profile};
use recommender::{Recommendation, Recommender, DEFAULT_TOP_N};
use std::fs;
use std::path::{Path, PathBuf};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// relocate - find the country that fits your priorities
#[derive(Parser)]
#[command(name = "relocate")]
#[command(about = "Rank countries against weighted relocation preferences", long_about = None)]
struct Cli {
    /// Path to a `::`-delimited catalog file (built-in catalog if omitted)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank countries for a set of preferences
    Recommend {
        /// Start from a preset profile
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,

        /// JSON file with `weights`, `min_requirements` and `deal_breakers`
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Factor weight, e.g. `-w safety=0.3` (repeatable)
        #[arg(short = 'w', long = "weight", value_parser = parse_key_value)]
        weights: Vec<(String, f64)>,

        /// Minimum factor value, e.g. `-m internet_speed=80` (repeatable)
        #[arg(short = 'm', long = "min", value_parser = parse_key_value)]
        min_requirements: Vec<(String, f64)>,

        /// Country to exclude outright (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,
    },

    /// Show every attribute of one country
    Country {
        /// Country name (case-insensitive)
        #[arg(long)]
        name: String,
    },

    /// List the factors that can be weighted or required
    Factors,

    /// List the catalog in order
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    Nomad,
    Family,
    Retiree,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Nomad => Profile::DigitalNomad,
            ProfileArg::Family => Profile::Family,
            ProfileArg::Retiree => Profile::Retiree,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => {
            debug!("No --catalog given, using the built-in catalog");
            Catalog::builtin()
        }
    };
    info!("Catalog ready with {} countries", catalog.len());
    let recommender = Recommender::new(Arc::new(catalog));

    match cli.command {
        Commands::Recommend {
            profile,
            preferences,
            weights,
            min_requirements,
            exclude,
            limit,
        } => {
            let file_spec = preferences
                .as_deref()
                .map(load_preferences)
                .transpose()?;
            let spec = build_spec(
                profile.map(Profile::from),
                file_spec,
                weights,
                min_requirements,
                exclude,
            );
            handle_recommend(&recommender, &spec, limit, cli.json)?
        }
        Commands::Country { name } => handle_country(recommender.catalog(), &name, cli.json)?,
        Commands::Factors => handle_factors(cli.json)?,
        Commands::List => handle_list(recommender.catalog(), cli.json)?,
    }

    Ok(())
}

/// Parse `factor=value` pairs for `--weight` and `--min`
fn parse_key_value(s: &str) -> std::result::Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FACTOR=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing factor name in '{s}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}' for {key}", value.trim()))?;
    Ok((key.to_string(), value))
}

fn load_preferences(path: &Path) -> Result<PreferenceSpec> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse preferences in {}", path.display()))
}

/// Layer preferences: profile, then file, then individual flags.
///
/// Known factor names are stored under their canonical key, so an alias in a
/// later layer replaces the earlier value instead of sitting next to it.
fn build_spec(
    profile: Option<Profile>,
    file_spec: Option<PreferenceSpec>,
    weights: Vec<(String, f64)>,
    min_requirements: Vec<(String, f64)>,
    exclude: Vec<String>,
) -> PreferenceSpec {
    let mut spec = PreferenceSpec::new();

    let mut layer = |overrides: PreferenceSpec| {
        merge_canonical(&mut spec.weights, overrides.weights);
        merge_canonical(&mut spec.min_requirements, overrides.min_requirements);
        spec.deal_breakers.extend(overrides.deal_breakers);
    };

    if let Some(profile) = profile {
        layer(profile.spec());
    }
    if let Some(file_spec) = file_spec {
        layer(file_spec);
    }
    layer(PreferenceSpec {
        weights: weights.into_iter().collect(),
        min_requirements: min_requirements.into_iter().collect(),
        deal_breakers: exclude,
    });

    spec
}

/// Insert `overrides` into `target`, keying known factors by canonical name.
/// Unknown names are kept as given.
fn merge_canonical(target: &mut BTreeMap<String, f64>, overrides: BTreeMap<String, f64>) {
    for (key, value) in overrides {
        let key = match Factor::from_key(&key) {
            Some(factor) => factor.key().to_string(),
            None => key,
        };
        target.insert(key, value);
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: &Recommender,
    spec: &PreferenceSpec,
    limit: usize,
    json: bool,
) -> Result<()> {
    for name in spec.unknown_factors() {
        eprintln!(
            "{} '{}' is not a known factor (see `relocate factors`)",
            "warning:".yellow().bold(),
            name
        );
    }

    let recommendations = recommender.recommend(spec, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    print_recommendations(&recommendations);
    Ok(())
}

/// Handle the 'country' command
fn handle_country(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let country = catalog
        .get(name)
        .ok_or_else(|| anyhow!("Country {} not found", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(country)?);
        return Ok(());
    }

    println!("{}", country.name.bold().blue());
    for factor in Factor::all() {
        let def = factor.def();
        let polarity = if def.higher_is_better {
            "higher is better"
        } else {
            "lower is better"
        };
        println!(
            "{}{:<28} {:>6}{:<6} ({})",
            "• ".green(),
            def.display_name,
            country.value(factor),
            def.unit,
            polarity
        );
    }
    println!(
        "{}{:<28} {}",
        "• ".cyan(),
        "Expat Community",
        country.expat_community_size
    );
    Ok(())
}

/// Handle the 'factors' command
fn handle_factors(json: bool) -> Result<()> {
    if json {
        let factors: Vec<serde_json::Value> = FACTORS
            .iter()
            .map(|def| {
                serde_json::json!({
                    "key": def.key,
                    "aliases": def.aliases,
                    "display_name": def.display_name,
                    "higher_is_better": def.higher_is_better,
                    "default_weight": def.default_weight,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&factors)?);
        return Ok(());
    }

    println!("{}", "Factors:".bold().blue());
    for def in &FACTORS {
        let default_weight = def
            .default_weight
            .map(|w| format!("{w:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let direction = if def.higher_is_better { "↑" } else { "↓" };
        println!(
            "  {:<24} {:<28} {} default {:>5}  aliases: {}",
            def.key.green(),
            def.display_name,
            direction,
            default_weight,
            def.aliases.join(", ")
        );
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.countries())?);
        return Ok(());
    }

    println!("{}", format!("{} countries:", catalog.len()).bold().blue());
    for (i, country) in catalog.iter().enumerate() {
        println!(
            "{:>3}. {:<16} cost {:>5} safety {:>5} healthcare {:>5} {:>5} Mbps  [{}]",
            (i + 1).to_string().green(),
            country.name,
            country.cost_of_living_index,
            country.safety_index,
            country.healthcare_index,
            country.internet_speed,
            country.expat_community_size
        );
    }
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation<'_>]) {
    if recommendations.is_empty() {
        println!("{}", "No country meets all of your requirements.".yellow());
        return;
    }

    println!("{}", "Country Recommendations:".bold().blue());
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "\n{} {} - Score: {:.2}",
            format!("#{}", i + 1).green().bold(),
            rec.country.name.bold(),
            rec.score
        );
        print!("{}", rec.explain());
    }
}
