//! Zone planner CLI.
//!
//! Reads `n k` followed by `n` lines of `x y weight` from a file or stdin and
//! prints the best cost and rectangle edges found.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use u_zoning_core::exact::{solve_exhaustive, ExactConfig};
use u_zoning_core::{
    format_text, parse_str, Config, JsonReport, PlanSummary, Solver, Strategy, ZonePlanner,
};

#[derive(Parser)]
#[command(name = "zone-planner")]
#[command(about = "Pick at least k weighted points minimizing rectangle perimeter plus weight")]
#[command(version)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Override the minimum subset size k from the input header
    #[arg(short = 'k', long = "min-required")]
    min_required: Option<usize>,

    /// Strategies to run, in order (default: all)
    #[arg(short, long, value_enum)]
    strategies: Vec<StrategyArg>,

    /// JSON configuration file (fields as in the library Config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Buildings probed past the first k by the greedy strategy
    #[arg(long)]
    probe_lookahead: Option<usize>,

    /// Sweep: step between outer window positions
    #[arg(long)]
    stride: Option<usize>,

    /// Sweep: maximum x-span of an outer window
    #[arg(long)]
    max_width: Option<f64>,

    /// Sweep: how many points beyond k an inner window may hold
    #[arg(long)]
    size_boost: Option<usize>,

    /// Sweep: step between inner window ends
    #[arg(long)]
    inner_stride: Option<usize>,

    /// Run strategies in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Also run the exhaustive solver (small inputs only) and report the gap at info level
    #[arg(long)]
    exact: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Every negative weight, padded up to k
    Negative,
    /// Lightest k plus a negative-weight probe
    Greedy,
    /// Lightest k
    Lowest,
    /// Windowed spatial sweep
    Sweep,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Negative => Strategy::NegativeFirst,
            StrategyArg::Greedy => Strategy::GreedyThenProbe,
            StrategyArg::Lowest => Strategy::LowestKByWeight,
            StrategyArg::Sweep => Strategy::WindowedSweep,
        }
    }
}

impl Cli {
    fn build_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str::<Config>(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Config::default(),
        };

        if !self.strategies.is_empty() {
            config.strategies = self.strategies.iter().copied().map(Into::into).collect();
        }
        if let Some(lookahead) = self.probe_lookahead {
            config.probe_lookahead = lookahead;
        }
        if let Some(stride) = self.stride {
            config.sweep = config.sweep.with_stride(stride);
        }
        if let Some(width) = self.max_width {
            config.sweep = config.sweep.with_max_width(width);
        }
        if let Some(boost) = self.size_boost {
            config.sweep = config.sweep.with_size_boost(boost);
        }
        if let Some(inner) = self.inner_stride {
            config.sweep = config.sweep.with_inner_stride(inner);
        }
        if self.parallel {
            config.parallel = true;
        }
        Ok(config)
    }

    /// Log level count, raised to info when the exhaustive gap was requested.
    fn verbosity(&self) -> u8 {
        if self.exact {
            self.verbose.max(1)
        } else {
            self.verbose
        }
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input {}", path.display())),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbosity());

    let config = cli.build_config()?;
    let text = cli.read_input()?;
    let mut input = parse_str(&text).context("failed to parse input")?;
    if let Some(k) = cli.min_required {
        input.min_required = k;
    }

    let planner = ZonePlanner::new(config);
    let result = planner.solve(&input.buildings, input.min_required)?;

    let summary = PlanSummary::from(&result);
    log::info!(
        "{} buildings, k={}: cost={:.6}, perimeter={:.6}, selected={}, evaluated={}, strategy={}, {}ms",
        input.buildings.len(),
        input.min_required,
        summary.cost,
        summary.perimeter,
        summary.selected,
        summary.evaluated,
        summary.strategy,
        summary.time_ms
    );

    if cli.exact {
        match solve_exhaustive(&input.buildings, input.min_required, &ExactConfig::default()) {
            Ok(exact) => log::info!(
                "exhaustive optimum {:.6} over {} subsets; heuristic gap {:.4}%",
                exact.cost,
                exact.subsets_examined,
                exact.gap(result.cost) * 100.0
            ),
            Err(e) => log::warn!("exhaustive check skipped: {}", e),
        }
    }

    if cli.json {
        let report = JsonReport::new(&result, &input.buildings);
        println!("{}", report.to_json()?);
    } else {
        print!("{}", format_text(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::parse_from([
            "zone-planner",
            "-s",
            "sweep",
            "-s",
            "negative",
            "--stride",
            "5",
            "--max-width",
            "250.5",
            "--inner-stride",
            "0",
            "--probe-lookahead",
            "3",
        ]);
        let config = cli.build_config().unwrap();

        assert_eq!(
            config.strategies,
            vec![Strategy::WindowedSweep, Strategy::NegativeFirst]
        );
        assert_eq!(config.sweep.stride, 5);
        assert_eq!(config.sweep.max_width, 250.5);
        assert_eq!(config.sweep.inner_stride, 1);
        assert_eq!(config.sweep.size_boost, 1000);
        assert_eq!(config.probe_lookahead, 3);
        assert!(!config.parallel);
    }

    #[test]
    fn test_exact_raises_verbosity_to_info() {
        let cli = Cli::parse_from(["zone-planner", "--exact"]);
        assert_eq!(cli.verbosity(), 1);

        let cli = Cli::parse_from(["zone-planner", "--exact", "-vv"]);
        assert_eq!(cli.verbosity(), 2);

        let cli = Cli::parse_from(["zone-planner"]);
        assert_eq!(cli.verbosity(), 0);
    }

    #[test]
    fn test_defaults_when_no_flags() {
        let cli = Cli::parse_from(["zone-planner", "input.txt", "-k", "3"]);
        assert_eq!(cli.min_required, Some(3));
        assert_eq!(cli.build_config().unwrap(), Config::default());
    }
}
