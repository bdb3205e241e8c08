//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::{Comparison, SeedOutcome};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::report::{self, PerformanceSummary};
use crate::config::{global_config_path, local_config_path, SeedMode, Settings};
use crate::domain::{sample_catalog, synthetic_catalog, SeedCategory, Strategy, SyntheticShape};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli, settings: Settings) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Run) => cmd_run(&ServiceContainer::new(settings)?),
        Some(Commands::Seed {
            synthetic,
            breadth,
            depth,
            force,
        }) => {
            let catalog = select_catalog(&settings, *synthetic, *breadth, *depth)?;
            cmd_seed(&ServiceContainer::new(settings)?, &catalog, *force)
        }
        Some(Commands::Tree { strategy }) => {
            cmd_tree(&ServiceContainer::new(settings)?, (*strategy).into())
        }
        Some(Commands::Bench) => cmd_bench(&ServiceContainer::new(settings)?),
        Some(Commands::Config { command }) => cmd_config(command, &settings),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

/// Pick the catalog from flags, falling back to the configured seed mode.
fn select_catalog(
    settings: &Settings,
    synthetic: bool,
    breadth: Option<usize>,
    depth: Option<usize>,
) -> CliResult<Vec<SeedCategory>> {
    let synthetic = synthetic
        || breadth.is_some()
        || depth.is_some()
        || settings.seed.mode == SeedMode::Synthetic;
    if !synthetic {
        return Ok(sample_catalog());
    }
    let shape = SyntheticShape::new(
        breadth.unwrap_or(settings.seed.breadth),
        depth.unwrap_or(settings.seed.depth),
    )?;
    debug!(?shape, nodes = shape.node_count(), "synthetic catalog");
    Ok(synthetic_catalog(shape))
}

fn report_seed(outcome: SeedOutcome) {
    match outcome {
        SeedOutcome::AlreadySeeded { existing } => {
            output::detail(&format!("Database already initialized with {existing} categories."))
        }
        SeedOutcome::Seeded { inserted, levels } => output::success(&format!(
            "Database initialized: {inserted} categories across {levels} levels"
        )),
    }
}

#[instrument(skip_all)]
fn cmd_run(container: &ServiceContainer) -> CliResult<()> {
    let settings = &container.settings;

    output::header("STEP 1: Initializing database...");
    let catalog = select_catalog(settings, false, None, None)?;
    report_seed(container.seed_service().seed(&catalog, false)?);

    output::header("\nSTEP 2: Building category trees...");
    let comparison = container.benchmark_service().compare()?;
    for strategy in Strategy::ALL {
        output::success(&format!(
            "{} completed in {} ms",
            strategy.label(),
            comparison.get(strategy).elapsed_ms()
        ));
    }

    if settings.display.show_trees {
        for strategy in Strategy::ALL {
            output::banner(&format!("CATEGORY TREE - {}", strategy.label()));
            output::info(&report::forest_tree(&comparison.get(strategy).value));
        }
    }

    print_performance(&comparison);

    let forest = &comparison.scan.value;
    output::banner("TREE ANALYSIS");
    output::info(&report::tree_analysis(forest));

    output::banner("DETAILED CATEGORY ANALYSIS");
    output::info(&report::level_breakdown(forest, settings.display.preview));
    output::info(&report::rule('='));

    check_relationships(&comparison);
    Ok(())
}

#[instrument(skip(container, catalog))]
fn cmd_seed(container: &ServiceContainer, catalog: &[SeedCategory], force: bool) -> CliResult<()> {
    report_seed(container.seed_service().seed(catalog, force)?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, strategy: Strategy) -> CliResult<()> {
    let timed = container.benchmark_service().build(strategy)?;
    output::banner(&format!("CATEGORY TREE - {}", strategy.label()));
    output::info(&report::forest_tree(&timed.value));
    output::info(&report::rule('='));
    output::action(
        "Built",
        &format!(
            "{} categories in {} ms ({:?})",
            timed.value.node_count(),
            timed.elapsed_ms(),
            timed.elapsed
        ),
    );
    Ok(())
}

#[instrument(skip(container))]
fn cmd_bench(container: &ServiceContainer) -> CliResult<()> {
    let comparison = container.benchmark_service().compare()?;
    print_performance(&comparison);
    check_relationships(&comparison);
    Ok(())
}

fn print_performance(comparison: &Comparison) {
    output::banner("PERFORMANCE COMPARISON RESULTS");
    output::info(&PerformanceSummary::new(comparison).render());
    output::info(&report::rule('='));
}

fn check_relationships(comparison: &Comparison) {
    if comparison.same_relationships() {
        output::success("Both strategies produced the same category relationships");
    } else {
        output::warning("strategies produced different category relationships");
    }
}

fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => print_config_location("Global", &path),
                None => output::detail("Global: (no config directory on this platform)"),
            }
            print_config_location("Local", &local_config_path(Path::new(".")));
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn print_config_location(label: &str, path: &Path) {
    let state = if path.exists() { "exists" } else { "not found" };
    output::detail(&format!("{label}: {} ({state})", path.display()));
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
