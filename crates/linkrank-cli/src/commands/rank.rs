//! Rank command: crawl the corpus, run both estimators, print the report

use crate::app::Cli;
use crate::output;
use anyhow::Result;
use linkrank_core::{crawl, sample_rank, IterativeSolver, LinkRankError, RankConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let graph = crawl(&cli.corpus)?;
    if graph.is_empty() {
        return Err(LinkRankError::EmptyGraph.into());
    }
    tracing::debug!(
        "Ranking {} pages ({} links) from {}",
        graph.len(),
        graph.link_count(),
        cli.corpus.display()
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sampling = sample_rank(&graph, config.damping, config.samples, &mut rng)?;

    let iteration = IterativeSolver::new()
        .with_damping(config.damping)
        .with_tolerance(config.tolerance)
        .with_max_iterations(config.max_iterations)
        .run(&graph)?;

    if !iteration.converged {
        eprintln!(
            "Warning: iteration did not converge within {} rounds (last change {:.3e}); results may be inaccurate",
            iteration.iterations, iteration.delta
        );
    }

    print!("{}", output::format_report(&sampling, &iteration, cli.format));
    Ok(())
}

/// Defaults, then environment, then config file, then command-line flags
fn resolve_config(cli: &Cli) -> Result<RankConfig> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::load_from(path)?,
        None => RankConfig::load()?,
    };

    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}
