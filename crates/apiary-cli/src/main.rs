//! Apiary command-line driver
//!
//! Generate a seeded random graph, color it with the bee-colony heuristic,
//! and print the result.

mod config;

use apiary_coloring::{ColoringEngine, RunDriver};
use apiary_graph::{DegreeShortfall, Graph};
use apiary_report::{ColoringSnapshot, QualityCurve};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ExperimentConfig, OutputFormat, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apiary=info,apiary_graph=info,apiary_coloring=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = ExperimentConfig::from_env()?.with_args(args)?;
    config.validate()?;
    info!(?config, "starting colony run");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let generated = Graph::generate_detailed(config.generator_config(), &mut rng)?;
    let below_min = generated.below_min_degree(config.min_degree).count();
    if below_min > 0 {
        warn!(
            vertices = below_min,
            min_degree = config.min_degree,
            "some vertices ran out of partners below min_degree"
        );
    }
    let graph = generated.graph;
    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        max_degree = graph.max_degree(),
        shortfall = generated.shortfall.len(),
        "graph generated"
    );

    let mut engine = ColoringEngine::new(&graph, config.num_scouts)?;
    let outcome = RunDriver::new(config.run_config()?).run(&mut engine)?;
    let snapshot = ColoringSnapshot::capture(&graph, &outcome);

    match config.format {
        OutputFormat::Json => snapshot.write_json(std::io::stdout().lock())?,
        OutputFormat::Dot => print!("{}", snapshot.to_dot()),
        OutputFormat::Text => print_summary(&graph, &generated.shortfall, &snapshot)?,
    }

    Ok(())
}

fn print_summary(
    graph: &Graph,
    shortfall: &[DegreeShortfall],
    snapshot: &ColoringSnapshot,
) -> apiary_report::Result<()> {
    println!("Apiary Graph Coloring");
    println!("=====================");
    println!();
    println!("Graph:");
    println!("  Vertices: {}", graph.num_vertices());
    println!("  Edges: {}", graph.num_edges());
    println!("  Max degree: {}", graph.max_degree());
    if !shortfall.is_empty() {
        println!("  Short of target degree: {} vertices", shortfall.len());
    }
    println!();
    println!("Result:");
    println!("  {}", snapshot.termination);
    println!("  Colors used: {}", snapshot.color_count);
    if snapshot.uncolored_count() > 0 {
        println!("  Uncolored vertices: {}", snapshot.uncolored_count());
    }
    println!();

    for vertex in &snapshot.vertices {
        match vertex.color {
            Some(c) => println!("  vertex {:>3} -> color {}", vertex.id, c),
            None => println!("  vertex {:>3} -> uncolored", vertex.id),
        }
    }
    println!();

    let curve = QualityCurve::from_history(&snapshot.history);
    if let Some(best) = curve.best() {
        println!("{}", curve.render(40)?);
        println!(
            "Best: {} colors at iteration {}",
            best.distinct_colors, best.iteration
        );
    } else {
        println!("No history samples (log interval exceeded the iterations run)");
    }

    Ok(())
}
