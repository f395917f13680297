//! Builds the fifteen-city route graph and prints it.
//!
//! Usage:
//!   cargo run --example city_graph
//!   cargo run --example city_graph -- --neighbors Atlanta
//!   cargo run --example city_graph -- --timings

use std::process;

use adjgraph::{Graph, tracing_support};
use clap::Parser;

const CITIES: [&str; 15] = [
    "Seattle",
    "San Francisco",
    "Los Angeles",
    "Riverside",
    "Phoenix",
    "Chicago",
    "Boston",
    "New York",
    "Atlanta",
    "Miami",
    "Dallas",
    "Houston",
    "Detroit",
    "Philadelphia",
    "Washington",
];

const ROUTES: [(&str, &str); 26] = [
    ("Seattle", "Chicago"),
    ("Seattle", "San Francisco"),
    ("San Francisco", "Riverside"),
    ("San Francisco", "Los Angeles"),
    ("Los Angeles", "Riverside"),
    ("Los Angeles", "Phoenix"),
    ("Riverside", "Phoenix"),
    ("Riverside", "Chicago"),
    ("Phoenix", "Dallas"),
    ("Phoenix", "Houston"),
    ("Dallas", "Chicago"),
    ("Dallas", "Atlanta"),
    ("Dallas", "Houston"),
    ("Houston", "Atlanta"),
    ("Houston", "Miami"),
    ("Atlanta", "Chicago"),
    ("Atlanta", "Washington"),
    ("Atlanta", "Miami"),
    ("Miami", "Washington"),
    ("Chicago", "Detroit"),
    ("Detroit", "Boston"),
    ("Detroit", "Washington"),
    ("Detroit", "New York"),
    ("Boston", "New York"),
    ("New York", "Philadelphia"),
    ("Philadelphia", "Washington"),
];

/// Print the city route graph, or the neighbors of one city.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Only print the neighbors and edges of this city
    #[arg(long)]
    neighbors: Option<String>,

    /// Print per-method timings to stderr when done
    #[arg(long)]
    timings: bool,
}

fn main() {
    let args = Args::parse();
    if args.timings {
        tracing_support::init_tracing();
    }

    let mut graph: Graph<String> = CITIES.iter().map(|city| city.to_string()).collect();
    for (from, to) in ROUTES {
        if let Err(err) = graph.add_edge_by_vertices(from, to) {
            eprintln!("Failed to add route {from} - {to}: {err}");
            process::exit(1);
        }
    }

    match args.neighbors.as_deref() {
        None => {
            println!("{graph}");
            println!();
            println!(
                "{} vertices, {} directed edges",
                graph.vertex_count(),
                graph.edge_count()
            );
        }
        Some(city) => {
            let (neighbors, edges) = match graph
                .neighbors_for_vertex(city)
                .and_then(|n| Ok((n, graph.edges_for_vertex(city)?)))
            {
                Ok(found) => found,
                Err(err) => {
                    eprintln!("{city}: {err}");
                    process::exit(1);
                }
            };
            println!("{city} -> {neighbors:?}");
            for edge in edges {
                println!("  {edge}");
            }
        }
    }

    if args.timings {
        tracing_support::dump_method_timings();
    }
}
