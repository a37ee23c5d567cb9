use clap::Args;

use tessera_core::{Config, DepthSearch};

use crate::QueryArgs;

#[derive(Args)]
pub struct MaxPointArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// Scan integer points only, regardless of the configured strategy
    #[arg(long)]
    pub grid: bool,
}

pub fn execute(args: &MaxPointArgs, config: &Config) {
    let analyzer = super::load(&args.query);

    let strategy = if args.grid {
        DepthSearch::Grid
    } else {
        config.analysis.depth_search
    };
    let best = match strategy {
        DepthSearch::Cells => analyzer.find_max_overlap_point(),
        DepthSearch::Grid => analyzer
            .find_max_overlap_point_on_grid(config.analysis.grid_limit)
            .unwrap_or_else(|e| super::fail(e)),
    };

    if args.query.json {
        super::print_json(&best);
        return;
    }

    match (best.x, best.y) {
        (Some(x), Some(y)) => println!("depth {} at ({x}, {y})", best.count),
        _ => println!("no covered point"),
    }
}
