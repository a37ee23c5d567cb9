use clap::Args;

use crate::QueryArgs;

#[derive(Args)]
pub struct CoveredArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// X coordinate of the point
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    /// Y coordinate of the point
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
}

pub fn execute(args: &CoveredArgs) {
    let covered = super::load(&args.query).is_point_covered(args.x, args.y);

    if args.query.json {
        super::print_json(&covered);
    } else if covered {
        println!("({}, {}) is covered", args.x, args.y);
    } else {
        println!("({}, {}) is not covered", args.x, args.y);
    }
}
