use crate::QueryArgs;

pub fn execute(args: &QueryArgs) {
    let stats = super::load(args).get_stats();

    if args.json {
        super::print_json(&stats);
        return;
    }

    println!("total rectangles:    {}", stats.total_rectangles);
    println!("overlapping pairs:   {}", stats.overlapping_pairs);
    println!("total area:          {}", stats.total_area);
    println!("overlap area:        {}", stats.overlap_area);
    println!("individual area:     {}", stats.individual_area);
    println!("coverage efficiency: {:.4}", stats.coverage_efficiency);
}
