use crate::QueryArgs;

pub fn execute(args: &QueryArgs) {
    let pairs = super::load(args).find_overlaps();

    if args.json {
        super::print_json(&pairs);
        return;
    }

    for (i, j) in &pairs {
        println!("({i}, {j})");
    }
    println!("\n{} overlapping pairs", pairs.len());
}
