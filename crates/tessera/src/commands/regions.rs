use crate::QueryArgs;

pub fn execute(args: &QueryArgs) {
    let regions = super::load(args).get_overlap_regions();

    if args.json {
        super::print_json(&regions);
        return;
    }

    for overlap in &regions {
        let (i, j) = overlap.rect_indices;
        let r = overlap.region;
        println!(
            "({i}, {j}): x={} y={} width={} height={}",
            r.x, r.y, r.width, r.height
        );
    }
    println!("\n{} overlap regions", regions.len());
}
