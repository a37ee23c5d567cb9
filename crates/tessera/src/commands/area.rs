use crate::QueryArgs;

pub fn execute(args: &QueryArgs) {
    let area = super::load(args).calculate_coverage_area();

    if args.json {
        super::print_json(&area);
    } else {
        println!("{area}");
    }
}
