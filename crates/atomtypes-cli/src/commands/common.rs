use super::is_a::require_known;
use super::loader::{ModuleOptions, load_or_exit};

pub struct CommonArgs {
    pub modules: ModuleOptions,
    pub first: String,
    pub second: String,
    pub most_specific: bool,
}

pub fn run(args: CommonArgs) {
    let types = load_or_exit(&args.modules);
    require_known(&types, &[args.first.as_str(), args.second.as_str()]);

    let ids = if args.most_specific {
        types.most_specific_common_ancestors(&args.first, &args.second)
    } else {
        types.common_ancestors(&args.first, &args.second)
    };
    for name in types.names(&ids) {
        println!("{}", name);
    }
}
