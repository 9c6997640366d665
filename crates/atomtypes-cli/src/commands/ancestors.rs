use super::is_a::require_known;
use super::loader::{ModuleOptions, load_or_exit};

pub struct AncestorsArgs {
    pub modules: ModuleOptions,
    pub type_name: String,
    pub descendants: bool,
}

pub fn run(args: AncestorsArgs) {
    let types = load_or_exit(&args.modules);
    require_known(&types, &[args.type_name.as_str()]);

    let ids = if args.descendants {
        types.descendants(&args.type_name)
    } else {
        types.ancestors(&args.type_name)
    };
    for name in types.names(ids) {
        println!("{}", name);
    }
}
