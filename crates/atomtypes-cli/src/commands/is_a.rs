use atomtypes_lib::TypeQueryFacade;

use super::loader::{ModuleOptions, fail, load_or_exit};

pub struct IsAArgs {
    pub modules: ModuleOptions,
    pub subtype: String,
    pub supertype: String,
}

pub fn run(args: IsAArgs) {
    let types = load_or_exit(&args.modules);
    require_known(&types, &[args.subtype.as_str(), args.supertype.as_str()]);

    let answer = types.is_a(&args.subtype, &args.supertype);
    println!("{}", answer);
    if !answer {
        std::process::exit(1);
    }
}

/// Exit with an error naming the first unknown type.
pub fn require_known(types: &TypeQueryFacade, names: &[&str]) {
    if let Some(name) = names.iter().find(|name| types.resolve(name).is_none()) {
        fail(format_args!("unknown type `{}`", name));
    }
}
