use super::loader::{ModuleOptions, load_or_exit};

pub struct CheckArgs {
    pub modules: ModuleOptions,
}

pub fn run(args: CheckArgs) {
    load_or_exit(&args.modules);

    // Silent on success (like cargo check)
}
