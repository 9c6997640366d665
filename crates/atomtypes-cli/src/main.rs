mod cli;
mod colors;
mod commands;

use cli::{
    AncestorsParams, CheckParams, CommonParams, DumpParams, IsAParams, build_cli, verbosity,
};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(verbosity(&matches));

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("is-a", m)) => {
            let params = IsAParams::from_matches(m);
            commands::is_a::run(params.into());
        }
        Some(("ancestors", m)) => {
            let params = AncestorsParams::from_matches(m);
            commands::ancestors::run(params.into());
        }
        Some(("common", m)) => {
            let params = CommonParams::from_matches(m);
            commands::common::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(default_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
