use leo_report::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_cli() {
        cli::output::error(err.to_string());
        std::process::exit(1);
    }
}
