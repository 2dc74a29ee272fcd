use clap::Parser;
use ecomove::app::cli_args::CliArgs;
use ecomove::app::run;

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    match run_ecomove(args) {
        Ok(_) => {}
        Err(e) => log::error!("{e}"),
    }
}

fn run_ecomove(args: CliArgs) -> Result<(), ecomove::app::AppError> {
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    run::run(&args)
}
