use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ecomove")]
#[command(about = "estimate trip emissions and classify points against emission zones")]
pub struct CliArgs {
    /// TOML file with emission/cost factors, reference samples, and the
    /// low-emission boundary ring
    #[arg(short, long)]
    pub config_file: String,
    /// JSON file with one query object or an array of query objects
    #[arg(short, long)]
    pub query_file: String,
}
