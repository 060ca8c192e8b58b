use clap::Parser;
use hb_outline::cli::Cli;
use hb_outline::config::Config;
use hb_outline::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load();
    let settings = cli.resolve(&config);

    if let Err(e) = run(settings) {
        log::error!("hb-outline error: {}", e);
        std::process::exit(1);
    }
}
