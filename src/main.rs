use awslimitchecker::config::{PACKAGE_NAME, VersionCheckConfig};
use awslimitchecker::logging;
use awslimitchecker::version::VersionResolver;
use awslimitchecker::version::finders::CheckoutVersionFinder;
use clap::Parser;

#[derive(Parser)]
#[command(name = "awslimitchecker-version")]
#[command(version, about = "Report the running awslimitchecker version")]
struct Cli {
    /// Print the version as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = VersionCheckConfig::from_env();
    logging::init(&config);

    let resolver = VersionResolver::new(CheckoutVersionFinder::new(config.source_dir.clone()));
    let info = resolver.resolve();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{PACKAGE_NAME} {info}");
    }
    Ok(())
}
