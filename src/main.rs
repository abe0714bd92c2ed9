use anyhow::bail;
use ledmapper::session::run_session;
use ledmapper::{init_logging, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;

const USAGE: &str = "usage: ledmapper <session.toml> [output-dir]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("LedMapper {} (built {})", VERSION, BUILD_DATE);

    let mut args = std::env::args().skip(1);
    let Some(session_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let output_dir = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    let config = Config::load_or_default(None)?;
    let report = run_session(&session_path, output_dir.as_deref(), &config).await?;

    print!("{}", report.state.grid());
    println!(
        "{} LEDs, shape {} -> {}",
        report.descriptor.led_count,
        report.state.shape(),
        report.output.display()
    );
    Ok(())
}
