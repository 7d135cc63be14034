use anyhow::Result;
use log::debug;

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Arguments are accepted but do not change behavior.
    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!("Ignoring command line arguments: {:?}", args);

    greeter::demo::run()?;

    Ok(())
}
