use std::path::PathBuf;

use finwell_flow::session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Session script from the first argument, or stdin.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    if let Some(ref path) = path {
        eprintln!("   Session: {}", path.display());
    }

    let report = session::run_from_env(path.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
