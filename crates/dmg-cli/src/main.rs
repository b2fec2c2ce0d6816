mod cli;

use dmg_settings::{resolve_settings, save_settings_to_path, settings_to_json, Defines};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap()),
            ),
        )
        .init();

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &cli::Args) -> Result<(), dmg_settings::SettingsError> {
    let mut defines = match &args.defines_file {
        Some(path) => Defines::load_from_path(path)?,
        None => Defines::new(),
    };
    for arg in &args.defines {
        defines.set_from_arg(arg)?;
    }

    let settings = resolve_settings(&defines)?;

    match &args.output {
        Some(path) => {
            save_settings_to_path(&settings, path)?;
            tracing::info!("resolved settings written to {}", path.display());
        }
        None => println!("{}", settings_to_json(&settings)?),
    }

    Ok(())
}
