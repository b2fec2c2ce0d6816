use clap::Parser;
use std::path::PathBuf;

/// typewhisper-dmg — resolve disk-image layout settings for the
/// TypeWhisper installer.
#[derive(Parser, Debug)]
#[command(name = "typewhisper-dmg", version, about)]
pub struct Args {
    /// Set a define as KEY=VALUE (repeatable; overrides the defines file).
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// TOML file of defines (flat key = "value" table).
    #[arg(long, value_name = "PATH")]
    pub defines_file: Option<PathBuf>,

    /// Write resolved settings to this path instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_defines() {
        let args = Args::parse_from([
            "typewhisper-dmg",
            "-D",
            "app_path=/build/TypeWhisper.app",
            "--define",
            "background=/assets/bg.png",
        ]);
        assert_eq!(
            args.defines,
            vec!["app_path=/build/TypeWhisper.app", "background=/assets/bg.png"]
        );
        assert!(args.output.is_none());
    }

    #[test]
    fn parses_output_and_defines_file() {
        let args = Args::parse_from([
            "typewhisper-dmg",
            "--defines-file",
            "ci/defines.toml",
            "-o",
            "out/dmg-settings.json",
        ]);
        assert_eq!(args.defines_file, Some(PathBuf::from("ci/defines.toml")));
        assert_eq!(args.output, Some(PathBuf::from("out/dmg-settings.json")));
    }
}
