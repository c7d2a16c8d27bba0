//! Headless PasteView server entrypoint.

use pasteview_server::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CliFlags {
    help: bool,
    check_languages: bool,
}

fn parse_cli_flags(args: &[String]) -> anyhow::Result<CliFlags> {
    let mut flags = CliFlags::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => flags.help = true,
            "--check-languages" => flags.check_languages = true,
            value if value.starts_with('-') => {
                anyhow::bail!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                );
            }
            value => {
                anyhow::bail!(
                    "Unexpected positional argument: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(flags)
}

fn print_help() {
    println!(
        "pasteview-server\n\n\
         Serves the language catalog and paste form helpers.\n\n\
         Options:\n  \
           --check-languages  Load the language catalog, report it, and exit\n  \
           -h, --help         Show this help\n\n\
         Environment:\n  \
           PORT                 Listen port (default {})\n  \
           BIND                 Full listen address override\n  \
           LANGUAGES_PATH       Language catalog JSON file\n  \
           NARROW_LAYOUT_QUERY  Media query for the phone layout\n  \
           ALLOW_PUBLIC_ACCESS  Allow non-loopback binds and any CORS origin\n  \
           RUST_LOG             Log filter",
        pasteview_server::DEFAULT_PORT
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pasteview=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli_flags = parse_cli_flags(&args)?;

    if cli_flags.help {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let state = AppState::from_config(config)?;

    if cli_flags.check_languages {
        println!(
            "{} languages in {} groups",
            state.languages.len(),
            state.languages.groups().len()
        );
        return Ok(());
    }

    pasteview_server::run(state).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_cli_flags, CliFlags};

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("pasteview-server")
            .chain(values.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_known_flags() {
        assert_eq!(parse_cli_flags(&args(&[])).expect("flags"), CliFlags::default());
        let flags = parse_cli_flags(&args(&["--check-languages", "-h"])).expect("flags");
        assert!(flags.help);
        assert!(flags.check_languages);
    }

    #[test]
    fn rejects_unknown_options_and_positionals() {
        let err = parse_cli_flags(&args(&["--force"])).expect_err("unknown option");
        assert!(err.to_string().contains("Unknown option"));
        let err = parse_cli_flags(&args(&["serve"])).expect_err("positional");
        assert!(err.to_string().contains("Unexpected positional argument"));
    }
}
