// Command-line surface. A bare `gamepage` with no flags opens the default page.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "gamepage", version, about = "Open the bundled web page in a desktop window")]
pub struct LaunchArgs {
    /// Window title.
    #[arg(long)]
    pub title: Option<String>,

    /// Entry HTML document, relative to the executable's directory.
    #[arg(long, value_name = "PATH")]
    pub entry: Option<PathBuf>,

    /// Inner window width in logical pixels.
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Inner window height in logical pixels.
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Enable the webview inspector.
    #[arg(long)]
    pub devtools: bool,

    /// Read settings from this TOML file instead of the default locations.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        LaunchArgs::command().debug_assert();
    }

    #[test]
    fn bare_invocation_sets_nothing() {
        let args = LaunchArgs::try_parse_from(["gamepage"]).unwrap();
        assert!(args.title.is_none());
        assert!(args.entry.is_none());
        assert!(args.width.is_none());
        assert!(args.height.is_none());
        assert!(!args.devtools);
        assert!(args.config.is_none());
    }

    #[test]
    fn all_flags_parse() {
        let args = LaunchArgs::try_parse_from([
            "gamepage",
            "--title",
            "GameWebsiteApp",
            "--entry",
            "dist/play.html",
            "--width",
            "1024",
            "--height",
            "768",
            "--devtools",
            "--config",
            "/etc/gamepage.toml",
        ])
        .unwrap();
        assert_eq!(args.title.as_deref(), Some("GameWebsiteApp"));
        assert_eq!(args.entry, Some(PathBuf::from("dist/play.html")));
        assert_eq!(args.width, Some(1024));
        assert_eq!(args.height, Some(768));
        assert!(args.devtools);
        assert_eq!(args.config, Some(PathBuf::from("/etc/gamepage.toml")));
    }

    #[test]
    fn zero_width_is_a_usage_error() {
        let err = LaunchArgs::try_parse_from(["gamepage", "--width", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(LaunchArgs::try_parse_from(["gamepage", "index.html"]).is_err());
    }
}
