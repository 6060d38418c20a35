//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Options shared between
//! commands live in small structs that each command flattens in.

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::{ENV_BASE_URL, ENV_KEY};

/// Planet API Client
#[derive(Debug, Parser)]
#[command(name = "planet")]
#[command(version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Valid API key - or via env variable PL_API_KEY
    #[arg(short = 'k', long, global = true, env = ENV_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional for testing
    #[arg(short = 'u', long, global = true, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all scene types.
    ListAllSceneTypes,

    /// Fetch full scene image(s)
    Download(DownloadArgs),

    /// Fetch scene thumbnail(s)
    Thumbnails(ThumbnailsArgs),

    /// Fetch scene metadata
    Metadata(MetadataArgs),

    /// Get a list of scenes
    GetScenesList(ScenesListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// The subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListAllSceneTypes => "list-all-scene-types",
            Self::Download(_) => "download",
            Self::Thumbnails(_) => "thumbnails",
            Self::Metadata(_) => "metadata",
            Self::GetScenesList(_) => "get-scenes-list",
            Self::Completions(_) => "completions",
        }
    }
}

/// The `--scene-type` option.
#[derive(Debug, Clone, Args)]
pub struct SceneTypeArgs {
    /// Scene type, e.g. ortho
    #[arg(short = 's', long, default_value = "ortho")]
    pub scene_type: String,
}

impl Default for SceneTypeArgs {
    fn default() -> Self {
        Self {
            scene_type: "ortho".to_string(),
        }
    }
}

/// The `--pretty` option.
#[derive(Debug, Clone, Default, Args)]
pub struct PrettyArgs {
    /// Pretty-print JSON output
    #[arg(short = 'p', long)]
    pub pretty: bool,
}

/// Arguments for the `download` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub scene_type: SceneTypeArgs,

    /// Product to download
    #[arg(long, value_enum, default_value_t)]
    pub product: Product,

    /// Scene ids (read from stdin when omitted)
    pub scene_ids: Vec<String>,
}

/// Arguments for the `thumbnails` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ThumbnailsArgs {
    #[command(flatten)]
    pub scene_type: SceneTypeArgs,

    /// Thumbnail size
    #[arg(long, value_enum, default_value_t)]
    pub size: ThumbnailSize,

    /// Image format
    #[arg(long, value_enum, default_value_t)]
    pub format: ImageFormat,

    /// Scene ids (read from stdin when omitted)
    pub scene_ids: Vec<String>,
}

/// Arguments for the `metadata` command.
#[derive(Debug, Clone, Args)]
pub struct MetadataArgs {
    #[command(flatten)]
    pub scene_type: SceneTypeArgs,

    #[command(flatten)]
    pub pretty: PrettyArgs,

    /// Scene id
    pub id: String,
}

/// Arguments for the `get-scenes-list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScenesListArgs {
    #[command(flatten)]
    pub scene_type: SceneTypeArgs,

    #[command(flatten)]
    pub pretty: PrettyArgs,

    /// Area of interest, e.g. GeoJSON or WKT ("-" reads stdin)
    #[arg(default_value = "-")]
    pub aoi: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Scene product to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Product {
    #[value(name = "band_1")]
    Band1,
    #[value(name = "band_2")]
    Band2,
    #[value(name = "band_3")]
    Band3,
    #[value(name = "band_4")]
    Band4,
    #[value(name = "band_5")]
    Band5,
    #[value(name = "band_6")]
    Band6,
    #[value(name = "band_7")]
    Band7,
    #[value(name = "band_8")]
    Band8,
    #[value(name = "band_9")]
    Band9,
    #[value(name = "band_10")]
    Band10,
    #[value(name = "band_11")]
    Band11,
    #[default]
    Visual,
    Analytic,
    Qa,
}

impl Product {
    /// The name the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Band1 => "band_1",
            Self::Band2 => "band_2",
            Self::Band3 => "band_3",
            Self::Band4 => "band_4",
            Self::Band5 => "band_5",
            Self::Band6 => "band_6",
            Self::Band7 => "band_7",
            Self::Band8 => "band_8",
            Self::Band9 => "band_9",
            Self::Band10 => "band_10",
            Self::Band11 => "band_11",
            Self::Visual => "visual",
            Self::Analytic => "analytic",
            Self::Qa => "qa",
        }
    }
}

/// Thumbnail size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThumbnailSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ThumbnailSize {
    /// The name the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Thumbnail image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Jpeg,
}

impl ImageFormat {
    /// The name the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
        }
    }
}

/// Render the usage line of a subcommand, e.g. `Usage: planet download ...`.
pub fn subcommand_usage(name: &str) -> String {
    let mut cmd = Cli::command();
    cmd.build();
    cmd.find_subcommand_mut(name)
        .map(|sub| sub.render_usage().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["planet"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags() {
        let cli = parse(&["-k", "key", "-u", "http://x", "list-all-scene-types"]);
        assert_eq!(cli.api_key.as_deref(), Some("key"));
        assert_eq!(cli.base_url.as_deref(), Some("http://x"));
        assert!(matches!(cli.command, Commands::ListAllSceneTypes));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["metadata", "abc", "--api-key", "key"]);
        assert_eq!(cli.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn download_defaults() {
        let cli = parse(&["download"]);
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.scene_type.scene_type, "ortho");
                assert_eq!(args.product, Product::Visual);
                assert!(args.scene_ids.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn download_accepts_bands() {
        let cli = parse(&["download", "--product", "band_11", "-s", "landsat", "a", "b"]);
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.product, Product::Band11);
                assert_eq!(args.product.as_str(), "band_11");
                assert_eq!(args.scene_type.scene_type, "landsat");
                assert_eq!(args.scene_ids, vec!["a", "b"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn download_rejects_unknown_band() {
        let err = Cli::try_parse_from(["planet", "download", "--product", "band_12", "a"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn thumbnails_defaults_and_choices() {
        let cli = parse(&["thumbnails", "--size", "lg", "--format", "jpeg", "x"]);
        match cli.command {
            Commands::Thumbnails(args) => {
                assert_eq!(args.size, ThumbnailSize::Lg);
                assert_eq!(args.format, ImageFormat::Jpeg);
                assert_eq!(args.format.as_str(), "jpeg");
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = parse(&["thumbnails"]);
        match cli.command {
            Commands::Thumbnails(args) => {
                assert_eq!(args.size.as_str(), "md");
                assert_eq!(args.format.as_str(), "png");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn thumbnails_rejects_unknown_size() {
        let err = Cli::try_parse_from(["planet", "thumbnails", "--size", "xl"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn metadata_requires_id() {
        let err = Cli::try_parse_from(["planet", "metadata"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn metadata_parses_pretty() {
        let cli = parse(&["metadata", "-p", "abc"]);
        match cli.command {
            Commands::Metadata(args) => {
                assert!(args.pretty.pretty);
                assert_eq!(args.id, "abc");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn scenes_list_aoi_defaults_to_stdin_marker() {
        let cli = parse(&["get-scenes-list"]);
        match cli.command {
            Commands::GetScenesList(args) => {
                assert_eq!(args.aoi.as_deref(), Some("-"));
                assert!(!args.pretty.pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn command_names_match_clap() {
        let cli = parse(&["get-scenes-list", "POINT(0 0)"]);
        assert_eq!(cli.command.name(), "get-scenes-list");
        assert!(Cli::command()
            .find_subcommand(cli.command.name())
            .is_some());
    }

    #[test]
    fn usage_names_subcommand() {
        let usage = subcommand_usage("download");
        assert!(usage.contains("planet download"), "usage: {}", usage);
    }

    #[test]
    fn usage_for_unknown_command_is_empty() {
        assert!(subcommand_usage("nope").is_empty());
    }
}
