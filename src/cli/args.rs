use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::DEFAULT_DATA_DIR;

#[derive(Parser, Debug)]
#[command(name = "athlete-cards")]
#[command(
    author,
    version,
    about = "Render printable character cards and an overview page to PDF"
)]
pub struct Args {
    /// Language code of the overlay to use (e.g. de)
    #[arg(short, long, required = true)]
    pub language: String,

    /// Show the character name on each card
    #[arg(short = 'n', long)]
    pub show_name: bool,

    /// Do not print the overview page
    #[arg(long, alias = "so")]
    pub skip_overview: bool,

    /// Print only one card and no overview
    #[arg(short, long)]
    pub dry_run: bool,

    /// Inner panel background color as hex (e.g. #F5F5DC)
    #[arg(long)]
    pub bg_color: Option<String>,

    /// Text and panel border color as hex (e.g. #000000)
    #[arg(long)]
    pub text_color: Option<String>,

    /// Extra spacing between cards in cm
    #[arg(long)]
    pub card_spacing: Option<String>,

    /// Directory containing characters.json and <language>.json
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// TrueType card font (builtin Helvetica when omitted)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Output PDF file path (defaults to characters_<language>.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_required() {
        assert!(Args::try_parse_from(["athlete-cards"]).is_err());
    }

    #[test]
    fn test_path_defaults() {
        let args = Args::parse_from(["athlete-cards", "-l", "fr"]);
        assert_eq!(args.output, None);
        assert_eq!(args.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(args.font, None);
    }

    #[test]
    fn test_skip_overview_alias() {
        let args = Args::parse_from(["athlete-cards", "-l", "de", "--so", "-n", "-d"]);
        assert!(args.skip_overview);
        assert!(args.show_name);
        assert!(args.dry_run);
    }

    #[test]
    fn test_raw_values_kept_unvalidated() {
        let args = Args::parse_from([
            "athlete-cards",
            "-l",
            "de",
            "--bg-color",
            "zzz",
            "--card-spacing",
            "lots",
        ]);
        assert_eq!(args.bg_color.as_deref(), Some("zzz"));
        assert_eq!(args.card_spacing.as_deref(), Some("lots"));
    }
}
