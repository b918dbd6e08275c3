use crate::cli::Args;
use crate::error::{ConfigError, ConfigWarning};

use super::color::{parse_hex_color, CardColor};
use super::defaults::*;

/// Fully resolved options for one rendering run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Language code; selects the overlay and names the output file
    pub language: String,
    pub show_name: bool,
    pub print_overview: bool,
    /// Render a single card and nothing else
    pub dry_run: bool,
    pub background_color: CardColor,
    pub text_color: CardColor,
    /// Extra space between cards in cm, added to the fixed gaps
    pub card_spacing_cm: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            show_name: false,
            print_overview: true,
            dry_run: false,
            background_color: CardColor::from_tuple(DEFAULT_BACKGROUND_COLOR),
            text_color: CardColor::from_tuple(DEFAULT_TEXT_COLOR),
            card_spacing_cm: 0.0,
        }
    }
}

impl RenderConfig {
    /// Resolve CLI arguments into a usable configuration.
    ///
    /// Never fails: bad colors or spacing are replaced by defaults and
    /// reported through `warnings`. Nothing is logged here; the caller
    /// decides how to report the list.
    pub fn resolve(args: &Args, warnings: &mut Vec<ConfigWarning>) -> Self {
        let background_color = resolve_color(
            args.bg_color.as_deref(),
            CardColor::from_tuple(DEFAULT_BACKGROUND_COLOR),
            "background color",
            warnings,
        );
        let text_color = resolve_color(
            args.text_color.as_deref(),
            CardColor::from_tuple(DEFAULT_TEXT_COLOR),
            "text color",
            warnings,
        );
        let card_spacing_cm = resolve_spacing(args.card_spacing.as_deref(), warnings);

        Self {
            language: args.language.clone(),
            show_name: args.show_name,
            print_overview: !args.skip_overview,
            dry_run: args.dry_run,
            background_color,
            text_color,
            card_spacing_cm,
        }
    }

    /// Output file name derived from the language code
    pub fn output_file_name(&self) -> String {
        format!("characters_{}.pdf", self.language)
    }

    /// Whether the overview page should be appended
    pub fn wants_overview(&self) -> bool {
        self.print_overview && !self.dry_run
    }
}

/// Parse an optional hex color, substituting `default` on failure
pub fn resolve_color(
    raw: Option<&str>,
    default: CardColor,
    option: &'static str,
    warnings: &mut Vec<ConfigWarning>,
) -> CardColor {
    let Some(raw) = raw else {
        return default;
    };

    match parse_hex_color(raw) {
        Ok(color) => color,
        Err(_) => {
            warnings.push(ConfigWarning::InvalidColor {
                option,
                value: raw.to_string(),
                fallback: default.to_string(),
            });
            default
        }
    }
}

/// Parse an optional spacing in centimetres, substituting 0 on failure
pub fn resolve_spacing(raw: Option<&str>, warnings: &mut Vec<ConfigWarning>) -> f32 {
    let Some(raw) = raw else {
        return 0.0;
    };

    match parse_spacing(raw) {
        Ok(value) => value,
        Err(_) => {
            warnings.push(ConfigWarning::InvalidSpacing {
                value: raw.to_string(),
            });
            0.0
        }
    }
}

/// Parse a spacing in centimetres; must be finite and not negative
pub fn parse_spacing(input: &str) -> Result<f32, ConfigError> {
    match input.trim().parse::<f32>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidSpacing(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["athlete-cards", "--language", "de"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_resolve_defaults() {
        let mut warnings = Vec::new();
        let config = RenderConfig::resolve(&args(&[]), &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(config.language, "de");
        assert!(config.print_overview);
        assert_eq!(config.background_color, CardColor::new(245, 245, 220));
        assert_eq!(config.text_color, CardColor::new(0, 0, 0));
        assert_eq!(config.card_spacing_cm, 0.0);
        assert_eq!(config.output_file_name(), "characters_de.pdf");
    }

    #[test]
    fn test_invalid_color_uses_default() {
        let mut warnings = Vec::new();
        let config = RenderConfig::resolve(
            &args(&["--bg-color", "#nothex", "--text-color", "#336699"]),
            &mut warnings,
        );

        assert_eq!(
            config.background_color,
            CardColor::from_tuple(DEFAULT_BACKGROUND_COLOR)
        );
        assert_eq!(config.text_color, CardColor::new(0x33, 0x66, 0x99));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            ConfigWarning::InvalidColor { value, .. } if value == "#nothex"
        ));
    }

    #[test]
    fn test_spacing() {
        let mut warnings = Vec::new();
        assert_eq!(resolve_spacing(Some("0.5"), &mut warnings), 0.5);
        assert!(warnings.is_empty());

        assert_eq!(resolve_spacing(Some("wide"), &mut warnings), 0.0);
        assert_eq!(resolve_spacing(Some("-1"), &mut warnings), 0.0);
        assert_eq!(resolve_spacing(Some("NaN"), &mut warnings), 0.0);
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_parse_spacing() {
        assert_eq!(parse_spacing(" 1.25 "), Ok(1.25));
        assert_eq!(parse_spacing("0"), Ok(0.0));
        assert_eq!(
            parse_spacing("-0.5"),
            Err(ConfigError::InvalidSpacing("-0.5".to_string()))
        );
        assert!(parse_spacing("inf").is_err());
        assert!(parse_spacing("").is_err());
    }

    #[test]
    fn test_flags() {
        let mut warnings = Vec::new();
        let config = RenderConfig::resolve(
            &args(&["--show-name", "--skip-overview", "--dry-run"]),
            &mut warnings,
        );

        assert!(config.show_name);
        assert!(!config.print_overview);
        assert!(config.dry_run);
        assert!(!config.wants_overview());
    }

    #[test]
    fn test_dry_run_suppresses_overview() {
        let config = RenderConfig {
            dry_run: true,
            ..RenderConfig::default()
        };
        assert!(config.print_overview);
        assert!(!config.wants_overview());
    }
}
