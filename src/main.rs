use anyhow::{Context, Result};
use clap::Parser;

use athlete_cards::cli::Args;
use athlete_cards::config::RenderConfig;
use athlete_cards::error::ConfigWarning;
use athlete_cards::loader::load_deck;
use athlete_cards::output::write_document;
use athlete_cards::render::DeckRenderer;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Invalid colors and spacing fall back to defaults with a warning
    let mut warnings = Vec::new();
    let config = RenderConfig::resolve(&args, &mut warnings);
    report(&warnings);

    let deck = load_deck(&args.data_dir, &config.language).with_context(|| {
        format!(
            "Failed to load characters for '{}' from {}",
            config.language,
            args.data_dir.display()
        )
    })?;

    log::info!("Loaded {} characters", deck.len());

    let mut renderer = DeckRenderer::new(config);
    if let Some(font) = &args.font {
        renderer = renderer.with_font(font);
    }

    let rendered = renderer
        .render(&deck)
        .with_context(|| "Failed to generate PDF")?;
    report(&rendered.warnings);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| renderer.config().output_file_name().into());

    write_document(&output_path, &rendered.pdf)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!(
        "Successfully wrote {} cards to {}",
        rendered.summary.cards_drawn(),
        output_path.display()
    );

    Ok(())
}

/// The library only collects warnings; this is the one place they are logged
fn report(warnings: &[ConfigWarning]) {
    for warning in warnings {
        log::warn!("{}", warning);
    }
}
