//! wtpanes CLI entry point.
//!
//! This binary provides the `wtpanes` command for turning panel lists into
//! Windows Terminal launch commands, action documents and batch scripts.

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use wtpanes::cli::Cli;
use wtpanes::error::Result;
use wtpanes::generate::{Format, Generator};
use wtpanes::layout::compute_layout;
use wtpanes::templates::{TemplateCatalog, scaffold};
use wtpanes::{Panel, WtError, document, loader};

const PREVIEW_WIDTH: usize = 60;
const PREVIEW_HEIGHT: usize = 16;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries generated output.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(ref path) => loader::load_config(path)?,
        None => loader::load_default_config()?,
    };
    let catalog = config.catalog();
    let generator = config.generator();

    if cli.list {
        print_listings(&catalog, &generator);
        return Ok(());
    }

    if let Some(count) = cli.new {
        let panels = scaffold(count, config.defaults.directory(), config.defaults.profile());
        println!("{}", document::export_json(&panels)?);
        return Ok(());
    }

    let panels = read_panels(&cli, &catalog)?;

    // Validation short-circuits every output below.
    let errors = generator.validate(&panels);
    if !errors.is_empty() {
        return Err(WtError::InvalidPanels(errors));
    }

    if cli.check {
        println!("OK: {} panel(s)", panels.len());
        return Ok(());
    }

    if cli.preview {
        print_preview(&panels);
        return Ok(());
    }

    if cli.export {
        println!("{}", document::export_json(&panels)?);
        return Ok(());
    }

    if cli.all {
        print_all(&generator, &panels);
        return Ok(());
    }

    let format = cli.format_name(config.defaults.format());
    println!("{}", generator.generate_named(&format, &panels));
    Ok(())
}

/// Resolve the panel list from `--file` or `--template`.
fn read_panels(cli: &Cli, catalog: &TemplateCatalog) -> Result<Vec<Panel>> {
    if let Some(ref path) = cli.file {
        return loader::load_panels(path);
    }

    if let Some(ref id) = cli.template {
        let template = catalog
            .get(id)
            .ok_or_else(|| WtError::TemplateNotFound(id.clone()))?;
        info!(template = %id, "using template");
        return Ok(template.panels.clone());
    }

    Err(WtError::NoInput)
}

/// Print all templates and known profiles.
fn print_listings(catalog: &TemplateCatalog, generator: &Generator) {
    if !catalog.is_empty() {
        println!("Templates:");
        for (id, template) in catalog.iter() {
            println!(
                "  {:<12} {} ({} panels)",
                id,
                template.name,
                template.panels.len()
            );
        }
    }

    let profiles = generator.profiles();
    println!("\nProfiles:");
    for name in profiles.names() {
        println!("  {:<16} {}", name, profiles.token(name));
    }
}

/// Print the grid description and a text drawing of the layout.
fn print_preview(panels: &[Panel]) {
    match compute_layout(panels) {
        Some(layout) => {
            debug!(panels = panels.len(), "rendering preview");
            println!("{}", layout.render_text(PREVIEW_WIDTH, PREVIEW_HEIGHT));
            println!("{}", layout);
        }
        None => println!("No panels configured"),
    }
}

/// Print every format under a header.
fn print_all(generator: &Generator, panels: &[Panel]) {
    let outputs = generator.generate_all(panels);
    for (i, format) in Format::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {} (.{}) ==", format.title(), format.extension());
        println!("{}", outputs.get(format));
    }
}
