use anyhow::{Context, Result};
use catalog::{Catalog, Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use devices::{Document, LogPrinter, LogScanner, Machine, Printer, Scanner};
use filtering::specs::{AndSpecification, ColorSpecification, SizeSpecification};
use filtering::{BetterFilter, Filter, FilterPipeline};
use journal::{Journal, PersistenceManager};
use std::path::{Path, PathBuf};
use tracing::info;

/// spec-filter - composable product specifications
#[derive(Parser)]
#[command(name = "spec-filter")]
#[command(about = "Filter products with composable specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the built-in sample catalog: green, then green and large
    Demo,

    /// Filter a catalog file by color and/or size
    Filter {
        /// Path to a `name::color::size` catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Keep only products of this color (red, green, blue)
        #[arg(long)]
        color: Option<Color>,

        /// Keep only products of this size (small, medium, large)
        #[arg(long)]
        size: Option<Size>,

        /// Print matching products as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Write journal entries to a file, one per line
    Journal {
        /// Journal title
        #[arg(long)]
        title: String,

        /// Entry to add (repeat for several entries)
        #[arg(long = "entry")]
        entries: Vec<String>,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Print and scan documents on a machine built from a printer and a scanner
    Office {
        /// Document name (repeat for several documents)
        #[arg(long = "doc")]
        docs: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => handle_demo(),
        Commands::Filter {
            catalog,
            color,
            size,
            json,
        } => handle_filter(&catalog, color, size, json)?,
        Commands::Journal {
            title,
            entries,
            out,
        } => handle_journal(title, entries, &out)?,
        Commands::Office { docs } => handle_office(docs),
    }

    Ok(())
}

/// Handle the 'demo' command
fn handle_demo() {
    let catalog = Catalog::sample();
    let items = catalog.items();
    let filter = BetterFilter;

    let green = ColorSpecification::new(Color::Green);
    print_products("Green products", &filter.filter(&items, &green));

    let large = SizeSpecification::new(Size::Large);
    let green_and_large = AndSpecification::new(&green, &large);
    print_products(
        "Green and large products",
        &filter.filter(&items, &green_and_large),
    );
}

/// Handle the 'filter' command
fn handle_filter(path: &Path, color: Option<Color>, size: Option<Size>, json: bool) -> Result<()> {
    let catalog = Catalog::load_from_file(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

    let pipeline = build_pipeline(color, size);
    let matches = pipeline.apply(catalog.items());
    info!(
        "{} of {} products matched {} specification(s)",
        matches.len(),
        catalog.len(),
        pipeline.len()
    );

    if json {
        let rendered =
            serde_json::to_string_pretty(&matches).context("Failed to serialize products")?;
        println!("{rendered}");
    } else {
        print_products("Matching products", &matches);
    }
    Ok(())
}

/// Handle the 'journal' command
fn handle_journal(title: String, entries: Vec<String>, out: &Path) -> Result<()> {
    let mut journal = Journal::new(title);
    for entry in entries {
        journal.add(entry);
    }

    PersistenceManager::save(&journal, out).context("Failed to save journal")?;
    println!(
        "{} Saved {} entries to {}",
        "✓".green(),
        journal.len(),
        out.display()
    );
    Ok(())
}

/// Handle the 'office' command
fn handle_office(names: Vec<String>) {
    let docs: Vec<Document> = names.into_iter().map(Document::new).collect();
    let refs: Vec<&Document> = docs.iter().collect();

    let printer = LogPrinter::new();
    let scanner = LogScanner::new();
    let machine = Machine::new(&printer, &scanner);
    machine.print(&refs);
    machine.scan(&refs);

    println!(
        "{} Printed {} and scanned {} documents",
        "✓".green(),
        printer.printed(),
        scanner.scanned()
    );
}

/// One stage per attribute given on the command line
fn build_pipeline(color: Option<Color>, size: Option<Size>) -> FilterPipeline<Product> {
    let mut pipeline = FilterPipeline::new();
    if let Some(color) = color {
        pipeline = pipeline.add_spec(ColorSpecification::new(color));
    }
    if let Some(size) = size {
        pipeline = pipeline.add_spec(SizeSpecification::new(size));
    }
    pipeline
}

fn print_products(header: &str, products: &[&Product]) {
    println!("{}", header.bold().blue());
    if products.is_empty() {
        println!("  (none)");
    }
    for product in products {
        println!(
            "{}{} ({}, {})",
            "• ".green(),
            product.name,
            product.color,
            product.size
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pipeline_without_attributes_keeps_everything() {
        let catalog = Catalog::sample();
        let pipeline = build_pipeline(None, None);
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(catalog.items()).len(), 3);
    }

    #[test]
    fn test_build_pipeline_with_both_attributes() {
        let catalog = Catalog::sample();
        let pipeline = build_pipeline(Some(Color::Green), Some(Size::Large));
        let matches = pipeline.apply(catalog.items());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Tree");
    }

    #[test]
    fn test_cli_parses_filter_arguments() {
        let cli = Cli::try_parse_from([
            "spec-filter",
            "filter",
            "--catalog",
            "products.dat",
            "--color",
            "Blue",
        ])
        .unwrap();

        match cli.command {
            Commands::Filter {
                color, size, json, ..
            } => {
                assert_eq!(color, Some(Color::Blue));
                assert_eq!(size, None);
                assert!(!json);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_cli_parses_office_documents() {
        let cli =
            Cli::try_parse_from(["spec-filter", "office", "--doc", "report", "--doc", "memo"])
                .unwrap();

        match cli.command {
            Commands::Office { docs } => assert_eq!(docs, vec!["report", "memo"]),
            _ => panic!("expected office command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        let result = Cli::try_parse_from([
            "spec-filter",
            "filter",
            "--catalog",
            "products.dat",
            "--color",
            "purple",
        ]);
        assert!(result.is_err());
    }
}
