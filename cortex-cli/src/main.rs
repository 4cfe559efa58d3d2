//! Cortex CLI — inspect the presentation content without the TUI.
//!
//! Commands:
//! - `pages` — list pages with their slug and route
//! - `show <page>` — print a page's content as plain text
//! - `catalog` — dump the whole content catalog as JSON
//! - `check` — validate the catalog and the config file
//! - `config` — print the effective configuration as TOML

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cortex_core::{Catalog, Page, SiteConfig};

#[derive(Parser)]
#[command(
    name = "cortex",
    version,
    about = "Cortex CLI — Cortex AI Platform presentation content"
)]
struct Cli {
    /// Log verbosity for stderr (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pages with their slug and route.
    Pages,
    /// Print a page's content as plain text.
    Show {
        /// Page slug (home, architecture, security, cicd, monitoring, implementation) or route.
        #[arg(value_parser = parse_page)]
        page: Page,
    },
    /// Dump the whole content catalog as JSON.
    Catalog {
        /// Indent the output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Validate the built-in catalog and the config file.
    Check {
        /// Config file. Defaults to $CORTEX_CONFIG, then the user config dir.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML.
    Config {
        /// Config file. Defaults to $CORTEX_CONFIG, then the user config dir.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_page(s: &str) -> Result<Page, String> {
    Page::from_slug(s)
        .or_else(|| Page::from_href(s))
        .ok_or_else(|| {
            let known: Vec<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
            format!("unknown page '{s}' (expected one of: {})", known.join(", "))
        })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Pages => run_pages(),
        Commands::Show { page } => run_show(page),
        Commands::Catalog { pretty } => run_catalog(pretty),
        Commands::Check { config } => run_check(config),
        Commands::Config { config } => run_config(config),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_pages() -> Result<()> {
    let catalog = Catalog::builtin();
    for page in Page::ALL {
        println!(
            "{:<16} {:<16} {}",
            page.slug(),
            page.href(),
            catalog.hero(page).title
        );
    }
    Ok(())
}

fn run_show(page: Page) -> Result<()> {
    tracing::debug!(page = page.slug(), "rendering page");
    let catalog = Catalog::builtin();
    print!("{}", render::page(&catalog, page));
    Ok(())
}

fn run_catalog(pretty: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let json = if pretty {
        serde_json::to_string_pretty(&catalog)?
    } else {
        serde_json::to_string(&catalog)?
    };
    println!("{json}");
    Ok(())
}

fn run_check(config: Option<PathBuf>) -> Result<()> {
    let catalog = Catalog::builtin();
    catalog.validate().context("catalog validation failed")?;
    println!(
        "catalog ok: {} diagram nodes, {} pipeline stages, {} code examples, {} metric categories",
        catalog.architecture.nodes.len(),
        catalog.cicd.stages.len(),
        catalog.implementation.examples.len(),
        catalog.monitoring.categories.len(),
    );

    let source = describe_source(config.as_deref());
    SiteConfig::discover(config.as_deref()).with_context(|| format!("config {source}"))?;
    println!("config ok: {source}");
    Ok(())
}

fn run_config(config: Option<PathBuf>) -> Result<()> {
    let source = describe_source(config.as_deref());
    let cfg = SiteConfig::discover(config.as_deref()).with_context(|| format!("config {source}"))?;
    println!("# source: {source}");
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}

fn describe_source(explicit: Option<&std::path::Path>) -> String {
    if let Some(path) = explicit {
        return path.display().to_string();
    }
    match SiteConfig::resolve_path() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "built-in defaults".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn page_argument_accepts_slugs_and_routes() {
        assert_eq!(parse_page("cicd"), Ok(Page::CiCd));
        assert_eq!(parse_page("/monitoring"), Ok(Page::Monitoring));
        assert_eq!(parse_page("/"), Ok(Page::Home));
        let err = parse_page("pricing").unwrap_err();
        assert!(err.contains("implementation"));
    }

    #[test]
    fn show_parses() {
        let cli = Cli::try_parse_from(["cortex", "show", "security"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { page: Page::Security }));
    }
}
