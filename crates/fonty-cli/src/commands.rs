//! Command implementations

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use fonty_catalog::{AdaptedCatalog, CatalogAdaptor, Configuration};
use fonty_source::{CatalogSource, FileSource, ReaderSource, SortOrder, catalog_url};

use crate::cli::{AdaptArgs, UrlArgs};

/// Options from the configuration file combined with the flags
pub fn load_configuration(args: &AdaptArgs) -> Result<Configuration> {
    let flags = args.flags();
    let Some(path) = &args.config else {
        return Ok(flags);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    let file = Configuration::from_json(&json)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))?;
    Ok(file.union(flags))
}

/// Load, adapt and write a listing
pub fn adapt(args: &AdaptArgs) -> Result<AdaptedCatalog> {
    let config = load_configuration(args)?;
    tracing::debug!("Adapting with {:?}", config);

    let records = match args.input_path() {
        Some(path) => FileSource::new(path).load(),
        None => ReaderSource::new("stdin", io::stdin().lock()).load(),
    }
    .context("Failed to load font listing")?;

    let adapted = CatalogAdaptor::new(config).handle(records);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_catalog(&adapted, BufWriter::new(file), args.pretty)?;
            tracing::info!("Wrote {} fonts to {}", adapted.len(), path.display());
        }
        None => write_catalog(&adapted, io::stdout().lock(), args.pretty)?,
    }
    Ok(adapted)
}

/// Serialize an adapted catalog as JSON followed by a newline
pub fn write_catalog(catalog: &AdaptedCatalog, mut out: impl Write, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, catalog)?;
    } else {
        serde_json::to_writer(&mut out, catalog)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Listing request URL for the given key and sort name
pub fn url(args: &UrlArgs) -> Result<String> {
    let sort = SortOrder::from_name_or_default(&args.sort);
    let url = catalog_url(&args.key, sort).context("Failed to build listing URL")?;
    Ok(url.into())
}
