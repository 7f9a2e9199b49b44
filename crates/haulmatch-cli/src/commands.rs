//! Command implementations

use std::path::PathBuf;

use chrono::NaiveDate;

use haulmatch_app::app::{QuoteOptions, QuoteService};
use haulmatch_app::config::Config;
use haulmatch_app::repository::load_catalog;
use haulmatch_domain::service::{
    estimate_permit_costs, find_specialized_trailers, normalize, normalize_weight, RouteFinder,
};
use haulmatch_domain::TrailerCatalog;
use haulmatch_types::{Currency, DocumentKind, OutputFormat, Result};

use crate::cli::{Cli, Commands, CustomerArgs, LoadArgs};
use crate::output;

/// Per-invocation settings after command-line overrides
struct Context {
    config: Config,
    format: OutputFormat,
    currency: Currency,
    catalog_path: Option<PathBuf>,
}

impl Context {
    fn catalog(&self) -> Result<TrailerCatalog> {
        load_catalog(&self.config, self.catalog_path.as_deref())
    }

    fn service(&self) -> Result<QuoteService> {
        Ok(QuoteService::from_config(&self.config, self.catalog()?))
    }

    fn origin(&self, from: Option<String>) -> String {
        from.unwrap_or_else(|| self.config.default_origin.clone())
    }

    fn destination(&self, to: Option<String>) -> String {
        to.unwrap_or_else(|| self.config.default_destination.clone())
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        command,
        format,
        currency,
        catalog,
        verbose: _,
    } = cli;

    let config = Config::load()?;
    let ctx = Context {
        format: format.unwrap_or(config.output_format),
        currency: currency.unwrap_or(config.currency),
        catalog_path: catalog,
        config,
    };

    match command {
        Commands::Normalize { value, weight } => cmd_normalize(&ctx, &value, weight),
        Commands::Trailers { specialized, needs } => cmd_trailers(&ctx, specialized, &needs),
        Commands::Match { load } => cmd_match(&ctx, &load),
        Commands::Permits { load } => cmd_permits(&ctx, &load),
        Commands::Points => cmd_points(&ctx),
        Commands::Route {
            load,
            from,
            to,
            trailer,
            alternatives,
        } => cmd_route(&ctx, &load, from, to, trailer, alternatives),
        Commands::Quote {
            load,
            from,
            to,
            trailer,
            kind,
            date,
            customer,
        } => cmd_quote(&ctx, &load, from, to, trailer, kind, date, &customer),
        Commands::Config {
            show,
            set_currency,
            set_output,
            set_catalog,
            clear_catalog,
            set_maps_key,
            set_origin,
            set_destination,
            set_validity,
            reset,
        } => cmd_config(
            ctx.config,
            ConfigUpdate {
                show,
                set_currency,
                set_output,
                set_catalog,
                clear_catalog,
                set_maps_key,
                set_origin,
                set_destination,
                set_validity,
                reset,
            },
        ),
    }
}

fn cmd_normalize(ctx: &Context, value: &str, weight: bool) -> Result<()> {
    let normalized = if weight {
        normalize_weight(value)
    } else {
        normalize(value)
    };
    output::output_normalized(ctx.format, value, normalized)
}

fn cmd_trailers(ctx: &Context, specialized: bool, needs: &[String]) -> Result<()> {
    let catalog = ctx.catalog()?;
    let trailers = if specialized || !needs.is_empty() {
        let needs: Vec<&str> = needs.iter().map(String::as_str).collect();
        find_specialized_trailers(&catalog, &needs)
    } else {
        catalog.trailers().to_vec()
    };
    output::output_trailers(ctx.format, &trailers)
}

fn cmd_match(ctx: &Context, load: &LoadArgs) -> Result<()> {
    let load = load.to_load()?;
    let service = ctx.service()?;
    let result = service.match_load(&load);
    output::output_match(ctx.format, &load, &result)
}

fn cmd_permits(ctx: &Context, load: &LoadArgs) -> Result<()> {
    let load = load.to_load()?;
    let permits = estimate_permit_costs(&load, ctx.currency);
    output::output_permits(ctx.format, &load, &permits)
}

fn cmd_points(ctx: &Context) -> Result<()> {
    let routes = RouteFinder::builtin();
    output::output_points(ctx.format, routes.points(), routes.rules())
}

fn cmd_route(
    ctx: &Context,
    load: &LoadArgs,
    from: Option<String>,
    to: Option<String>,
    trailer: Option<String>,
    alternatives: bool,
) -> Result<()> {
    let load = load.to_load()?;
    let service = ctx.service()?;
    let matches = service.match_load(&load);
    let trailer = service.select_trailer(&matches, trailer.as_deref())?;
    let route = service.find_route(&trailer, &load, &ctx.origin(from), &ctx.destination(to))?;
    let alternatives = if alternatives {
        service.routes().alternative_routes(&route)
    } else {
        Vec::new()
    };
    output::output_route(ctx.format, &trailer, &route, &alternatives)
}

#[allow(clippy::too_many_arguments)]
fn cmd_quote(
    ctx: &Context,
    load: &LoadArgs,
    from: Option<String>,
    to: Option<String>,
    trailer: Option<String>,
    kind: DocumentKind,
    date: Option<NaiveDate>,
    customer: &CustomerArgs,
) -> Result<()> {
    let load = load.to_load()?;
    let service = ctx.service()?;

    let mut options = QuoteOptions::new().with_kind(kind).with_currency(ctx.currency);
    if let Some(trailer) = trailer {
        options = options.with_trailer(trailer);
    }
    if let Some(date) = date {
        options = options.with_issue_date(date);
    }
    if let Some(contact) = customer.to_contact()? {
        options = options.with_customer(contact);
    }

    let outcome = service.quote(&load, &ctx.origin(from), &ctx.destination(to), options)?;
    output::output_quote(ctx.format, &outcome)
}

/// Requested changes to the stored configuration
struct ConfigUpdate {
    show: bool,
    set_currency: Option<Currency>,
    set_output: Option<OutputFormat>,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
    set_maps_key: Option<String>,
    set_origin: Option<String>,
    set_destination: Option<String>,
    set_validity: Option<u64>,
    reset: bool,
}

fn cmd_config(mut config: Config, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(currency) = update.set_currency {
        config.currency = currency;
        modified = true;
    }

    if let Some(output_format) = update.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = update.set_catalog {
        // Fail now rather than on the next run
        load_catalog(&config, Some(path.as_path()))?;
        config.catalog_path = Some(path);
        modified = true;
    }

    if update.clear_catalog {
        config.catalog_path = None;
        modified = true;
    }

    if let Some(key) = update.set_maps_key {
        config.maps_api_key = Some(key);
        modified = true;
    }

    if let Some(origin) = update.set_origin {
        config.default_origin = origin;
        modified = true;
    }

    if let Some(destination) = update.set_destination {
        config.default_destination = destination;
        modified = true;
    }

    if let Some(days) = update.set_validity {
        config.quote_validity_days = days;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
