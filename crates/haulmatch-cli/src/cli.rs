//! CLI definition using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use haulmatch_domain::model::{CustomerContact, LoadSpecification};
use haulmatch_types::{Currency, DocumentKind, Error, OutputFormat, Result};

#[derive(Parser)]
#[command(name = "haulmatch")]
#[command(version)]
#[command(about = "Trailer matching, permit estimates and freight quotes for oversize loads")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Currency for prices (usd, cad). Uses config value if not specified.
    #[arg(long, short = 'c', global = true)]
    pub currency: Option<Currency>,

    /// Alternate trailer catalog (.toml or .csv)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Load dimensions as entered: decimal feet or 43'2" notation
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Load length (ft)
    #[arg(long, short = 'l')]
    pub length: String,

    /// Load width (ft)
    #[arg(long, short = 'w')]
    pub width: String,

    /// Load height (ft)
    #[arg(long = "height", short = 'H')]
    pub height: String,

    /// Load weight (lbs), thousands separators allowed
    #[arg(long, short = 'W')]
    pub weight: String,
}

impl LoadArgs {
    pub fn to_load(&self) -> Result<LoadSpecification> {
        LoadSpecification::parse(&self.length, &self.width, &self.height, &self.weight)
    }
}

/// Optional customer details for the document
#[derive(Args, Debug, Clone, Default)]
pub struct CustomerArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub location: Option<String>,
}

impl CustomerArgs {
    /// None when no field was given; every field is required once one is
    pub fn to_contact(&self) -> Result<Option<CustomerContact>> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.location,
        ];
        if fields.iter().all(|f| f.is_none()) {
            return Ok(None);
        }

        let field = |value: &Option<String>, name: &str| {
            value
                .clone()
                .ok_or_else(|| Error::InvalidContact(format!("--{} is required with customer details", name)))
        };

        let contact = CustomerContact {
            first_name: field(&self.first_name, "first-name")?,
            last_name: field(&self.last_name, "last-name")?,
            email: field(&self.email, "email")?,
            phone: field(&self.phone, "phone")?,
            location: field(&self.location, "location")?,
        };
        contact.validate()?;
        Ok(Some(contact))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a dimension or weight as the load form does
    Normalize {
        /// Raw input, e.g. 43'2" or 12.5 or 42,000
        value: String,

        /// Treat the value as a weight (strips thousands separators)
        #[arg(long)]
        weight: bool,
    },

    /// List the trailer catalog
    Trailers {
        /// Only trailers built for special loads
        #[arg(long)]
        specialized: bool,

        /// Specialization tags to look for (e.g. "Overweight loads"); implies --specialized
        #[arg(long = "need")]
        needs: Vec<String>,
    },

    /// Recommend trailers for a load
    Match {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// Estimate permits, pilot cars and police escort for a load
    Permits {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// List known route points and compliance rules
    Points,

    /// Find a route for a load
    Route {
        #[command(flatten)]
        load: LoadArgs,

        /// Origin point id. Uses config value if not specified.
        #[arg(long)]
        from: Option<String>,

        /// Destination point id. Uses config value if not specified.
        #[arg(long)]
        to: Option<String>,

        /// Trailer id; the best match when omitted
        #[arg(long, short = 't')]
        trailer: Option<String>,

        /// Also show alternative routes
        #[arg(long)]
        alternatives: bool,
    },

    /// Run the whole wizard and produce a quote or invoice
    Quote {
        #[command(flatten)]
        load: LoadArgs,

        /// Origin point id. Uses config value if not specified.
        #[arg(long)]
        from: Option<String>,

        /// Destination point id. Uses config value if not specified.
        #[arg(long)]
        to: Option<String>,

        /// Trailer id; the best match when omitted
        #[arg(long, short = 't')]
        trailer: Option<String>,

        /// Document kind (quote, invoice)
        #[arg(long, default_value = "quote")]
        kind: DocumentKind,

        /// Issue date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        customer: CustomerArgs,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default currency
        #[arg(long)]
        set_currency: Option<Currency>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set alternate trailer catalog path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Go back to the built-in trailer catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Set the map preview API key
        #[arg(long)]
        set_maps_key: Option<String>,

        /// Set default origin point id
        #[arg(long)]
        set_origin: Option<String>,

        /// Set default destination point id
        #[arg(long)]
        set_destination: Option<String>,

        /// Set quote validity (days)
        #[arg(long)]
        set_validity: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
