//! Command-line surface over the cannatrack core services.
//!
//! # Responsibility
//! - Parse arguments, open the database, call one tracker operation, print
//!   plain text. All state behavior lives in `cannatrack_core`.

use anyhow::{anyhow, bail, Result};
use cannatrack_core::db::open_db;
use cannatrack_core::model::id::generate_id;
use cannatrack_core::service::tracker::today_iso_date;
use cannatrack_core::{
    default_log_level, init_logging, CatalogOutcome, DeviceDraft, DeviceType, EntryDraft,
    LocationDraft, Product, StashOutcome, StockedItem, StrainType, Theme, Tracker,
};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

/// Which of the two location slots a shared subcommand targets.
#[derive(Clone, Copy)]
enum LocationKind {
    Surgery,
    Pharmacy,
}

#[derive(Parser)]
#[command(name = "cannatrack", version, about = "Personal consumption tracker")]
struct Cli {
    /// Database file.
    #[arg(long, default_value = "cannatrack.db")]
    db: PathBuf,
    /// Directory for rolling log files; defaults to `logs` next to the
    /// database.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the consumption journal.
    #[command(subcommand)]
    Log(LogCommand),
    /// Manage the product catalogue.
    #[command(subcommand)]
    Product(ProductCommand),
    /// Manage owned devices.
    #[command(subcommand)]
    Device(DeviceCommand),
    /// Manage prescribing surgeries.
    #[command(subcommand)]
    Surgery(LocationCommand),
    /// Manage dispensing pharmacies.
    #[command(subcommand)]
    Pharmacy(LocationCommand),
    /// Manage stash inventory.
    #[command(subcommand)]
    Stash(StashCommand),
    /// Manage tolerance breaks.
    #[command(subcommand)]
    Break(BreakCommand),
    /// Show or change the theme preference.
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Subcommand)]
enum LogCommand {
    /// Record a session.
    Add {
        /// Product id.
        product: String,
        /// Session date (ISO), defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// 1-5 stars.
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        #[arg(long)]
        dosage: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Device id used for the session.
        #[arg(long)]
        device: Option<String>,
        /// Prescribing surgery id.
        #[arg(long)]
        surgery: Option<String>,
        /// Dispensing pharmacy id.
        #[arg(long)]
        pharmacy: Option<String>,
    },
    /// List recent sessions, newest first.
    List {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Delete a session by id.
    Delete { id: String },
}

#[derive(Subcommand)]
enum ProductCommand {
    /// Add a product, or update it when --id matches an existing one.
    Add {
        name: String,
        #[arg(long, default_value = "")]
        producer: String,
        /// Indica, Sativa or Hybrid.
        #[arg(long, default_value = "Hybrid")]
        strain: String,
        #[arg(long, default_value_t = 0.0)]
        thc: f64,
        #[arg(long, default_value_t = 0.0)]
        cbd: f64,
        #[arg(long)]
        price_per_gram: Option<f64>,
        #[arg(long, default_value = "")]
        description: String,
        /// Existing product id to update.
        #[arg(long)]
        id: Option<String>,
    },
    /// List the catalogue.
    List,
}

#[derive(Subcommand)]
enum DeviceCommand {
    Add {
        name: String,
        /// Portable Vaporizer, Desktop Vaporizer, Oil Pen, Water Pipe, Pipe
        /// or Other.
        #[arg(long, default_value = "Other")]
        kind: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        purchased: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    List,
    Remove { id: String },
}

#[derive(Subcommand)]
enum LocationCommand {
    Add {
        name: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    List,
    Remove { id: String },
}

#[derive(Subcommand)]
enum StashCommand {
    /// Set the stocked quantity for a product; blank or "0" removes it.
    Set {
        product: String,
        quantity: String,
        /// Acquisition date (ISO).
        #[arg(long)]
        acquired: Option<String>,
    },
    Remove { product: String },
    List,
}

#[derive(Subcommand)]
enum BreakCommand {
    /// Start a tolerance break today (ends any running break).
    Start,
    /// End a break; defaults to the active one.
    End { id: Option<String> },
    Status,
}

#[derive(Subcommand)]
enum ThemeCommand {
    Show,
    /// "light" or "dark".
    Set { value: String },
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(|| {
        let mut dir = cli
            .db
            .parent()
            .map(|parent| parent.to_path_buf())
            .unwrap_or_default();
        dir.push("logs");
        dir
    });
    init_logging(default_log_level(), &log_dir).map_err(|message| anyhow!(message))?;

    let conn = open_db(&cli.db)?;
    let mut tracker = Tracker::open(&conn)?;
    info!("event=cli_start module=cli status=ok db={}", cli.db.display());

    match cli.command {
        Command::Log(command) => run_log(&mut tracker, command),
        Command::Product(command) => run_product(&mut tracker, command),
        Command::Device(command) => run_device(&mut tracker, command),
        Command::Surgery(command) => run_location(&mut tracker, LocationKind::Surgery, command),
        Command::Pharmacy(command) => run_location(&mut tracker, LocationKind::Pharmacy, command),
        Command::Stash(command) => run_stash(&mut tracker, command),
        Command::Break(command) => run_break(&mut tracker, command),
        Command::Theme(command) => run_theme(&mut tracker, command),
    }
}

fn run_log(tracker: &mut Tracker, command: LogCommand) -> Result<()> {
    match command {
        LogCommand::Add {
            product,
            date,
            rating,
            dosage,
            notes,
            device,
            surgery,
            pharmacy,
        } => {
            if tracker.find_product(&product).is_none() {
                bail!("unknown product id `{product}`");
            }
            let id = tracker.add_entry(EntryDraft {
                product_id: product,
                date: date.unwrap_or_else(today_iso_date),
                rating,
                notes,
                dosage,
                device_id: device,
                surgery_id: surgery,
                pharmacy_id: pharmacy,
            })?;
            println!("logged {id}");
        }
        LogCommand::List { limit } => {
            for entry in tracker.recent_entries(limit) {
                let product_name = tracker
                    .find_product(&entry.product_id)
                    .map(|product| product.name.as_str())
                    .unwrap_or(entry.product_id.as_str());
                let dosage = entry.dosage.as_deref().unwrap_or("-");
                println!(
                    "{}  {}  {}  {}/5  {}",
                    entry.id, entry.date, product_name, entry.rating, dosage
                );
            }
        }
        LogCommand::Delete { id } => {
            if tracker.delete_entry(&id)? {
                println!("deleted {id}");
            } else {
                println!("no entry with id {id}");
            }
        }
    }
    Ok(())
}

fn run_product(tracker: &mut Tracker, command: ProductCommand) -> Result<()> {
    match command {
        ProductCommand::Add {
            name,
            producer,
            strain,
            thc,
            cbd,
            price_per_gram,
            description,
            id,
        } => {
            let kind = StrainType::parse(&strain)
                .ok_or_else(|| anyhow!("unknown strain type `{strain}`"))?;
            let product = Product {
                id: id.unwrap_or_else(generate_id),
                name,
                producer,
                logo_url: String::new(),
                kind,
                thc,
                cbd,
                terpenes: Vec::new(),
                effects: Vec::new(),
                description,
                image_url: String::new(),
                price_per_gram,
            };
            let saved_id = product.id.clone();
            match tracker.add_or_update_product(product)? {
                CatalogOutcome::Added => println!("added {saved_id}"),
                CatalogOutcome::Updated => println!("updated {saved_id}"),
            }
        }
        ProductCommand::List => {
            for product in tracker.products() {
                let price = product
                    .price_per_gram
                    .map(|value| format!("£{value:.2}/g"))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}  {}  {}  THC {}%  CBD {}%  {}",
                    product.id,
                    product.name,
                    product.kind.as_str(),
                    product.thc,
                    product.cbd,
                    price
                );
            }
        }
    }
    Ok(())
}

fn run_device(tracker: &mut Tracker, command: DeviceCommand) -> Result<()> {
    match command {
        DeviceCommand::Add {
            name,
            kind,
            brand,
            purchased,
            notes,
        } => {
            let kind =
                DeviceType::parse(&kind).ok_or_else(|| anyhow!("unknown device type `{kind}`"))?;
            let id = tracker.add_device(DeviceDraft {
                name,
                kind,
                brand,
                purchase_date: purchased,
                notes,
            })?;
            println!("added {id}");
        }
        DeviceCommand::List => {
            for device in tracker.devices() {
                let brand = device.brand.as_deref().unwrap_or("-");
                println!("{}  {}  {}  {}", device.id, device.name, device.kind.as_str(), brand);
            }
        }
        DeviceCommand::Remove { id } => {
            if tracker.delete_device(&id)? {
                println!("removed {id}");
            } else {
                println!("no device with id {id}");
            }
        }
    }
    Ok(())
}

fn run_location(tracker: &mut Tracker, kind: LocationKind, command: LocationCommand) -> Result<()> {
    match command {
        LocationCommand::Add {
            name,
            address,
            notes,
        } => {
            let draft = LocationDraft {
                name,
                address,
                notes,
            };
            let id = match kind {
                LocationKind::Surgery => tracker.add_surgery(draft)?,
                LocationKind::Pharmacy => tracker.add_pharmacy(draft)?,
            };
            println!("added {id}");
        }
        LocationCommand::List => match kind {
            LocationKind::Surgery => {
                for surgery in tracker.surgeries() {
                    println!(
                        "{}  {}  {}",
                        surgery.id,
                        surgery.name,
                        surgery.address.as_deref().unwrap_or("-")
                    );
                }
            }
            LocationKind::Pharmacy => {
                for pharmacy in tracker.pharmacies() {
                    println!(
                        "{}  {}  {}",
                        pharmacy.id,
                        pharmacy.name,
                        pharmacy.address.as_deref().unwrap_or("-")
                    );
                }
            }
        },
        LocationCommand::Remove { id } => {
            let removed = match kind {
                LocationKind::Surgery => tracker.delete_surgery(&id)?,
                LocationKind::Pharmacy => tracker.delete_pharmacy(&id)?,
            };
            if removed {
                println!("removed {id}");
            } else {
                println!("nothing with id {id}");
            }
        }
    }
    Ok(())
}

fn run_stash(tracker: &mut Tracker, command: StashCommand) -> Result<()> {
    match command {
        StashCommand::Set {
            product,
            quantity,
            acquired,
        } => {
            let outcome = tracker.upsert_stash_item(StockedItem {
                product_id: product.clone(),
                quantity,
                acquisition_date: acquired,
            })?;
            match outcome {
                StashOutcome::Added => println!("stocked {product}"),
                StashOutcome::Updated => println!("updated {product}"),
                StashOutcome::Removed => println!("cleared {product}"),
                StashOutcome::Ignored => println!("nothing stocked for {product}"),
            }
        }
        StashCommand::Remove { product } => {
            if tracker.remove_stash_item(&product)? {
                println!("cleared {product}");
            } else {
                println!("nothing stocked for {product}");
            }
        }
        StashCommand::List => {
            for item in tracker.stash_items() {
                let product_name = tracker
                    .find_product(&item.product_id)
                    .map(|product| product.name.as_str())
                    .unwrap_or(item.product_id.as_str());
                println!("{}  {}", product_name, item.quantity);
            }
            println!("total: {:.2}g", tracker.stash_total_grams());
        }
    }
    Ok(())
}

fn run_break(tracker: &mut Tracker, command: BreakCommand) -> Result<()> {
    match command {
        BreakCommand::Start => {
            let started = tracker.start_break()?;
            println!("break started {}", started.start_date);
        }
        BreakCommand::End { id } => {
            let target = match id.or_else(|| tracker.active_break().map(|tb| tb.id.clone())) {
                Some(target) => target,
                None => bail!("no active break to end"),
            };
            if tracker.end_break(&target)? {
                println!("break ended");
            } else {
                println!("no active break with id {target}");
            }
        }
        BreakCommand::Status => match tracker.active_break() {
            Some(active) => println!("on a break since {}", active.start_date),
            None => println!("no active break"),
        },
    }
    Ok(())
}

fn run_theme(tracker: &mut Tracker, command: ThemeCommand) -> Result<()> {
    match command {
        ThemeCommand::Show => println!("{}", tracker.theme().as_str()),
        ThemeCommand::Set { value } => {
            let theme =
                Theme::parse(&value).ok_or_else(|| anyhow!("unknown theme `{value}`"))?;
            tracker.set_theme(theme)?;
            println!("{}", theme.as_str());
        }
        ThemeCommand::Toggle => {
            let theme = tracker.toggle_theme()?;
            println!("{}", theme.as_str());
        }
    }
    Ok(())
}
