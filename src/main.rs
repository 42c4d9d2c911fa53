use crate::config::Config;
use crate::hardware::HardwareInfo;
use crate::os::OsInventory;
use anyhow::{Context, Error};
use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};
use mimalloc::MiMalloc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs};

mod boot;
mod config;
mod hardware;
mod os;
mod report;
mod signature;
mod vendors;

#[global_allocator]
static GLOBAL_ALLOCATOR: MiMalloc = MiMalloc;

/// Default configuration file, looked up in the working directory.
/// A missing file is fine; every setting has a default.
const CONFIG_FILE: &str = "forum-signature.toml";

#[derive(Parser)]
#[command(version, about = "Proposes a forum signature with hardware and OS information")]
struct Args {
    /// Print debug information while gathering data
    #[arg(short, long)]
    debug: bool,

    /// Read boot entries from an alternate GRUB configuration file
    #[arg(long, value_name = "PATH")]
    grub_cfg: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logger(args.debug);

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let hostname = hostname::get().context("Failed to get hostname")?;
    let hostname = hostname.to_string_lossy().into_owned();
    debug!("Hostname: {hostname}");

    let grub_cfg = args
        .grub_cfg
        .unwrap_or_else(|| config.grub.config_path.clone());
    let unknown = &config.signature.placeholder;

    let os = OsInventory::collect(&grub_cfg, config.grub.max_per_device, unknown);
    let hardware = HardwareInfo::collect(unknown);

    match args.format {
        Format::Text => println!("{}", signature::render(&config, &os, &hardware)),
        Format::Json => {
            let report = report::SystemReport::new(&hostname, &hardware, &os);
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_logger(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            let level = if debug {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            };
            builder.filter_level(level);
        }
    }
    builder.init();
}

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(CONFIG_FILE), false),
    };
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if !required && e.kind() == ErrorKind::NotFound => {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(Error::new(e).context(format!("Could not read {}", path.display())))
        }
    };
    toml::from_str(&content).with_context(|| format!("Could not parse {}", path.display()))
}
