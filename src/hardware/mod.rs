use anyhow::Error;
use log::warn;
use serde::Serialize;

mod cpu;
mod display;
mod memory;
mod motherboard;
mod network;
mod pci;

/// The hardware fields of the signature. Collection is best effort: a field
/// that cannot be gathered holds the placeholder string.
#[derive(Debug, Serialize)]
pub struct HardwareInfo {
    pub cpu: String,
    pub memory: String,
    pub motherboard: String,
    pub display: String,
    pub network: String,
}

impl HardwareInfo {
    pub fn collect(unknown: &str) -> Self {
        HardwareInfo {
            cpu: field("CPU", unknown, cpu::get()),
            memory: field("memory", unknown, memory::get().map(|mib| mib.to_string())),
            motherboard: field("motherboard", unknown, motherboard::get(unknown)),
            display: field("display", unknown, display::get()),
            network: field("network", unknown, network::get()),
        }
    }
}

fn field(name: &str, unknown: &str, result: Result<String, Error>) -> String {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to identify {name}: {e:#}");
            unknown.to_owned()
        }
    }
}
