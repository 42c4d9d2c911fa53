use crate::hardware::pci;
use anyhow::{ensure, Context, Error};
use log::debug;
use std::fs;
use std::path::Path;

const SYS_CLASS_NET: &str = "/sys/class/net";

pub fn get() -> Result<String, Error> {
    let interfaces = collect_interfaces(Path::new(SYS_CLASS_NET))?;
    ensure!(!interfaces.is_empty(), "No identifiable network interfaces");
    Ok(interfaces.join(" ⋮ "))
}

fn collect_interfaces(dir: &Path) -> Result<Vec<String>, Error> {
    let mut interfaces = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let device = entry.path().join("device");
        // Virtual interfaces (lo, bridges, tunnels) have no backing device.
        let Ok(modalias) = fs::read_to_string(device.join("modalias")) else {
            continue;
        };
        let Some(id) = pci::parse_modalias(modalias.trim()) else {
            debug!("Unrecognized modalias for {name}: {}", modalias.trim());
            continue;
        };
        let uevent = fs::read_to_string(device.join("uevent")).unwrap_or_default();
        let driver = pci::parse_uevent_driver(&uevent);
        interfaces.push(format!("{name}: {}", id.label(driver)));
    }
    interfaces.sort();
    Ok(interfaces)
}
