use crate::hardware::pci::{self, Bus, DeviceId};
use anyhow::{ensure, Context, Error};
use log::debug;
use std::fs;
use std::path::Path;

const SYS_PCI_DEVICES: &str = "/sys/bus/pci/devices";

/// PCI base class of display controllers (VGA, XGA, 3D).
const CLASS_DISPLAY: u32 = 0x03;

pub fn get() -> Result<String, Error> {
    let controllers = collect_controllers(Path::new(SYS_PCI_DEVICES))?;
    ensure!(!controllers.is_empty(), "No display controllers found");
    Ok(controllers.join(" ⋮ "))
}

fn collect_controllers(dir: &Path) -> Result<Vec<String>, Error> {
    let mut controllers = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let Ok(class) = fs::read_to_string(path.join("class")) else {
            continue;
        };
        match parse_class(class.trim()) {
            Some(class) if class >> 16 == CLASS_DISPLAY => {}
            _ => continue,
        }
        let vendor = read_id(&path.join("vendor"))
            .with_context(|| format!("No vendor ID for {}", path.display()))?;
        let device = read_id(&path.join("device"))
            .with_context(|| format!("No device ID for {}", path.display()))?;
        let id = DeviceId::new(Bus::Pci, &vendor, &device);
        let uevent = fs::read_to_string(path.join("uevent")).unwrap_or_default();
        let driver = pci::parse_uevent_driver(&uevent);
        debug!("Display controller at {}: {id:?} {driver:?}", path.display());
        controllers.push(id.label(driver));
    }
    controllers.sort();
    Ok(controllers)
}

/// Sysfs class files read `0x030000`.
fn parse_class(s: &str) -> Option<u32> {
    u32::from_str_radix(s.strip_prefix("0x")?, 16).ok()
}

fn read_id(path: &Path) -> Result<String, Error> {
    let id = fs::read_to_string(path).context("Failed to read ID file")?;
    let id = id.trim().strip_prefix("0x").context("Expected 0x prefix")?;
    Ok(id.to_owned())
}
