use crate::boot::{fstab, grub};
use log::warn;
use serde::Serialize;
use std::env;
use std::path::Path;

mod desktop;
mod kernel;
mod release;

/// Everything the signature's operating-system line is built from.
#[derive(Debug, Serialize)]
pub struct OsInventory {
    pub distro: String,
    pub kernel_release: String,
    pub arch: String,
    pub language: String,
    pub desktop: String,
    pub wubi: bool,
    pub others: Vec<String>,
    pub overflowed_devices: Vec<String>,
}

impl OsInventory {
    pub fn collect(grub_cfg: &Path, max_per_device: usize, unknown: &str) -> Self {
        let (kernel_release, arch) = match kernel::get() {
            Ok(kernel) => {
                let arch = kernel::arch_label(&kernel.machine, unknown);
                (kernel.release, arch)
            }
            Err(e) => {
                warn!("Failed to read uname: {e:#}");
                (unknown.to_owned(), format!("{unknown}bit"))
            }
        };
        let distro = match release::get() {
            Ok(distro) => distro,
            Err(e) => {
                warn!("Failed to identify distribution: {e:#}");
                unknown.to_owned()
            }
        };
        let language = env::var("LANG").unwrap_or_else(|_| "en_US".to_owned());
        let desktop = desktop::get().unwrap_or_else(|| unknown.to_owned());
        let wubi = fstab::is_wubi();
        if wubi {
            warn!("Wubi installation detected");
        }
        let os_list = grub::read(grub_cfg, &kernel_release, max_per_device);
        OsInventory {
            distro,
            kernel_release,
            arch,
            language,
            desktop,
            wubi,
            others: os_list.entries,
            overflowed_devices: os_list.overflowed_devices,
        }
    }
}
