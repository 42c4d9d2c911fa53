use crate::hardware::HardwareInfo;
use crate::os::OsInventory;
use serde::Serialize;

/// The gathered data in machine-readable form, for `--format json`.
#[derive(Serialize)]
pub struct SystemReport<'a> {
    hostname: &'a str,
    hardware: &'a HardwareInfo,
    os: &'a OsInventory,
}

impl<'a> SystemReport<'a> {
    pub fn new(hostname: &'a str, hardware: &'a HardwareInfo, os: &'a OsInventory) -> Self {
        SystemReport {
            hostname,
            hardware,
            os,
        }
    }
}
