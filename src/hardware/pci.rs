use crate::vendors;
use regex::Regex;
use std::sync::LazyLock;

// Modalias forms, as written by the kernel:
//   pci:v000010ECd00008139sv000010ECsd00008139bc02sc00i00
//   usb:v0CF3p1002d0002dc00dsc00dp00icFFiscFFipFF
static REGEX_PCI_MODALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^pci:v0000([0-9A-F]{4})d0000([0-9A-F]{4})s").unwrap());
static REGEX_USB_MODALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^usb:v([0-9A-F]{4})p([0-9A-F]{4})d").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Pci,
    Usb,
}

/// A device identity as read from sysfs, with IDs in the lowercase hex form
/// the signature prints.
#[derive(Debug, PartialEq, Eq)]
pub struct DeviceId {
    pub bus: Bus,
    pub vendor: String,
    pub device: String,
}

impl DeviceId {
    pub fn new(bus: Bus, vendor: &str, device: &str) -> Self {
        DeviceId {
            bus,
            vendor: vendor.to_ascii_lowercase(),
            device: device.to_ascii_lowercase(),
        }
    }

    /// `Realtek [10ec:8139] {r8169}` — vendor name when the ID is known,
    /// always the raw IDs, and the bound kernel driver in braces.
    pub fn label(&self, driver: Option<&str>) -> String {
        let name = match self.bus {
            Bus::Pci => vendors::pci_vendor_name(&self.vendor),
            Bus::Usb => vendors::usb_vendor_name(&self.vendor),
        };
        let ids = format!("[{}:{}]", self.vendor, self.device);
        let driver = driver.unwrap_or_default();
        match name {
            Some(name) => format!("{name} {ids} {{{driver}}}"),
            None => format!("{ids} {{{driver}}}"),
        }
    }
}

pub fn parse_modalias(modalias: &str) -> Option<DeviceId> {
    if let Some(captures) = REGEX_PCI_MODALIAS.captures(modalias) {
        return Some(DeviceId::new(Bus::Pci, &captures[1], &captures[2]));
    }
    if let Some(captures) = REGEX_USB_MODALIAS.captures(modalias) {
        return Some(DeviceId::new(Bus::Usb, &captures[1], &captures[2]));
    }
    None
}

/// The `DRIVER=` value from a sysfs uevent file, absent when no driver is
/// bound.
pub fn parse_uevent_driver(uevent: &str) -> Option<&str> {
    uevent
        .lines()
        .find_map(|line| line.strip_prefix("DRIVER="))
        .filter(|driver| !driver.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{parse_modalias, parse_uevent_driver, Bus, DeviceId};

    #[test]
    fn test_parse_modalias() {
        assert_eq!(
            parse_modalias("pci:v000010ECd00008139sv000010ECsd00008139bc02sc00i00"),
            Some(DeviceId::new(Bus::Pci, "10EC", "8139")),
        );
        assert_eq!(
            parse_modalias("usb:v0CF3p1002d0002dc00dsc00dp00icFFiscFFipFF"),
            Some(DeviceId::new(Bus::Usb, "0CF3", "1002")),
        );
        assert_eq!(parse_modalias("virtio:d00000001v00001AF4"), None);
    }

    #[test]
    fn test_parse_uevent_driver() {
        let uevent = "DRIVER=r8169\n\
                      PCI_CLASS=20000\n\
                      PCI_ID=10EC:8168\n\
                      PCI_SUBSYS_ID=1043:8505\n\
                      MODALIAS=pci:v000010ECd00008168sv00001043sd00008505bc02sc00i00\n";
        assert_eq!(parse_uevent_driver(uevent), Some("r8169"));
        assert_eq!(parse_uevent_driver("PCI_CLASS=30000\n"), None);
    }

    #[test]
    fn test_label() {
        let id = DeviceId::new(Bus::Pci, "10EC", "8139");
        assert_eq!(id.label(Some("8139too")), "Realtek [10ec:8139] {8139too}");
        let id = DeviceId::new(Bus::Pci, "ABCD", "1234");
        assert_eq!(id.label(None), "[abcd:1234] {}");
    }
}
