use anyhow::{ensure, Error};
use std::fs;
use std::path::Path;

const DMI_ID_DIR: &str = "/sys/class/dmi/id";

/// Values firmware vendors leave in unconfigured DMI fields.
const FIRMWARE_DEFAULTS: &[&str] = &[
    "System manufacturer",
    "System Product Name",
    "To Be Filled By O.E.M.",
];

pub fn get(unknown: &str) -> Result<String, Error> {
    let dir = Path::new(DMI_ID_DIR);
    let board = Board {
        board_vendor: read_field(&dir.join("board_vendor"), unknown),
        board_name: read_field(&dir.join("board_name"), unknown),
        sys_vendor: read_field(&dir.join("sys_vendor"), unknown),
        product_name: read_field(&dir.join("product_name"), unknown),
    };
    let label = board.shorten(unknown);
    ensure!(label != unknown, "No motherboard identity in DMI");
    Ok(label)
}

fn read_field(path: &Path, unknown: &str) -> String {
    match fs::read_to_string(path) {
        Ok(value) => normalize_field(&value, unknown),
        Err(_) => unknown.to_owned(),
    }
}

fn normalize_field(value: &str, unknown: &str) -> String {
    let value = value.trim();
    if value.is_empty() || FIRMWARE_DEFAULTS.contains(&value) {
        unknown.to_owned()
    } else {
        value.to_owned()
    }
}

struct Board {
    board_vendor: String,
    board_name: String,
    sys_vendor: String,
    product_name: String,
}

impl Board {
    /// Collapses the board and system identities into one label: equal
    /// candidates become one, an unknown candidate yields to the other, and
    /// two distinct known candidates are both kept.
    fn shorten(&self, unknown: &str) -> String {
        let board = format!("{} {}", self.board_vendor, self.board_name);
        let system = format!("{} {}", self.sys_vendor, self.product_name);
        let double = format!("{unknown} {unknown}");
        let is_unknown = |s: &str| s == unknown || s == double;
        if board == system {
            if is_unknown(&board) {
                unknown.to_owned()
            } else {
                board
            }
        } else if is_unknown(&board) {
            system
        } else if is_unknown(&system) {
            board
        } else {
            format!("{board} - {system}")
        }
    }
}
