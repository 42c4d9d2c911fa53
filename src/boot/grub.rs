use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static REGEX_MENUENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*menuentry\s+['"]([^'"]*)['"]"#).unwrap());
static REGEX_SET_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*set root='\(?([^')]*)\)?'").unwrap());
static REGEX_LINUX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:linux16|linux)\s+(.+)").unwrap());
static REGEX_VMLINUZ_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vmlinuz-(\S+)").unwrap());

// Title cleanup: a ", with Linux 6.8.0-31-generic" tail (any single
// connective word before "Linux" is accepted), then trailing parentheticals
// and "(loader)" markers, then whitespace runs.
static REGEX_LINUX_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",? \S*? Linux.*").unwrap());
static REGEX_PAREN_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)$|\s*\(loader\)").unwrap());
static REGEX_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Operating systems found in the GRUB configuration, excluding the one
/// currently running.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OsList {
    /// Entry labels, in configuration order.
    pub entries: Vec<String>,
    /// Devices that held more entries than the per-device cap admits.
    pub overflowed_devices: Vec<String>,
}

pub fn read(path: &Path, current_kernel: &str, max_per_device: usize) -> OsList {
    match fs::read_to_string(path) {
        Ok(config) => parse(&config, current_kernel, max_per_device),
        Err(e) => {
            // Best effort: no bootloader configuration, no OS list.
            debug!("Could not read {}: {e}", path.display());
            OsList::default()
        }
    }
}

pub fn parse(config: &str, current_kernel: &str, max_per_device: usize) -> OsList {
    let mut entries = Vec::new();
    let mut per_device: Vec<(String, usize)> = Vec::new();
    let mut overflowed_devices: Vec<String> = Vec::new();

    for entry in scan_entries(config) {
        let linux_line = entry.linux.as_deref();
        if is_blacklisted(&entry.title, linux_line) {
            debug!("Skipping blacklisted entry '{}'", entry.title);
            continue;
        }

        let version = linux_line
            .and_then(extract_kernel_version)
            .unwrap_or_default();
        let title = truncate_title(&entry.title);
        let label = if version.is_empty() {
            title
        } else {
            format!("{title} {version}")
        };

        let device = entry.device.unwrap_or_default();
        let count = match per_device.iter_mut().find(|(d, _)| *d == device) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                per_device.push((device.clone(), 1));
                1
            }
        };
        if count > max_per_device {
            debug!("Device '{device}' already has {max_per_device} entries, dropping '{label}'");
            if !overflowed_devices.contains(&device) {
                overflowed_devices.push(device);
            }
            continue;
        }
        if label.contains(current_kernel) {
            debug!("'{label}' is the running system");
            continue;
        }
        debug!("Found OS entry '{label}' on device '{device}'");
        entries.push(label);
    }

    if !overflowed_devices.is_empty() {
        warn!(
            "More than {max_per_device} entries found on device(s): {}",
            overflowed_devices.join(" ")
        );
    }
    OsList {
        entries,
        overflowed_devices,
    }
}

struct RawEntry {
    title: String,
    device: Option<String>,
    linux: Option<String>,
}

/// Associates each `menuentry` header with the first `set root` and
/// `linux`/`linux16` commands of its block. Submenu nesting is not tracked;
/// nested entries are scanned like any other.
fn scan_entries(config: &str) -> Vec<RawEntry> {
    let mut entries: Vec<RawEntry> = Vec::new();
    for line in config.lines() {
        if let Some(captures) = REGEX_MENUENTRY.captures(line) {
            entries.push(RawEntry {
                title: captures[1].to_owned(),
                device: None,
                linux: None,
            });
            continue;
        }
        let Some(entry) = entries.last_mut() else {
            continue;
        };
        if let Some(captures) = REGEX_SET_ROOT.captures(line) {
            if entry.device.is_none() {
                entry.device = Some(captures[1].to_owned());
            }
        } else if let Some(captures) = REGEX_LINUX.captures(line) {
            if entry.linux.is_none() {
                entry.linux = Some(captures[1].trim_end().to_owned());
            }
        }
    }
    entries
}

/// Recovery, fallback, and memtest entries never belong in a signature,
/// and the bare "Ubuntu" entry duplicates the first submenu kernel.
fn is_blacklisted(title: &str, linux_line: Option<&str>) -> bool {
    if let Some(linux_line) = linux_line {
        if title == "Ubuntu"
            || title.contains("Fallback")
            || linux_line.contains("fallback")
            || linux_line.contains("recovery")
            || linux_line.contains("memtest")
        {
            return true;
        }
    }
    title.contains("Recovery")
}

fn extract_kernel_version(linux_line: &str) -> Option<String> {
    REGEX_VMLINUZ_VERSION
        .captures(linux_line)
        .map(|captures| captures[1].to_owned())
}

fn truncate_title(title: &str) -> String {
    let s = REGEX_LINUX_TAIL.replace(title, "");
    let s = REGEX_PAREN_TAIL.replace_all(&s, "");
    let s = REGEX_WHITESPACE_RUN.replace_all(&s, " ");
    s.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::{parse, truncate_title, OsList};

    #[test]
    fn test_truncate_title() {
        let testcases = &[
            ("Ubuntu, with Linux 5.15.0-89-generic", "Ubuntu"),
            ("Ubuntu, με Linux 5.15.0-89-generic", "Ubuntu"),
            ("Windows 7 (loader) (on /dev/sdc1)", "Windows 7"),
            ("Windows Boot Manager (on /dev/sda1)", "Windows Boot Manager"),
            ("Debian GNU/Linux, with Linux 6.1.0-18-amd64", "Debian GNU/Linux"),
            (
                "Fedora (6.8.9-300.fc40.x86_64) 40 (Workstation Edition)",
                "Fedora (6.8.9-300.fc40.x86_64) 40",
            ),
            ("Plain title", "Plain title"),
        ];
        for (input, expected) in testcases {
            assert_eq!(truncate_title(input), *expected);
        }
    }

    #[test]
    fn test_parse_dual_boot() {
        let config = include_str!("assets/grub_cfg_1");
        let list = parse(config, "5.15.0-91-generic", 2);
        assert_eq!(
            list,
            OsList {
                entries: vec![
                    "Ubuntu 5.15.0-89-generic".to_owned(),
                    "Windows Boot Manager".to_owned(),
                ],
                overflowed_devices: vec!["hd0,gpt2".to_owned()],
            }
        );
    }

    #[test]
    fn test_parse_without_current_kernel() {
        // Running a kernel GRUB does not know about: nothing is deduplicated,
        // but the per-device cap still holds.
        let config = include_str!("assets/grub_cfg_1");
        let list = parse(config, "6.5.0-1-custom", 2);
        assert_eq!(
            list.entries,
            &[
                "Ubuntu 5.15.0-91-generic",
                "Ubuntu 5.15.0-89-generic",
                "Windows Boot Manager",
            ]
        );
        assert_eq!(list.overflowed_devices, &["hd0,gpt2"]);
    }

    #[test]
    fn test_parse_legacy_config() {
        let config = include_str!("assets/grub_cfg_2");
        let list = parse(config, "2.6.35-28-generic", 2);
        assert_eq!(
            list,
            OsList {
                entries: vec![
                    "Ubuntu 2.6.35-27-generic".to_owned(),
                    "Windows 7".to_owned(),
                ],
                overflowed_devices: Vec::new(),
            }
        );
    }

    #[test]
    fn test_parse_raised_cap() {
        let config = include_str!("assets/grub_cfg_1");
        let list = parse(config, "5.15.0-91-generic", 3);
        assert_eq!(
            list.entries,
            &[
                "Ubuntu 5.15.0-89-generic",
                "Ubuntu 5.15.0-76-generic",
                "Windows Boot Manager",
            ]
        );
        assert!(list.overflowed_devices.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("", "5.15.0-91-generic", 2), OsList::default());
    }
}
