use anyhow::{Context, Error};
use std::fs;

const OS_RELEASE: &str = "/etc/os-release";
const LSB_RELEASE: &str = "/etc/lsb-release";

/// Distribution identity, e.g. `Ubuntu 24.04 noble`. os-release is present
/// on any systemd-era distribution; lsb-release covers the rest.
pub fn get() -> Result<String, Error> {
    if let Ok(content) = fs::read_to_string(OS_RELEASE) {
        if let Some(distro) = parse_os_release(&content) {
            return Ok(distro);
        }
    }
    let content = fs::read_to_string(LSB_RELEASE).context("Failed to read lsb-release")?;
    parse_lsb_release(&content).context("No distributor information in lsb-release")
}

fn parse_os_release(content: &str) -> Option<String> {
    let mut name = None;
    let mut version = None;
    let mut codename = None;
    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"');
        match key {
            "NAME" => name = Some(value),
            "VERSION_ID" => version = Some(value),
            "VERSION_CODENAME" => codename = Some(value),
            _ => {}
        }
    }
    join_parts(name?, version, codename)
}

fn parse_lsb_release(content: &str) -> Option<String> {
    let mut id = None;
    let mut release = None;
    let mut codename = None;
    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"');
        match key {
            "DISTRIB_ID" => id = Some(value),
            "DISTRIB_RELEASE" => release = Some(value),
            "DISTRIB_CODENAME" => codename = Some(value),
            _ => {}
        }
    }
    join_parts(id?, release, codename)
}

fn join_parts(name: &str, version: Option<&str>, codename: Option<&str>) -> Option<String> {
    let mut parts = vec![name];
    parts.extend(version.filter(|s| !s.is_empty()));
    parts.extend(codename.filter(|s| !s.is_empty()));
    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::{parse_lsb_release, parse_os_release};

    #[test]
    fn test_parse_os_release() {
        let content = include_str!("assets/os_release_1");
        assert_eq!(
            parse_os_release(content).as_deref(),
            Some("Ubuntu 24.04 noble")
        );
    }

    #[test]
    fn test_parse_os_release_without_codename() {
        let content = "NAME=\"Arch Linux\"\nID=arch\nBUILD_ID=rolling\n";
        assert_eq!(parse_os_release(content).as_deref(), Some("Arch Linux"));
    }

    #[test]
    fn test_parse_os_release_empty() {
        assert_eq!(parse_os_release(""), None);
    }

    #[test]
    fn test_parse_lsb_release() {
        let content = include_str!("assets/lsb_release_1");
        assert_eq!(
            parse_lsb_release(content).as_deref(),
            Some("Ubuntu 10.10 maverick")
        );
    }
}
