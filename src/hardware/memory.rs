use anyhow::{bail, ensure, Context, Error};
use std::fs;

/// Total system memory in MiB.
pub fn get() -> Result<u64, Error> {
    let mem_info = fs::read_to_string("/proc/meminfo").context("Failed to read meminfo")?;
    let total = parse_mem_total(&mem_info).context("Failed to parse mem info")?;
    Ok(total / 1024 / 1024)
}

fn parse_mem_total(mem_info: &str) -> Result<u64, Error> {
    for line in mem_info.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        if label == "MemTotal" {
            return parse_value(value).context("Failed to parse MemTotal");
        }
    }
    bail!("No MemTotal in meminfo")
}

fn parse_value(s: &str) -> Result<u64, Error> {
    let s = s.trim();
    let (n, kb) = match s.split_once(' ') {
        Some((n, unit)) => {
            ensure!(unit == "kB", "Unknown unit {unit}");
            (n, true)
        }
        None => (s, false),
    };
    n.parse()
        .map(|n: u64| if kb { n * 1024 } else { n })
        .context("Failed to parse value")
}

#[cfg(test)]
mod tests {
    use super::parse_mem_total;

    #[test]
    fn test_parse_mem_total() {
        let mem_info = include_str!("assets/meminfo_1");
        assert_eq!(parse_mem_total(mem_info).unwrap(), 4_056_400 * 1024);
    }

    #[test]
    fn test_parse_mem_total_missing() {
        assert!(parse_mem_total("MemFree: 123 kB\n").is_err());
    }
}
