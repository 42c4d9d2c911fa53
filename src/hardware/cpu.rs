use anyhow::{Context, Error};
use std::fs;

pub fn get() -> Result<String, Error> {
    let cpuinfo = fs::read_to_string("/proc/cpuinfo").context("Failed to read cpuinfo")?;
    parse_cpuinfo(&cpuinfo)
}

/// The first `model name` value, prefixed with the number of logical CPUs
/// when there is more than one.
fn parse_cpuinfo(cpuinfo: &str) -> Result<String, Error> {
    let mut model = None;
    let mut count = 0usize;
    for line in cpuinfo.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        if label.trim_end() == "model name" {
            count += 1;
            if model.is_none() {
                model = Some(value.trim().to_owned());
            }
        }
    }
    let model = model.context("No model name in cpuinfo")?;
    Ok(if count > 1 {
        format!("{count}x {model}")
    } else {
        model
    })
}

#[cfg(test)]
mod tests {
    use super::parse_cpuinfo;

    #[test]
    fn test_parse_cpuinfo() {
        let cpuinfo = include_str!("assets/cpuinfo_1");
        assert_eq!(
            parse_cpuinfo(cpuinfo).unwrap(),
            "2x Intel(R) Core(TM)2 Duo CPU     E6550  @ 2.33GHz"
        );
    }

    #[test]
    fn test_parse_cpuinfo_single_core() {
        let cpuinfo = "processor\t: 0\n\
                       vendor_id\t: GenuineIntel\n\
                       model name\t: Intel(R) Atom(TM) CPU N270   @ 1.60GHz\n\
                       cache size\t: 512 KB\n";
        assert_eq!(
            parse_cpuinfo(cpuinfo).unwrap(),
            "Intel(R) Atom(TM) CPU N270   @ 1.60GHz"
        );
    }

    #[test]
    fn test_parse_cpuinfo_without_model_name() {
        // Some ARM cpuinfo layouts carry no model name line at all.
        let cpuinfo = "processor\t: 0\nBogoMIPS\t: 48.00\nCPU implementer\t: 0x41\n";
        assert!(parse_cpuinfo(cpuinfo).is_err());
    }
}
