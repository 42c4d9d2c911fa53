use anyhow::{Context, Error};
use nix::sys::utsname::uname;

pub struct Kernel {
    pub release: String,
    pub machine: String,
}

pub fn get() -> Result<Kernel, Error> {
    let uts = uname().context("Failed to call uname")?;
    Ok(Kernel {
        release: uts.release().to_string_lossy().into_owned(),
        machine: uts.machine().to_string_lossy().into_owned(),
    })
}

/// Maps the `uname` machine field to the wordsize label used in the
/// signature.
pub fn arch_label(machine: &str, unknown: &str) -> String {
    match machine {
        "x86_64" | "aarch64" | "riscv64" | "ppc64le" => "64bit".to_owned(),
        "i386" | "i486" | "i586" | "i686" | "armv6l" | "armv7l" => "32bit".to_owned(),
        _ => format!("{unknown}bit"),
    }
}

#[cfg(test)]
mod tests {
    use super::arch_label;

    #[test]
    fn test_arch_label() {
        let testcases = &[
            ("x86_64", "64bit"),
            ("aarch64", "64bit"),
            ("i686", "32bit"),
            ("armv7l", "32bit"),
            ("mips", "�bit"),
        ];
        for (machine, expected) in testcases {
            assert_eq!(arch_label(machine, "�"), *expected);
        }
    }
}
