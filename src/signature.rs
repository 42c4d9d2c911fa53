use crate::config::Config;
use crate::hardware::HardwareInfo;
use crate::os::OsInventory;
use crate::vendors;

/// Renders the five-line signature text:
///
/// ```text
/// 1 Skills → Linux: � ┃ Programming: � ┃ English: �
/// 2 Ubuntu 24.04 noble 6.8.0-31-generic 64bit (en_US.UTF-8, GNOME), Windows Boot Manager
/// 3 2x Intel Core2 Duo CPU E6550 2.33GHz ‖ RAM 3961 MiB ‖ MSI MS-7235
/// 4 nVidia [10de:0393] {nouveau}
/// 5 enp3s0: Realtek [10ec:8168] {r8169}
/// ```
pub fn render(config: &Config, os: &OsInventory, hardware: &HardwareInfo) -> String {
    let unknown = &config.signature.placeholder;
    let text = format!(
        "{}\n{}\n{}",
        skills_line(config, unknown),
        os_line(os),
        specs_lines(hardware),
    );
    vendors::shorten(&text)
}

fn skills_line(config: &Config, unknown: &str) -> String {
    let skills = &config.skills;
    let value = |skill: &Option<String>| skill.clone().unwrap_or_else(|| unknown.to_owned());
    format!(
        "1 Skills → Linux: {} ┃ Programming: {} ┃ English: {}",
        value(&skills.linux),
        value(&skills.programming),
        value(&skills.english),
    )
}

fn os_line(os: &OsInventory) -> String {
    let mut current = format!("{} {} {}", os.distro, os.kernel_release, os.arch);
    if os.wubi {
        current.push_str(" wubi");
    }
    let others = os.others.join(", ");
    if others.is_empty() {
        format!("2 {current} ({}, {})", os.language, os.desktop)
    } else {
        format!("2 {current} ({}, {}), {others}", os.language, os.desktop)
    }
}

fn specs_lines(hardware: &HardwareInfo) -> String {
    format!(
        "3 {} ‖ RAM {} MiB ‖ {}\n4 {}\n5 {}",
        hardware.cpu, hardware.memory, hardware.motherboard, hardware.display, hardware.network,
    )
}
