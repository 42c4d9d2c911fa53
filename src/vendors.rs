use regex::Regex;
use std::sync::LazyLock;

/// Long vendor strings as they appear in DMI fields and device databases,
/// paired with the short names used in the signature. Applied in order.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("MICRO-STAR INTERNATIONAL CO.,LTD", "MSI"),
    ("MICRO-STAR INTERNATIONAL CO., LTD", "MSI"),
    ("Marvell Technology Group Ltd.", "Marvell"),
    ("Hewlett-Packard HP", "HP"),
    ("Broadcom Corporation", "Broadcom"),
    ("Silicon Integrated Systems [SiS]", "SiS"),
    ("Atheros Communications, Inc.", "Atheros"),
    ("Atheros Communications", "Atheros"),
    ("Atheros Inc.", "Atheros"),
    ("Acer, Inc.", "Acer"),
    ("ASUSTek Computer, Inc.", "ASUS"),
    ("ASUSTeK COMPUTER INC.", "ASUS"),
    ("ASUSTeK Computer", "ASUS"),
    ("ASUS INC.", "ASUS"),
    ("ATI Technologies Inc", "ATI"),
    ("Gigabyte Technology Co., Ltd.", "Gigabyte"),
    ("VIA Technologies, Inc.", "VIA"),
    ("Intel Corporation", "Intel"),
    ("Apple Inc.", "Apple"),
    ("American Megatrends", "AMI?"),
    ("Phoenix Technologies", "Phoenix"),
    ("InnoTek", "Innotek"),
    ("Realtek Semiconductor Co., Ltd.", "Realtek"),
    ("Realtek Semiconductor Corp.", "Realtek"),
    ("nVidia Corporation", "nVidia"),
    ("NVIDIA Corporation", "nVidia"),
    ("Ralink corp.", "Ralink"),
    ("Huawei Technologies Co., Ltd.", "Huawei"),
    ("NetGear, Inc.", "NetGear"),
    ("Accton Technology Corp.", "Accton"),
    ("Advanced Micro Devices [AMD] nee ATI", "AMD/ATI"),
    ("Advanced Micro Devices [AMD]", "AMD"),
    ("Integrated Graphics Controller", "Integrated Graphics"),
    ("PCI Express Fast Ethernet controller", "Ethernet"),
    ("Wireless LAN Controller", "Wireless"),
    ("http://www.", ""),
    ("(R)", ""),
    ("(TM)", ""),
    ("(r)", ""),
    ("(tm)", ""),
    ("  @ ", " "),
];

static REGEX_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(" {2,}").unwrap());

/// Applies the substitution table over rendered text, then collapses the
/// space runs the removals leave behind.
pub fn shorten(text: &str) -> String {
    let mut s = text.to_owned();
    for (long, short) in SUBSTITUTIONS {
        if s.contains(long) {
            s = s.replace(long, short);
        }
    }
    REGEX_SPACE_RUN.replace_all(&s, " ").into_owned()
}

/// Short name for a PCI vendor ID (lowercase hex, no prefix).
pub fn pci_vendor_name(id: &str) -> Option<&'static str> {
    Some(match id {
        "8086" => "Intel",
        "10de" => "nVidia",
        "1002" => "AMD/ATI",
        "1022" => "AMD",
        "10ec" => "Realtek",
        "168c" => "Atheros",
        "14e4" => "Broadcom",
        "1106" => "VIA",
        "1039" => "SiS",
        "11ab" => "Marvell",
        "1814" => "Ralink",
        "80ee" => "Innotek",
        "15ad" => "VMware",
        "1af4" => "Red Hat",
        _ => return None,
    })
}

/// Short name for a USB vendor ID. The USB ID space is unrelated to the
/// PCI one, so the tables are kept apart.
pub fn usb_vendor_name(id: &str) -> Option<&'static str> {
    Some(match id {
        "0cf3" => "Atheros",
        "0bda" => "Realtek",
        "148f" => "Ralink",
        "0846" => "NetGear",
        "12d1" => "Huawei",
        "8087" => "Intel",
        "0b05" => "ASUS",
        "2001" => "D-Link",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::{pci_vendor_name, shorten, usb_vendor_name};

    #[test]
    fn test_shorten() {
        let testcases = &[
            (
                "Intel(R) Core(TM)2 Duo CPU     E6550  @ 2.33GHz",
                "Intel Core2 Duo CPU E6550 2.33GHz",
            ),
            (
                "MICRO-STAR INTERNATIONAL CO.,LTD MS-7235",
                "MSI MS-7235",
            ),
            (
                "Realtek Semiconductor Co., Ltd. RTL-8139/8139C/8139C+",
                "Realtek RTL-8139/8139C/8139C+",
            ),
            ("American Megatrends Inc.", "AMI? Inc."),
            ("no substitutions here", "no substitutions here"),
        ];
        for (input, expected) in testcases {
            assert_eq!(shorten(input), *expected);
        }
    }

    #[test]
    fn test_vendor_ids() {
        assert_eq!(pci_vendor_name("10ec"), Some("Realtek"));
        assert_eq!(pci_vendor_name("ffff"), None);
        assert_eq!(usb_vendor_name("0cf3"), Some("Atheros"));
        assert_eq!(usb_vendor_name("ffff"), None);
    }
}
