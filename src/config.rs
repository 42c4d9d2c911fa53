use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub signature: Signature,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub grub: Grub,
}

#[derive(Debug, Deserialize)]
pub struct Signature {
    /// The string standing in for any datum that could not be gathered. (Default: �)
    #[serde(default = "Signature::default_placeholder")]
    pub placeholder: String,
}

impl Signature {
    fn default_placeholder() -> String {
        "�".to_owned()
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature {
            placeholder: Self::default_placeholder(),
        }
    }
}

/// Self-assessed skill levels shown on the first signature line.
/// Free text; unset entries render as the placeholder.
#[derive(Debug, Default, Deserialize)]
pub struct Skills {
    pub linux: Option<String>,
    pub programming: Option<String>,
    pub english: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Grub {
    /// The GRUB configuration file listing boot entries.
    /// (Default: /boot/grub/grub.cfg)
    #[serde(default = "Grub::default_config_path")]
    pub config_path: PathBuf,
    /// Maximum number of boot entries reported per disk partition. (Default: 2)
    #[serde(default = "Grub::default_max_per_device")]
    pub max_per_device: usize,
}

impl Grub {
    fn default_config_path() -> PathBuf {
        PathBuf::from("/boot/grub/grub.cfg")
    }
    fn default_max_per_device() -> usize {
        2
    }
}

impl Default for Grub {
    fn default() -> Self {
        Grub {
            config_path: Self::default_config_path(),
            max_per_device: Self::default_max_per_device(),
        }
    }
}
