use log::debug;
use std::fs;

const FSTAB: &str = "/etc/fstab";

/// A Wubi installation mounts both the root filesystem and swap from loop
/// devices listed in fstab.
pub fn is_wubi() -> bool {
    match fs::read_to_string(FSTAB) {
        Ok(fstab) => has_looped_root_and_swap(&fstab),
        Err(e) => {
            debug!("Could not read {FSTAB}: {e}");
            false
        }
    }
}

fn has_looped_root_and_swap(fstab: &str) -> bool {
    let mut root_looped = false;
    let mut swap_looped = false;
    for line in fstab.lines() {
        let line = line.trim_start();
        if line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_ascii_whitespace();
        let (Some(_device), Some(mount_point), Some(fs_type), Some(options)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let looped = options.split(',').any(|option| option == "loop");
        if mount_point == "/" && looped {
            root_looped = true;
        }
        if fs_type == "swap" && looped {
            swap_looped = true;
        }
    }
    root_looped && swap_looped
}

#[cfg(test)]
mod tests {
    use super::has_looped_root_and_swap;

    #[test]
    fn test_regular_fstab() {
        let fstab = include_str!("assets/fstab_1");
        assert!(!has_looped_root_and_swap(fstab));
    }

    #[test]
    fn test_wubi_fstab() {
        let fstab = include_str!("assets/fstab_wubi_1");
        assert!(has_looped_root_and_swap(fstab));
    }

    #[test]
    fn test_looped_root_alone_is_not_wubi() {
        let fstab = "/host/ubuntu/disks/root.disk / ext4 loop,errors=remount-ro 0 1\n\
                     UUID=3f9c01aa-70f1-4a91-b1c7-92c152db07a1 none swap sw 0 0\n";
        assert!(!has_looped_root_and_swap(fstab));
    }
}
