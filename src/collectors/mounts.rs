use crate::models::volume::{Volume, VolumeType};
use anyhow::{Context, Result};

/// Pseudo filesystems to skip — they carry no real capacity.
const SKIP_FS: &[&str] = &[
    "proc", "sysfs", "devpts", "tmpfs", "devtmpfs", "cgroup", "cgroup2",
    "pstore", "efivarfs", "securityfs", "debugfs", "tracefs", "bpf",
    "hugetlbfs", "mqueue", "fusectl", "configfs", "binfmt_misc",
    "overlay", "nsfs", "rpc_pipefs", "autofs", "squashfs",
];

const SKIP_MOUNT_PREFIX: &[&str] = &[
    "/proc", "/sys", "/dev", "/run/user", "/snap",
];

const NETWORK_FS: &[&str] = &[
    "nfs", "nfs4", "cifs", "smb3", "smbfs", "sshfs", "fuse.sshfs",
    "9p", "ceph", "glusterfs", "davfs",
];

const OPTICAL_FS: &[&str] = &["iso9660", "udf"];

/// Enumerate all ready, mounted volumes in mount-table order.
///
/// Mounts whose statvfs query fails (not ready, permission denied) are
/// skipped so callers only ever see usable volumes.
pub fn read_volumes() -> Result<Vec<Volume>> {
    let mounts = parse_mounts().context("reading mount table")?;
    let mut out = Vec::new();

    for (device, mount, fs_type) in &mounts {
        if SKIP_FS.contains(&fs_type.as_str()) { continue; }
        if SKIP_MOUNT_PREFIX.iter().any(|p| mount.starts_with(p)) { continue; }
        // Skip loop-mounted snaps
        if device.starts_with("/dev/loop") { continue; }

        if let Ok(vol) = statvfs_for(device, mount, fs_type) {
            out.push(vol);
        }
    }

    Ok(out)
}

fn parse_mounts() -> Result<Vec<(String, String, String)>> {
    let content = std::fs::read_to_string("/proc/mounts")?;
    let mut v = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 { continue; }
        v.push((fields[0].to_string(), fields[1].to_string(), fields[2].to_string()));
    }
    Ok(v)
}

fn statvfs_for(device: &str, mount: &str, fs_type: &str) -> Result<Volume> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(mount)?;

    let frsize      = stat.fragment_size() as u64;
    let total_bytes = stat.blocks()     * frsize;
    let free_bytes  = stat.blocks_free() * frsize;

    Ok(Volume {
        name:        short_device(device).to_string(),
        mount:       mount.to_string(),
        total_bytes,
        free_bytes,
        volume_type: classify(device, mount, fs_type, is_removable(device)),
    })
}

/// "sda1" from "/dev/sda1", "vg0-root" from "/dev/mapper/vg0-root".
/// Network devices ("host:/export", "//host/share") keep their full form.
fn short_device(device: &str) -> &str {
    device.trim_start_matches("/dev/").trim_start_matches("mapper/")
}

/// Map a mount onto a volume type. Pure so the rules are testable.
fn classify(device: &str, mount: &str, fs_type: &str, removable: bool) -> VolumeType {
    if NETWORK_FS.contains(&fs_type) || device.starts_with("//") || device.contains(":/") {
        VolumeType::Network
    } else if OPTICAL_FS.contains(&fs_type) {
        VolumeType::Optical
    } else if removable || mount.starts_with("/media/") || mount.starts_with("/run/media/") {
        VolumeType::Removable
    } else if device.starts_with("/dev/") {
        VolumeType::Fixed
    } else {
        VolumeType::Other
    }
}

/// Check the kernel's removable flag for the disk backing a device node.
fn is_removable(device: &str) -> bool {
    let Some(name) = device.strip_prefix("/dev/") else { return false };
    for disk in [name, base_disk(name)] {
        if let Ok(flag) = std::fs::read_to_string(format!("/sys/block/{}/removable", disk)) {
            return flag.trim() == "1";
        }
    }
    false
}

/// Partition name to disk name: "sda" from "sda1", "nvme0n1" from "nvme0n1p2".
fn base_disk(name: &str) -> &str {
    let trimmed = name.trim_end_matches(|c: char| c.is_ascii_digit());
    trimmed.strip_suffix('p').unwrap_or(trimmed)
}
