use super::color::{type_color, usage_color};
use super::paint::Paint;
use crate::config::UsageBand;
use crate::models::volume::Volume;
use crate::util::human::{exact_kb, fmt_bytes};

/// How the size columns are rendered, decided once from the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayMode {
    /// Raw kilobyte integers instead of human-scaled units.
    pub exact: bool,
}

/// Render the header plus one row per volume, in enumeration order.
pub fn render(volumes: &[Volume], mode: DisplayMode, bands: &[UsageBand], paint: &dyn Paint) -> String {
    let mut out = String::new();
    out.push_str(&header(mode));
    out.push('\n');
    for v in volumes {
        out.push_str(&row(v, mode, bands, paint));
        out.push('\n');
    }
    out
}

fn header(mode: DisplayMode) -> String {
    let (total, used, free) = if mode.exact {
        ("Total (KB)", "Used (KB)", "Free (KB)")
    } else {
        ("Total", "Used", "Free")
    };
    format!("{:<16}{:>12}{:>12}{:>12}  {:>5}  {}", "Drive", total, used, free, "Use%", "Mount")
}

fn row(v: &Volume, mode: DisplayMode, bands: &[UsageBand], paint: &dyn Paint) -> String {
    let size = |bytes: u64| {
        if mode.exact { exact_kb(bytes).to_string() } else { fmt_bytes(bytes) }
    };

    let name = paint.paint(type_color(v.volume_type), &format!("{:<16}", v.name));

    let pct = v.use_pct();
    // "NN%" right-justified to 4 visible columns, then padded out to 5;
    // the pad stays outside the color wrap so escapes don't skew it.
    let pct_cell = format!("{:>3}%", pct.floor() as u64);
    let pad = " ".repeat(5usize.saturating_sub(pct_cell.len()));
    let pct_field = format!("{}{}", pad, paint.paint(usage_color(bands, pct), &pct_cell));

    format!(
        "{}{:>12}{:>12}{:>12}  {}  {}",
        name,
        size(v.total_bytes),
        size(v.used_bytes()),
        size(v.free_bytes),
        pct_field,
        display_mount(&v.mount),
    )
}

/// Strip the trailing path separator for display; a bare root keeps it.
fn display_mount(mount: &str) -> &str {
    let stripped = mount.trim_end_matches(['/', '\\']);
    if stripped.is_empty() { mount } else { stripped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::volume::VolumeType;
    use crate::ui::paint::Plain;

    const GIB: u64 = 1_073_741_824;

    fn vol(name: &str, mount: &str, total: u64, free: u64, t: VolumeType) -> Volume {
        Volume {
            name:        name.into(),
            mount:       mount.into(),
            total_bytes: total,
            free_bytes:  free,
            volume_type: t,
        }
    }

    #[test]
    fn header_columns_human_mode() {
        let h = header(DisplayMode { exact: false });
        assert_eq!(&h[0..16], "Drive           ");
        assert!(h.ends_with(" Use%  Mount"));
        assert!(!h.contains("(KB)"));
    }

    #[test]
    fn header_labels_exact_mode() {
        let h = header(DisplayMode { exact: true });
        assert!(h.contains("Total (KB)"));
        assert!(h.contains("Used (KB)"));
        assert!(h.contains("Free (KB)"));
    }

    #[test]
    fn row_human_mode_end_to_end() {
        let v = vol("C:", "/", 100 * GIB, 25 * GIB, VolumeType::Fixed);
        let r = row(&v, DisplayMode::default(), &UsageBand::defaults(), &Plain);
        assert!(r.starts_with("C:              "));
        assert!(r.contains("100 GB"));
        assert!(r.contains("75 GB"));
        assert!(r.contains("25 GB"));
        assert!(r.contains("  75%"));
        assert!(r.ends_with("  /"));
    }

    #[test]
    fn row_exact_mode_uses_kilobyte_integers() {
        let v = vol("sda1", "/data", 10_485_760, 5_242_880, VolumeType::Fixed);
        let r = row(&v, DisplayMode { exact: true }, &UsageBand::defaults(), &Plain);
        assert!(r.contains("10240"));
        assert!(r.contains("5120"));
        assert!(!r.contains("MB"));
    }

    #[test]
    fn percentage_field_is_five_columns() {
        let bands = UsageBand::defaults();
        let low  = vol("a", "/a", 100, 95, VolumeType::Fixed);  // 5%
        let full = vol("b", "/b", 100, 0, VolumeType::Fixed);   // 100%
        assert!(row(&low, DisplayMode::default(), &bands, &Plain).contains("    5%"));
        assert!(row(&full, DisplayMode::default(), &bands, &Plain).contains("  100%"));
    }

    #[test]
    fn trailing_mount_separator_stripped() {
        assert_eq!(display_mount("/mnt/data/"), "/mnt/data");
        assert_eq!(display_mount("C:\\"), "C:");
        assert_eq!(display_mount("/"), "/");
    }

    #[test]
    fn rows_keep_enumeration_order() {
        let vols = vec![
            vol("sdb1", "/zeta", 100, 50, VolumeType::Fixed),
            vol("sda1", "/alpha", 100, 50, VolumeType::Fixed),
        ];
        let out = render(&vols, DisplayMode::default(), &UsageBand::defaults(), &Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("/zeta"));
        assert!(lines[2].ends_with("/alpha"));
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let v = vol("net", "/mnt/nfs/", 200, 50, VolumeType::Network);
        let r = row(&v, DisplayMode::default(), &UsageBand::defaults(), &Plain);
        assert!(!r.contains('\x1b'));
        assert!(r.ends_with("  /mnt/nfs"));
    }
}
