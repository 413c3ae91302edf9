/// Broad category of a mounted volume, used to pick the drive-name color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeType {
    Fixed,
    Removable,
    Network,
    Optical,
    Other,
}

/// One mounted, ready volume with its usage metrics.
#[derive(Debug, Clone)]
pub struct Volume {
    pub name:        String,
    pub mount:       String,
    pub total_bytes: u64,
    pub free_bytes:  u64,
    pub volume_type: VolumeType,
}

impl Volume {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    pub fn use_pct(&self) -> f64 {
        if self.total_bytes == 0 { return 0.0; }
        self.used_bytes() as f64 / self.total_bytes as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vol(total: u64, free: u64) -> Volume {
        Volume {
            name:        "sda1".into(),
            mount:       "/".into(),
            total_bytes: total,
            free_bytes:  free,
            volume_type: VolumeType::Fixed,
        }
    }

    #[test]
    fn used_and_percentage() {
        let v = vol(200, 50);
        assert_eq!(v.used_bytes(), 150);
        assert_eq!(v.use_pct(), 75.0);
    }

    #[test]
    fn zero_total_has_zero_percentage() {
        let v = vol(0, 0);
        assert_eq!(v.used_bytes(), 0);
        assert_eq!(v.use_pct(), 0.0);
    }

    #[test]
    fn inconsistent_metrics_saturate() {
        // free > total can happen with stale statvfs data
        let v = vol(100, 150);
        assert_eq!(v.used_bytes(), 0);
    }
}
