//! Identity types for showcase features and mounted modules

use std::fmt;

/// Feature identity - stable key of a catalog entry
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(&'static str);

impl FeatureId {
    #[inline]
    pub const fn new(id: &'static str) -> Self {
        FeatureId(id)
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feature({})", self.0)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Mount identity - one per module instantiation, never reused
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MountId(pub u64);

impl MountId {
    pub const ZERO: MountId = MountId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        MountId(id)
    }

    /// The mount that follows this one
    #[inline]
    pub fn next(self) -> Self {
        MountId(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mount({})", self.0)
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_id_display() {
        let id = FeatureId::new("heatmap");
        assert_eq!(id.to_string(), "heatmap");
        assert_eq!(format!("{:?}", id), "Feature(heatmap)");
    }

    #[test]
    fn test_mount_id_sequence() {
        let first = MountId::ZERO.next();
        assert_eq!(first, MountId::new(1));
        assert!(first.next() > first);
    }
}
