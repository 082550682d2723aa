//! Identifier for controls tracked by a [`ControlValueStore`](crate::ControlValueStore).

/// Opaque, copyable handle for a form control.
///
/// The value carries no meaning inside this crate; it is only a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ControlId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for ControlId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<ControlId> for u64 {
    #[inline]
    fn from(id: ControlId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_id_round_trip() {
        assert_eq!(ControlId::from_raw(42).as_raw(), 42);
        assert_eq!(u64::from(ControlId::from(7u32)), 7);
    }

    #[test]
    fn control_id_hash() {
        use std::collections::HashSet;

        let set: HashSet<_> = [1u64, 2, 1].into_iter().map(ControlId::from).collect();
        assert_eq!(set.len(), 2);
    }
}
