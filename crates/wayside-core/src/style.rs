use bitflags::bitflags;

bitflags! {
    ///
    /// ItemStyle
    ///
    /// Derived classification bits summarizing an entity's current state
    /// for device lists and map layers. Always recomputed from live state
    /// at the read site; never stored.
    ///
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ItemStyle: u32 {
        const ACTIVE        = 1;
        const INACTIVE      = 1 << 1;
        const AVAILABLE     = 1 << 2;
        const DEPLOYED      = 1 << 3;
        const SCHEDULED     = 1 << 4;
        const MAINTENANCE   = 1 << 5;
        const FAILED        = 1 << 6;
        const NO_CONTROLLER = 1 << 7;
        const OPEN          = 1 << 8;
        const CLOSED        = 1 << 9;
        const MOVING        = 1 << 10;
        const PENDING       = 1 << 11;
        const PAST          = 1 << 12;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_disjoint() {
        assert_eq!(
            (ItemStyle::ACTIVE | ItemStyle::FAILED).bits(),
            ItemStyle::ACTIVE.bits() | ItemStyle::FAILED.bits()
        );
        assert!(!ItemStyle::ACTIVE.intersects(ItemStyle::INACTIVE));
    }
}
