use wayside_core::ordinal_enum;

ordinal_enum! {
    ///
    /// GateArmState
    ///
    /// Operational state of a gate arm. Decode falls back to `Unknown`;
    /// a gate whose persisted state cannot be interpreted must be treated
    /// as unverified, never as open or closed.
    ///
    pub enum GateArmState {
        Unknown = "unknown",
        Fault = "fault",
        Opening = "opening",
        Open = "open",
        WarnClose = "warn close",
        Closing = "closing",
        Closed = "closed",
        Timeout = "timeout",
    }
    fallback = Unknown;
}

impl GateArmState {
    /// Whether the arm is in motion.
    #[must_use]
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    #[must_use]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::Fault | Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayside_core::ordinal::Ordinal;

    #[test]
    fn roundtrip_and_fallback() {
        for s in GateArmState::SYMBOLS {
            assert_eq!(GateArmState::from_ordinal(s.ordinal()), *s);
        }
        assert_eq!(GateArmState::from_ordinal(8), GateArmState::Unknown);
    }

    #[test]
    fn motion_and_fault_classification() {
        assert!(GateArmState::Opening.is_moving());
        assert!(!GateArmState::Open.is_moving());
        assert!(GateArmState::Timeout.is_fault());
        assert!(!GateArmState::Closed.is_fault());
    }
}
