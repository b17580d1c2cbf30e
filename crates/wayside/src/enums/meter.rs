use wayside_core::ordinal_enum;

ordinal_enum! {
    ///
    /// RampMeterType
    ///
    /// Lane configuration of a ramp meter. Explicit-none decode: meter
    /// geometry drives release timing, so an unknown ordinal is surfaced.
    ///
    pub enum RampMeterType {
        Single = "one lane",
        DualAlternate = "two lane, alternate release",
        DualSimultaneous = "two lane, simultaneous release",
    }
}

ordinal_enum! {
    ///
    /// RampMeterQueue
    ///
    /// Queue state reported by the upstream queue detector. Decode falls
    /// back to `Unknown`.
    ///
    pub enum RampMeterQueue {
        Unknown = "unknown",
        Empty = "empty",
        Exists = "queue exists",
        Full = "queue full",
    }
    fallback = Unknown;
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayside_core::ordinal::Ordinal;

    #[test]
    fn roundtrip() {
        for t in RampMeterType::SYMBOLS {
            assert_eq!(RampMeterType::from_ordinal(t.ordinal()), Some(*t));
        }
        for q in RampMeterQueue::SYMBOLS {
            assert_eq!(RampMeterQueue::from_ordinal(q.ordinal()), *q);
        }
    }

    #[test]
    fn policies() {
        assert_eq!(RampMeterType::from_ordinal(3), None);
        assert_eq!(RampMeterQueue::from_ordinal(4), RampMeterQueue::Unknown);
    }
}
