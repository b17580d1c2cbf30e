use wayside_core::ordinal_enum;

ordinal_enum! {
    ///
    /// AlertPeriod
    ///
    /// Phase of an alert deployment relative to its event window.
    /// Out-of-range ordinals decode to `None`: a record pointing at an
    /// unknown period must surface as absent, not get silently rescoped.
    ///
    pub enum AlertPeriod {
        Before = "before",
        During = "during",
        After = "after",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayside_core::ordinal::Ordinal;

    #[test]
    fn roundtrip() {
        for p in AlertPeriod::SYMBOLS {
            assert_eq!(AlertPeriod::from_ordinal(p.ordinal()), Some(*p));
        }
    }

    #[test]
    fn decodes_during_and_refuses_out_of_range() {
        assert_eq!(AlertPeriod::from_ordinal(1), Some(AlertPeriod::During));
        assert_eq!(AlertPeriod::from_ordinal(5), None);
    }
}
