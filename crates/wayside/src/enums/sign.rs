use wayside_core::ordinal_enum;

ordinal_enum! {
    ///
    /// SignMsgPriority
    ///
    /// Run-time priority of a sign message; higher ordinals supersede
    /// lower ones when messages compete for a sign. Decode falls back to
    /// `Invalid`, the most benign symbol: an uninterpretable priority
    /// must lose every arbitration.
    ///
    pub enum SignMsgPriority {
        Invalid = "invalid",
        Blank = "blank",
        PrefixPage = "prefix page",
        Psa = "PSA",
        TravelTime = "travel time",
        SpeedLimit = "speed limit",
        Scheduled = "scheduled",
        OtherSystem = "other system",
        Alert = "alert",
        Operator = "operator",
        IncidentLow = "incident low",
        IncidentMed = "incident medium",
        IncidentHigh = "incident high",
        Awl = "automated warning",
        Override = "override",
    }
    fallback = Invalid;
}

impl SignMsgPriority {
    /// Whether a message at this priority supersedes one at `other`.
    #[must_use]
    pub fn supersedes(self, other: Self) -> bool {
        use wayside_core::ordinal::Ordinal;

        self.ordinal() > other.ordinal()
    }
}
