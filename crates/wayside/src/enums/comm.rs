use wayside_core::ordinal_enum;

ordinal_enum! {
    ///
    /// CommProtocol
    ///
    /// Wire protocol spoken on a communication link. Out-of-range
    /// ordinals decode to `None`; a link with an unknown protocol must
    /// not be polled as if it spoke some default.
    ///
    pub enum CommProtocol {
        NtcipA = "NTCIP Class A",
        NtcipB = "NTCIP Class B",
        NtcipC = "NTCIP Class C",
        Mndot4 = "MnDOT 170 (4-bit)",
        Mndot5 = "MnDOT 170 (5-bit)",
        SmartSensor105 = "SmartSensor 105",
        Canoga = "Canoga",
        PelcoP = "Pelco P",
        PelcoDPtz = "Pelco D PTZ",
        ManchesterPtz = "Manchester PTZ",
        DmsXml = "DMS XML",
        MsgFeed = "MSG_FEED",
    }
}

ordinal_enum! {
    ///
    /// CtrlCondition
    ///
    /// Maintenance condition of a controller. Explicit-none decode:
    /// condition drives polling and alerting, so an unknown ordinal is
    /// surfaced rather than mapped onto a live condition.
    ///
    pub enum CtrlCondition {
        Planned = "planned",
        Active = "active",
        Construction = "construction",
        Removed = "removed",
        Testing = "testing",
    }
}

ordinal_enum! {
    ///
    /// ModemState
    ///
    /// Connection state of a dial-up modem. Decode falls back to
    /// `Offline`, the benign resting state.
    ///
    pub enum ModemState {
        Offline = "offline",
        Connecting = "connecting",
        Online = "online",
        OpenError = "open error",
        ConnectError = "connect error",
    }
    fallback = Offline;
}

impl ModemState {
    /// Whether the state is an error condition.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::OpenError | Self::ConnectError)
    }
}
