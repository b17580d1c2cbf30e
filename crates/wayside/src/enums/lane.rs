use wayside_core::ordinal_enum;

ordinal_enum! {
    ///
    /// Direction
    ///
    /// Compass direction of travel. Decode falls back to `Unknown`.
    ///
    pub enum Direction {
        Unknown = "unknown",
        North = "northbound",
        South = "southbound",
        East = "eastbound",
        West = "westbound",
        NorthSouth = "north-south",
        EastWest = "east-west",
    }
    fallback = Unknown;
}

ordinal_enum! {
    ///
    /// LaneType
    ///
    /// Classification of the lane a detector samples. Decode falls back
    /// to `None`, the benign first symbol.
    ///
    pub enum LaneType {
        None = "none",
        Mainline = "mainline",
        Auxiliary = "auxiliary",
        CdLane = "CD lane",
        Reversible = "reversible",
        Merge = "merge",
        Queue = "queue",
        Exit = "exit",
        Bypass = "bypass",
        Passage = "passage",
        Velocity = "velocity",
        Omnibus = "omnibus",
        Green = "green",
        WrongWay = "wrong way",
        Hov = "HOV",
        Hot = "HOT",
        Shoulder = "shoulder",
        Parking = "parking",
    }
    fallback = None;
}

ordinal_enum! {
    ///
    /// LaneUseIndication
    ///
    /// Indication displayed over a lane by a lane-use control signal.
    /// Explicit-none decode: an unknown ordinal must never be rendered
    /// as some other indication.
    ///
    pub enum LaneUseIndication {
        Dark = "dark",
        LaneOpen = "lane open",
        UseCaution = "use caution",
        LaneClosedAhead = "lane closed ahead",
        LaneClosed = "lane closed",
        MergeRight = "merge right",
        MergeLeft = "merge left",
        MergeBoth = "merge both",
        MustExitRight = "must exit right",
        MustExitLeft = "must exit left",
        AdvisorySpeed = "advisory speed",
        SpeedLimit = "speed limit",
        LowVisibility = "low visibility",
        HovHot = "HOV / HOT",
    }
}
