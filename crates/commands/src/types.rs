//! Domain enums shared by several commands.

simctl_protocol::wire_enum! {
    /// How an antenna pattern is defined.
    pub enum AntennaPatternType {
        Custom = 0,
        Default = 1,
        None = 2,
    }
}

simctl_protocol::wire_enum! {
    /// GNSS frequency band.
    pub enum GnssBand {
        L1 = 0,
        L2 = 1,
        L5 = 2,
        E6 = 3,
        S = 4,
    }
}
