//! Broadcast ephemeris parameters.

use simctl_protocol::{command, command_result, CommandFactory, Permission, RegistryError, ResultFactory};

command! {
    pub struct SetBeiDouEphDoubleParamForEachSV {
        name: "SetBeiDouEphDoubleParamForEachSV",
        documentation: "Set BeiDou ephemeris parameter value for all satellites",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            param_name / set_param_name: String = "ParamName",
            /// Zero based: index 0 is SV ID 1.
            val / set_val: Vec<f64> = "Val",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command! {
    pub struct SetGlonassEphDoubleParamForSV {
        name: "SetGlonassEphDoubleParamForSV",
        documentation: concat!(
            "Set various parameters for GLONASS\n\n",
            "  ParamName       Unit               Range          Description\n",
            "  \"TauC\"          sec                +/- 1          GLONASS time scale correction to UTC(SU) time\n",
            "  \"TauGps\"        day                +/- 1.9x10^-3  Correction to GPS time relative to GLONASS time\n",
            "  \"TauN\"          sec                +/- 1.9x10^-3  Coarse value of satellite time correction to GLONASS time\n",
            "  \"TLambda\"       sec                0..44100       Time of the first ascending node passage\n",
            "  \"Lambda\"        semicircle         +/- 1          Longitude of the first ascending node\n",
            "  \"DeltaI\"        semicircle         +/- 0.067      Correction to the mean value of inclination\n",
            "  \"Omega\"         semicircle         +/- 1          Argument of perigee\n",
            "  \"Eccentricity\"  -                  0..0.03        Eccentricity\n",
            "  \"DeltaT\"        sec/orb. period    +/- 3.6x10^3   Correction to the mean value of Draconian period\n",
            "  \"DeltaTRate\"    sec/orb. period^2  +/- 2^-8       Rate of change of Draconian period",
        ),
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            param_name / set_param_name: String = "ParamName",
            val / set_val: f64 = "Val",
        }
    }
}

command! {
    /// Superseded by [`SetNavICEphDoubleParamForSV`]; kept for older clients.
    pub struct SetNavICEphemerisDoubleParam {
        name: "SetNavICEphemerisDoubleParam",
        documentation: concat!(
            "Please note the command SetNavICEphemerisDoubleParam is deprecated since 21.3. ",
            "You may use SetNavICEphDoubleParamForSV.\n\n",
            "Set various parameters in the NavIC ephemeris\n\n",
            "  ParamName         Unit\n",
            "  \"ClockBias\"       sec\n",
            "  \"ClockDrift\"      sec/sec\n",
            "  \"ClockDriftRate\"  sec/sec^2\n",
            "  \"Crs\"             meter\n",
            "  \"Crc\"             meter\n",
            "  \"Cis\"             rad\n",
            "  \"Cic\"             rad\n",
            "  \"Cus\"             rad\n",
            "  \"Cuc\"             rad\n",
            "  \"DeltaN\"          rad/sec\n",
            "  \"M0\"              rad\n",
            "  \"Eccentricity\"    -\n",
            "  \"SqrtA\"           sqrt(meter)\n",
            "  \"BigOmega\"        rad\n",
            "  \"I0\"              rad\n",
            "  \"LittleOmega\"     rad\n",
            "  \"BigOmegaDot\"     rad/sec\n",
            "  \"Idot\"            rad/sec\n",
            "  \"Accuracy\"        meter\n",
            "  \"Adot\"            meters/sec\n",
            "  \"DeltaN0dot\"      rad/sec^2\n",
            "  \"Tgd\"             sec",
        ),
        permission: Permission::IDLE,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            param_name / set_param_name: String = "ParamName",
            val / set_val: f64 = "Val",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command! {
    pub struct SetNavICEphDoubleParamForSV {
        name: "SetNavICEphDoubleParamForSV",
        documentation: "Set various parameters in the NavIC ephemeris",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            param_name / set_param_name: String = "ParamName",
            val / set_val: f64 = "Val",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command! {
    pub struct GetNavICEphDoubleParamForSV {
        name: "GetNavICEphDoubleParamForSV",
        documentation: "Get various parameters in the NavIC ephemeris",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            param_name / set_param_name: String = "ParamName",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command_result! {
    pub struct GetNavICEphDoubleParamForSVResult {
        name: "GetNavICEphDoubleParamForSVResult",
        documentation: "Result of GetNavICEphDoubleParamForSV.",
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            param_name / set_param_name: String = "ParamName",
            val / set_val: f64 = "Val",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command! {
    pub struct SetQzssEphemerisBoolParam {
        name: "SetQzssEphemerisBoolParam",
        documentation: concat!(
            "Please note the command SetQzssEphemerisBoolParam is deprecated since 21.3. ",
            "You may use SetQzssEphBoolParamForSV.\n\n",
            "Set various boolean parameters in the QZSS ephemeris\n\n",
            "  ParamName\n",
            "  \"IscL1CaAvailable\"\n",
            "  \"IscL2CAvailable\"\n",
            "  \"IscL5I5Available\"\n",
            "  \"IscL5Q5Available\"\n",
            "  \"IscL1CPAvailable\"\n",
            "  \"IscL1CDAvailable\"",
        ),
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            param_name / set_param_name: String = "ParamName",
            val / set_val: bool = "Val",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command! {
    pub struct SetIssueOfDataQzss {
        name: "SetIssueOfDataQzss",
        documentation: "Set QZSS Issue of data, Ephemeris (IODE) and Issue of data, Clock (IODC)",
        permission: Permission::IDLE,
        fields {
            clock / set_clock: i32 = "Clock",
            ephemeris / set_ephemeris: i32 = "Ephemeris",
            override_rinex / set_override_rinex: Option<bool> = "OverrideRinex",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<SetBeiDouEphDoubleParamForEachSV>()?;
    factory.register_type::<SetGlonassEphDoubleParamForSV>()?;
    factory.register_type::<SetNavICEphemerisDoubleParam>()?;
    factory.register_type::<SetNavICEphDoubleParamForSV>()?;
    factory.register_type::<GetNavICEphDoubleParamForSV>()?;
    factory.register_type::<SetQzssEphemerisBoolParam>()?;
    factory.register_type::<SetIssueOfDataQzss>()?;
    Ok(())
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetNavICEphDoubleParamForSVResult>()?;
    Ok(())
}
