//! Static registry of OpenTherm data identifiers
//!
//! The table is a fixed, read-only mapping used only for reporting;
//! the semantic decoding of the values themselves is out of scope.

/// One registry entry naming an OpenTherm data identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataIdEntry {
    pub id: u8,
    pub mnemonic: &'static str,
    pub description: &'static str,
}

/// Sentinel returned for identifiers absent from the table.
pub const UNKNOWN_DATA_ID: DataIdEntry = DataIdEntry {
    id: 0,
    mnemonic: "<unknown>",
    description: "<unknown>",
};

const DATA_IDS: &[DataIdEntry] = &[
    DataIdEntry { id: 0, mnemonic: "Status", description: "Master and Slave Status flags." },
    DataIdEntry { id: 1, mnemonic: "TSet", description: "Control setpoint ie CH water temperature setpoint (C)" },
    DataIdEntry { id: 2, mnemonic: "M-Config / M-MemberIDcode", description: "Master Configuration Flags / Master MemberID Code" },
    DataIdEntry { id: 3, mnemonic: "S-Config / S-MemberIDcode", description: "Slave Configuration Flags / Slave MemberID Code" },
    DataIdEntry { id: 4, mnemonic: "Command", description: "Remote Command" },
    DataIdEntry { id: 5, mnemonic: "ASF-flags / OEM-fault-code", description: "Application-specific fault flags and OEM fault code" },
    DataIdEntry { id: 6, mnemonic: "RBP-flags", description: "Remote boiler parameter transfer-enable & read/write flags" },
    DataIdEntry { id: 7, mnemonic: "Cooling-control", description: "Cooling control signal (%)" },
    DataIdEntry { id: 8, mnemonic: "TsetCH2", description: "Control setpoint for 2e CH circuit (C)" },
    DataIdEntry { id: 9, mnemonic: "TrOverride", description: "Remote override room setpoint" },
    DataIdEntry { id: 10, mnemonic: "TSP", description: "Number of Transparent-Slave-Parameters supported by slave" },
    DataIdEntry { id: 11, mnemonic: "TSP-index / TSP-value", description: "Index number / Value of referred-to transparent slave parameter." },
    DataIdEntry { id: 12, mnemonic: "FHB-size", description: "Size of Fault-History-Buffer supported by slave" },
    DataIdEntry { id: 13, mnemonic: "FHB-index / FHB-value", description: "Index number / Value of referred-to fault-history buffer entry." },
    DataIdEntry { id: 14, mnemonic: "Max-rel-mod-level-setting", description: "Maximum relative modulation level setting (%)" },
    DataIdEntry { id: 15, mnemonic: "Max-Capacity / Min-Mod-Level", description: "Maximum boiler capacity (kW) / Minimum boiler modulation level (%)" },
    DataIdEntry { id: 16, mnemonic: "TrSet", description: "Room Setpoint (C)" },
    DataIdEntry { id: 17, mnemonic: "Rel.-mod-level", description: "Relative Modulation Level (%)" },
    DataIdEntry { id: 18, mnemonic: "CH-pressure", description: "Water pressure in CH circuit (bar)" },
    DataIdEntry { id: 19, mnemonic: "DHW-flow-rate", description: "Water flow rate in DHW circuit. (litres/minute)" },
    DataIdEntry { id: 20, mnemonic: "Day-Time", description: "Day of Week and Time of Day" },
    DataIdEntry { id: 21, mnemonic: "Date", description: "Calendar date" },
    DataIdEntry { id: 22, mnemonic: "Year", description: "Calendar year" },
    DataIdEntry { id: 23, mnemonic: "TrSetCH2", description: "Room Setpoint for 2nd CH circuit (C)" },
    DataIdEntry { id: 24, mnemonic: "Tr", description: "Room temperature (C)" },
    DataIdEntry { id: 25, mnemonic: "Tboiler", description: "Boiler flow water temperature (C)" },
    DataIdEntry { id: 26, mnemonic: "Tdhw", description: "DHW temperature (C)" },
    DataIdEntry { id: 27, mnemonic: "Toutside", description: "Outside temperature (C)" },
    DataIdEntry { id: 28, mnemonic: "Tret", description: "Return water temperature (C)" },
    DataIdEntry { id: 29, mnemonic: "Tstorage", description: "Solar storage temperature (C)" },
    DataIdEntry { id: 30, mnemonic: "Tcollector", description: "Solar collector temperature (C)" },
    DataIdEntry { id: 31, mnemonic: "TflowCH2", description: "Flow water temperature CH2 circuit (C)" },
    DataIdEntry { id: 32, mnemonic: "Tdhw2", description: "Domestic hot water temperature 2 (C)" },
    DataIdEntry { id: 33, mnemonic: "Texhaust", description: "Boiler exhaust temperature (C)" },
    DataIdEntry { id: 48, mnemonic: "TdhwSet-UB / TdhwSet-LB", description: "DHW setpoint upper & lower bounds for adjustment (C)" },
    DataIdEntry { id: 49, mnemonic: "MaxTSet-UB / MaxTSet-LB", description: "Max CH water setpoint upper & lower bounds for adjustment (C)" },
    DataIdEntry { id: 50, mnemonic: "Hcratio-UB / Hcratio-LB", description: "OTC heat curve ratio upper & lower bounds for adjustment" },
    DataIdEntry { id: 56, mnemonic: "TdhwSet", description: "DHW setpoint (C) (Remote parameter 1)" },
    DataIdEntry { id: 57, mnemonic: "MaxTSet", description: "Max CH water setpoint (C) (Remote parameters 2)" },
    DataIdEntry { id: 58, mnemonic: "Hcratio", description: "OTC heat curve ratio (C) (Remote parameter 3)" },
    DataIdEntry { id: 100, mnemonic: "Remote override function", description: "Function of manual and program changes in master and remote room setpoint." },
    DataIdEntry { id: 115, mnemonic: "OEM diagnostic code", description: "OEM-specific diagnostic/service code" },
    DataIdEntry { id: 116, mnemonic: "Burner starts", description: "Number of starts burner" },
    DataIdEntry { id: 117, mnemonic: "CH pump starts", description: "Number of starts CH pump" },
    DataIdEntry { id: 118, mnemonic: "DHW pump/valve starts", description: "Number of starts DHW pump/valve" },
    DataIdEntry { id: 119, mnemonic: "DHW burner starts", description: "Number of starts burner during DHW mode" },
    DataIdEntry { id: 120, mnemonic: "Burner operation hours", description: "Number of hours that burner is in operation (i.e. flame on)" },
    DataIdEntry { id: 121, mnemonic: "CH pump operation hours", description: "Number of hours that CH pump has been running" },
    DataIdEntry { id: 122, mnemonic: "DHW pump/valve operation hours", description: "Number of hours that DHW pump has been running or DHW valve has been opened" },
    DataIdEntry { id: 123, mnemonic: "DHW burner operation hours", description: "Number of hours that burner is in operation during DHW mode" },
    DataIdEntry { id: 124, mnemonic: "OpenTherm version Master", description: "The implemented version of the OpenTherm Protocol Specification in the master." },
    DataIdEntry { id: 125, mnemonic: "OpenTherm version Slave", description: "The implemented version of the OpenTherm Protocol Specification in the slave." },
    DataIdEntry { id: 126, mnemonic: "Master-version", description: "Master product version number and type" },
    DataIdEntry { id: 127, mnemonic: "Slave-version", description: "Slave product version number and type" },
    DataIdEntry { id: 128, mnemonic: "SmartPower", description: "Smart power level change." },
];

/// Look up the registry entry for a data identifier.
///
/// Total over the whole identifier space: unknown identifiers resolve
/// to [`UNKNOWN_DATA_ID`] rather than failing.
pub fn lookup_identifier(id: u8) -> &'static DataIdEntry {
    // The table is sorted by id
    match DATA_IDS.binary_search_by_key(&id, |entry| entry.id) {
        Ok(index) => &DATA_IDS[index],
        Err(_) => &UNKNOWN_DATA_ID,
    }
}
