//! State and railway-zone derivation for stations.
//!
//! The station dataset only carries codes and names, so the state is
//! inferred from well-known city names and the zone from a fixed code table.

/// Label used when no city substring matches.
pub const DEFAULT_STATE: &str = "India";

/// Label used for codes missing from the zone table.
pub const UNKNOWN_ZONE: &str = "Unknown";

/// City-name fragments and the state they imply. Checked in order.
const CITY_STATES: &[(&str, &str)] = &[
    ("delhi", "Delhi"),
    ("nizamuddin", "Delhi"),
    ("anand vihar", "Delhi"),
    ("mumbai", "Maharashtra"),
    ("pune", "Maharashtra"),
    ("nagpur", "Maharashtra"),
    ("howrah", "West Bengal"),
    ("kolkata", "West Bengal"),
    ("jalpaiguri", "West Bengal"),
    ("chennai", "Tamil Nadu"),
    ("coimbatore", "Tamil Nadu"),
    ("madurai", "Tamil Nadu"),
    ("bengaluru", "Karnataka"),
    ("bangalore", "Karnataka"),
    ("yesvantpur", "Karnataka"),
    ("mysuru", "Karnataka"),
    ("secunderabad", "Telangana"),
    ("hyderabad", "Telangana"),
    ("vijayawada", "Andhra Pradesh"),
    ("visakhapatnam", "Andhra Pradesh"),
    ("patna", "Bihar"),
    ("darbhanga", "Bihar"),
    ("muzaffarpur", "Bihar"),
    ("gaya", "Bihar"),
    ("bhagalpur", "Bihar"),
    ("samastipur", "Bihar"),
    ("lucknow", "Uttar Pradesh"),
    ("kanpur", "Uttar Pradesh"),
    ("prayagraj", "Uttar Pradesh"),
    ("varanasi", "Uttar Pradesh"),
    ("gorakhpur", "Uttar Pradesh"),
    ("agra", "Uttar Pradesh"),
    ("ghaziabad", "Uttar Pradesh"),
    ("faridabad", "Haryana"),
    ("jaipur", "Rajasthan"),
    ("jodhpur", "Rajasthan"),
    ("ahmedabad", "Gujarat"),
    ("surat", "Gujarat"),
    ("bhopal", "Madhya Pradesh"),
    ("indore", "Madhya Pradesh"),
    ("amritsar", "Punjab"),
    ("chandigarh", "Chandigarh"),
    ("jammu", "Jammu and Kashmir"),
    ("guwahati", "Assam"),
    ("bhubaneswar", "Odisha"),
    ("puri", "Odisha"),
    ("ranchi", "Jharkhand"),
    ("raipur", "Chhattisgarh"),
    ("bilaspur", "Chhattisgarh"),
    ("thiruvananthapuram", "Kerala"),
    ("ernakulam", "Kerala"),
    ("madgaon", "Goa"),
    ("dehradun", "Uttarakhand"),
    ("haridwar", "Uttarakhand"),
];

/// Infer the state from a station name.
pub fn state_for(name: &str) -> &'static str {
    let name = name.to_lowercase();
    CITY_STATES
        .iter()
        .find(|(city, _)| name.contains(city))
        .map(|(_, state)| *state)
        .unwrap_or(DEFAULT_STATE)
}

/// Look up the railway zone for a station code.
pub fn zone_for(code: &str) -> &'static str {
    match code {
        "NDLS" | "DLI" | "DEE" | "DEC" | "DSA" | "DSJ" | "DAZ" | "DKZ" | "NZM" | "ANVT"
        | "GZB" | "LKO" | "BSB" | "ASR" | "CDG" | "JAT" | "DDN" | "HW" => "NR",
        "FDB" | "CNB" | "PRYJ" | "AGC" => "NCR",
        "LJN" | "GKP" => "NER",
        "BCT" | "BDTS" | "ADI" | "ST" | "INDB" => "WR",
        "CSMT" | "LTT" | "DR" | "PUNE" | "NGP" => "CR",
        "HWH" | "SDAH" | "KOAA" | "BGP" => "ER",
        "PNBE" | "RJPB" | "DBG" | "MFP" | "GAYA" | "SPJ" => "ECR",
        "NJP" | "GHY" => "NFR",
        "MAS" | "MS" | "CBE" | "MDU" | "TVC" | "ERS" => "SR",
        "SBC" | "YPR" | "MYS" => "SWR",
        "SC" | "HYB" | "BZA" => "SCR",
        "VSKP" | "BBS" | "PURI" => "ECoR",
        "JP" | "JU" => "NWR",
        "BPL" => "WCR",
        "RNC" => "SER",
        "R" | "BSP" | "DURG" => "SECR",
        "MAO" => "KR",
        _ => UNKNOWN_ZONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_city_name() {
        assert_eq!(state_for("New Delhi"), "Delhi");
        assert_eq!(state_for("Darbhanga Junction"), "Bihar");
        assert_eq!(state_for("MUMBAI CENTRAL"), "Maharashtra");
        assert_eq!(state_for("Prayagraj Junction"), "Uttar Pradesh");
    }

    #[test]
    fn state_defaults_to_country() {
        assert_eq!(state_for("Nowhere Halt"), DEFAULT_STATE);
        assert_eq!(state_for(""), DEFAULT_STATE);
    }

    #[test]
    fn zone_lookup() {
        assert_eq!(zone_for("NDLS"), "NR");
        assert_eq!(zone_for("DBG"), "ECR");
        assert_eq!(zone_for("HWH"), "ER");
        assert_eq!(zone_for("XYZ"), UNKNOWN_ZONE);
    }
}
