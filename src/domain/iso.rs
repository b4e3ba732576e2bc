//! ISO 4217 reference table
//!
//! Static input: alphabetic code, numeric code and minor-unit exponent for
//! every active currency. Precious metals and testing codes carry exponent 0.

/// One ISO 4217 entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCurrency {
    pub code: &'static str,
    pub numeric: u16,
    pub minor_units: u32,
}

const fn iso(code: &'static str, numeric: u16, minor_units: u32) -> IsoCurrency {
    IsoCurrency {
        code,
        numeric,
        minor_units,
    }
}

/// Full ISO 4217 currency set
pub static ISO_4217: &[IsoCurrency] = &[
    iso("AED", 784, 2),
    iso("AFN", 971, 2),
    iso("ALL", 8, 2),
    iso("AMD", 51, 2),
    iso("ANG", 532, 2),
    iso("AOA", 973, 2),
    iso("ARS", 32, 2),
    iso("AUD", 36, 2),
    iso("AWG", 533, 2),
    iso("AZN", 944, 2),
    iso("BAM", 977, 2),
    iso("BBD", 52, 2),
    iso("BDT", 50, 2),
    iso("BGN", 975, 2),
    iso("BHD", 48, 3),
    iso("BIF", 108, 0),
    iso("BMD", 60, 2),
    iso("BND", 96, 2),
    iso("BOB", 68, 2),
    iso("BOV", 984, 2),
    iso("BRL", 986, 2),
    iso("BSD", 44, 2),
    iso("BTN", 64, 2),
    iso("BWP", 72, 2),
    iso("BYN", 933, 2),
    iso("BZD", 84, 2),
    iso("CAD", 124, 2),
    iso("CDF", 976, 2),
    iso("CHE", 947, 2),
    iso("CHF", 756, 2),
    iso("CHW", 948, 2),
    iso("CLF", 990, 4),
    iso("CLP", 152, 0),
    iso("CNY", 156, 2),
    iso("COP", 170, 2),
    iso("COU", 970, 2),
    iso("CRC", 188, 2),
    iso("CUC", 931, 2),
    iso("CUP", 192, 2),
    iso("CVE", 132, 2),
    iso("CZK", 203, 2),
    iso("DJF", 262, 0),
    iso("DKK", 208, 2),
    iso("DOP", 214, 2),
    iso("DZD", 12, 2),
    iso("EGP", 818, 2),
    iso("ERN", 232, 2),
    iso("ETB", 230, 2),
    iso("EUR", 978, 2),
    iso("FJD", 242, 2),
    iso("FKP", 238, 2),
    iso("GBP", 826, 2),
    iso("GEL", 981, 2),
    iso("GHS", 936, 2),
    iso("GIP", 292, 2),
    iso("GMD", 270, 2),
    iso("GNF", 324, 0),
    iso("GTQ", 320, 2),
    iso("GYD", 328, 2),
    iso("HKD", 344, 2),
    iso("HNL", 340, 2),
    iso("HTG", 332, 2),
    iso("HUF", 348, 2),
    iso("IDR", 360, 2),
    iso("ILS", 376, 2),
    iso("INR", 356, 2),
    iso("IQD", 368, 3),
    iso("IRR", 364, 2),
    iso("ISK", 352, 0),
    iso("JMD", 388, 2),
    iso("JOD", 400, 3),
    iso("JPY", 392, 0),
    iso("KES", 404, 2),
    iso("KGS", 417, 2),
    iso("KHR", 116, 2),
    iso("KMF", 174, 0),
    iso("KPW", 408, 2),
    iso("KRW", 410, 0),
    iso("KWD", 414, 3),
    iso("KYD", 136, 2),
    iso("KZT", 398, 2),
    iso("LAK", 418, 2),
    iso("LBP", 422, 2),
    iso("LKR", 144, 2),
    iso("LRD", 430, 2),
    iso("LSL", 426, 2),
    iso("LYD", 434, 3),
    iso("MAD", 504, 2),
    iso("MDL", 498, 2),
    iso("MGA", 969, 2),
    iso("MKD", 807, 2),
    iso("MMK", 104, 2),
    iso("MNT", 496, 2),
    iso("MOP", 446, 2),
    iso("MRU", 929, 2),
    iso("MUR", 480, 2),
    iso("MVR", 462, 2),
    iso("MWK", 454, 2),
    iso("MXN", 484, 2),
    iso("MXV", 979, 2),
    iso("MYR", 458, 2),
    iso("MZN", 943, 2),
    iso("NAD", 516, 2),
    iso("NGN", 566, 2),
    iso("NIO", 558, 2),
    iso("NOK", 578, 2),
    iso("NPR", 524, 2),
    iso("NZD", 554, 2),
    iso("OMR", 512, 3),
    iso("PAB", 590, 2),
    iso("PEN", 604, 2),
    iso("PGK", 598, 2),
    iso("PHP", 608, 2),
    iso("PKR", 586, 2),
    iso("PLN", 985, 2),
    iso("PYG", 600, 0),
    iso("QAR", 634, 2),
    iso("RON", 946, 2),
    iso("RSD", 941, 2),
    iso("RUB", 643, 2),
    iso("RWF", 646, 0),
    iso("SAR", 682, 2),
    iso("SBD", 90, 2),
    iso("SCR", 690, 2),
    iso("SDG", 938, 2),
    iso("SEK", 752, 2),
    iso("SGD", 702, 2),
    iso("SHP", 654, 2),
    iso("SLE", 925, 2),
    iso("SLL", 694, 2),
    iso("SOS", 706, 2),
    iso("SRD", 968, 2),
    iso("SSP", 728, 2),
    iso("STN", 930, 2),
    iso("SVC", 222, 2),
    iso("SYP", 760, 2),
    iso("SZL", 748, 2),
    iso("THB", 764, 2),
    iso("TJS", 972, 2),
    iso("TMT", 934, 2),
    iso("TND", 788, 3),
    iso("TOP", 776, 2),
    iso("TRY", 949, 2),
    iso("TTD", 780, 2),
    iso("TWD", 901, 2),
    iso("TZS", 834, 2),
    iso("UAH", 980, 2),
    iso("UGX", 800, 0),
    iso("USD", 840, 2),
    iso("USN", 997, 2),
    iso("UYI", 940, 0),
    iso("UYU", 858, 2),
    iso("UYW", 927, 4),
    iso("UZS", 860, 2),
    iso("VED", 926, 2),
    iso("VES", 928, 2),
    iso("VND", 704, 0),
    iso("VUV", 548, 0),
    iso("WST", 882, 2),
    iso("XAF", 950, 0),
    iso("XAG", 961, 0),
    iso("XAU", 959, 0),
    iso("XBA", 955, 0),
    iso("XBB", 956, 0),
    iso("XBC", 957, 0),
    iso("XBD", 958, 0),
    iso("XCD", 951, 2),
    iso("XDR", 960, 0),
    iso("XOF", 952, 0),
    iso("XPD", 964, 0),
    iso("XPF", 953, 0),
    iso("XPT", 962, 0),
    iso("XSU", 994, 0),
    iso("XTS", 963, 0),
    iso("XUA", 965, 0),
    iso("XXX", 999, 0),
    iso("YER", 886, 2),
    iso("ZAR", 710, 2),
    iso("ZMW", 967, 2),
    iso("ZWG", 924, 2),
    iso("ZWL", 932, 2),
];

/// Find the reference entry for an alphabetic code
pub fn find(code: &str) -> Option<&'static IsoCurrency> {
    ISO_4217.iter().find(|entry| entry.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reference_codes_are_unique() {
        let codes: HashSet<_> = ISO_4217.iter().map(|e| e.code).collect();
        let numerics: HashSet<_> = ISO_4217.iter().map(|e| e.numeric).collect();

        assert_eq!(codes.len(), ISO_4217.len());
        assert_eq!(numerics.len(), ISO_4217.len());
    }

    #[test]
    fn test_find_exponents() {
        assert_eq!(find("USD").map(|e| e.minor_units), Some(2));
        assert_eq!(find("JPY").map(|e| e.minor_units), Some(0));
        assert_eq!(find("KWD").map(|e| e.minor_units), Some(3));
        assert_eq!(find("CLF").map(|e| e.minor_units), Some(4));
        assert!(find("ZZZ").is_none());
    }
}
