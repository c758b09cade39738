/*
[INPUT]:  Nigerian bank sort codes published by Moneywave
[OUTPUT]: Bank code constants passed through verbatim
[POS]:    Data layer - bank code constants
[UPDATE]: When the published bank list changes
*/

// Codes are forwarded as-is; the API is the authority on which are valid.

pub const ACCESS_BANK: &str = "044";
pub const CITIBANK: &str = "023";
pub const DIAMOND_BANK: &str = "063";
pub const ECOBANK: &str = "050";
pub const FIDELITY_BANK: &str = "070";
pub const FIRST_BANK: &str = "011";
pub const FCMB: &str = "214";
pub const GTBANK: &str = "058";
pub const HERITAGE_BANK: &str = "030";
pub const KEYSTONE_BANK: &str = "082";
pub const SKYE_BANK: &str = "076";
pub const STANBIC_IBTC: &str = "221";
pub const STERLING_BANK: &str = "232";
pub const UBA: &str = "033";
pub const UNION_BANK: &str = "032";
pub const UNITY_BANK: &str = "215";
pub const WEMA_BANK: &str = "035";
pub const ZENITH_BANK: &str = "057";
