// ntaglock/src/tag/info.rs

use crate::transport::TagTransport;
use crate::types::Uid;

/// Compact information describing a tag as it was discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagSummary {
    pub uid: Uid,
    /// Short name of the first advertised technology, or `Unknown`
    pub tag_type: String,
}

impl TagSummary {
    pub fn new(uid: Uid, tag_type: String) -> Self {
        Self { uid, tag_type }
    }

    /// Build from discovery data; needs no connection.
    pub fn from_transport(transport: &dyn TagTransport) -> Self {
        let tag_type = transport
            .tech_list()
            .first()
            .map(|t| short_tech_name(t).to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        Self::new(transport.uid(), tag_type)
    }
}

/// `android.nfc.tech.NfcA` -> `NfcA`
pub fn short_tech_name(tech: &str) -> &str {
    tech.rsplit('.').next().unwrap_or(tech)
}

/// Comma separated short technology names.
pub fn tech_names(techs: &[String]) -> String {
    techs
        .iter()
        .map(|t| short_tech_name(t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// NFC Forum data format implied by the technology list.
pub fn data_format(techs: &[String]) -> &'static str {
    let has = |name: &str| techs.iter().any(|t| short_tech_name(t) == name);
    if has("MifareUltralight") {
        "NFC Forum Type 2"
    } else if has("Ndef") {
        "NFC Forum Type 4"
    } else {
        "Unknown"
    }
}
