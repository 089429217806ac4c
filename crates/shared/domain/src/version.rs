use serde::Serialize;
use strum::{Display, EnumString};

/// UI generation selected for the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UiVersion {
    #[default]
    V1,
    V2,
}

/// Data-access layer generation selected for the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DataLayer {
    #[default]
    V1,
    V2,
}
