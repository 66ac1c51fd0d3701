use serde::{Deserialize, Serialize};

/// which stop-time field positions a vehicle visit on the service-day axis.
/// when the chosen field is absent on a visit, the other one stands in for
/// it; a visit missing both has no usable time at all.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    Arrival,
    #[default]
    Departure,
}
