//! Input bundle for registering a ship visit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipInput {
    pub name: String,
    /// Seven-digit IMO number, optionally prefixed with `IMO`.
    pub imo: String,
    pub gross_tonnage: Option<u32>,
    /// Link to a public vessel tracker.
    pub tracking_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisitInput {
    pub eta: DateTime<Utc>,
    pub port: String,
    pub notes: Option<String>,
    /// Where the ETA came from (agent, email, AIS, ...).
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PilotInput {
    pub name: String,
    pub boarding_at: Option<DateTime<Utc>>,
}

/// Everything the new-visit form collects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewVisit {
    pub ship: ShipInput,
    pub visit: VisitInput,
    pub pilot: Option<PilotInput>,
}
