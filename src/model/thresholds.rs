use serde::Serialize;

/// Resistance-rate severity bands. Boundary values map to the
/// higher-severity band (inclusive lower bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResistanceBand {
    /// At or above 100: intrinsic (expected) resistance, rendered as
    /// "R" rather than a percentage.
    Intrinsic,
    High,
    Medium,
    Low,
    NoData,
}

pub const INTRINSIC_MIN: f64 = 100.0;
pub const HIGH_MIN: f64 = 20.0;
pub const MEDIUM_MIN: f64 = 10.0;

pub fn classify(value: Option<f64>) -> ResistanceBand {
    match value {
        None => ResistanceBand::NoData,
        Some(v) if v >= INTRINSIC_MIN => ResistanceBand::Intrinsic,
        Some(v) if v >= HIGH_MIN => ResistanceBand::High,
        Some(v) if v >= MEDIUM_MIN => ResistanceBand::Medium,
        Some(_) => ResistanceBand::Low,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
