use serde::{Deserialize, Serialize};

/// Place-of-supply flag that decides which GST components apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// CGST + SGST
    #[default]
    IntraState,
    /// IGST
    InterState,
}

impl TaxMode {
    pub fn from_interstate(is_interstate: bool) -> Self {
        if is_interstate {
            TaxMode::InterState
        } else {
            TaxMode::IntraState
        }
    }

    pub fn is_interstate(&self) -> bool {
        matches!(self, TaxMode::InterState)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxMode::IntraState => "Intra-state (CGST + SGST)",
            TaxMode::InterState => "Inter-state (IGST)",
        }
    }
}

/// One GST component line in the tax breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct TaxLine {
    pub label: &'static str,
    pub rate: f64,
    pub amount: f64,
}
