//! Step labels played while the backend reads the customer's documents.

pub const EXTRACTION_STEPS: [&str; 8] = [
    "Initializing document processor...",
    "Locating customer documents...",
    "Reading document contents...",
    "Extracting Aadhaar information...",
    "Extracting mobile number...",
    "Processing address details...",
    "Validating extracted data...",
    "Finalizing information...",
];

/// Label before the first tick.
pub const IDLE_LABEL: &str = "Initializing...";

/// Bar width in percent once step `step` (0-based) is showing.
pub fn progress_percent(step: Option<usize>) -> f64 {
    match step {
        None => 0.0,
        Some(i) => {
            let shown = (i + 1).min(EXTRACTION_STEPS.len());
            shown as f64 / EXTRACTION_STEPS.len() as f64 * 100.0
        }
    }
}

pub fn step_label(step: Option<usize>) -> &'static str {
    match step {
        None => IDLE_LABEL,
        Some(i) => EXTRACTION_STEPS[i.min(EXTRACTION_STEPS.len() - 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_runs_to_full_width() {
        assert_eq!(progress_percent(None), 0.0);
        assert_eq!(progress_percent(Some(0)), 12.5);
        assert_eq!(progress_percent(Some(3)), 50.0);
        assert_eq!(progress_percent(Some(7)), 100.0);
        assert_eq!(progress_percent(Some(20)), 100.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(step_label(None), "Initializing...");
        assert_eq!(step_label(Some(4)), "Extracting mobile number...");
        assert_eq!(step_label(Some(8)), "Finalizing information...");
    }
}
