/// HSN code offered in the billing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsnOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// HSN codes used for Minato invoices, in the order shown in the form
pub const HSN_OPTIONS: &[HsnOption] = &[
    HsnOption {
        code: "87038040",
        label: "E-Rickshaw (battery operated three-wheeler)",
    },
    HsnOption {
        code: "85076000",
        label: "Lithium-ion battery",
    },
    HsnOption {
        code: "85072000",
        label: "Lead-acid battery",
    },
    HsnOption {
        code: "87149990",
        label: "Parts & accessories",
    },
];

pub fn find_hsn(code: &str) -> Option<&'static HsnOption> {
    HSN_OPTIONS.iter().find(|o| o.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_numeric() {
        for (i, a) in HSN_OPTIONS.iter().enumerate() {
            assert!(a.code.chars().all(|c| c.is_ascii_digit()));
            assert!(HSN_OPTIONS[i + 1..].iter().all(|b| b.code != a.code));
        }
        assert_eq!(find_hsn("85076000").map(|o| o.label), Some("Lithium-ion battery"));
        assert!(find_hsn("0000").is_none());
    }
}
