use contracts::domain::a001_customer::CustomerRecord;
use leptos::prelude::*;

/// Apply the edit draft to the reviewed record: every editable field is
/// trimmed, the folder is kept from the original.
pub fn apply_draft(original: &CustomerRecord, draft: &CustomerRecord) -> CustomerRecord {
    CustomerRecord {
        folder: original.folder.clone(),
        ..draft.trimmed()
    }
}

/// Reviewed customer data plus the edit-mode draft.
#[derive(Clone, Copy)]
pub struct ReviewViewModel {
    pub record: RwSignal<Option<CustomerRecord>>,
    pub editing: RwSignal<bool>,
    pub name: RwSignal<String>,
    pub aadhaar: RwSignal<String>,
    pub address: RwSignal<String>,
    pub mobile: RwSignal<String>,
}

impl ReviewViewModel {
    pub fn new() -> Self {
        Self {
            record: RwSignal::new(None),
            editing: RwSignal::new(false),
            name: RwSignal::new(String::new()),
            aadhaar: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            mobile: RwSignal::new(String::new()),
        }
    }

    pub fn load(&self, record: CustomerRecord) {
        self.editing.set(false);
        self.fill_draft(&record);
        self.record.set(Some(record));
    }

    pub fn clear(&self) {
        self.editing.set(false);
        self.record.set(None);
        self.fill_draft(&CustomerRecord::default());
    }

    pub fn is_editing(&self) -> bool {
        self.editing.get_untracked()
    }

    pub fn start_edit(&self) {
        if let Some(record) = self.record.get_untracked() {
            self.fill_draft(&record);
            self.editing.set(true);
        }
    }

    pub fn toggle_edit(&self) {
        if self.is_editing() {
            self.cancel();
        } else {
            self.start_edit();
        }
    }

    /// Commit the draft. Returns `false` when there is nothing to save.
    pub fn save(&self) -> bool {
        let Some(original) = self.record.get_untracked() else {
            return false;
        };
        let updated = apply_draft(&original, &self.draft());
        self.fill_draft(&updated);
        self.record.set(Some(updated));
        self.editing.set(false);
        true
    }

    /// Leave edit mode, restoring the inputs from the saved record.
    pub fn cancel(&self) {
        if let Some(record) = self.record.get_untracked() {
            self.fill_draft(&record);
        }
        self.editing.set(false);
    }

    fn draft(&self) -> CustomerRecord {
        CustomerRecord {
            name: self.name.get_untracked(),
            aadhaar: self.aadhaar.get_untracked(),
            address: self.address.get_untracked(),
            mobile: self.mobile.get_untracked(),
            folder: String::new(),
        }
    }

    fn fill_draft(&self, record: &CustomerRecord) {
        self.name.set(record.name.clone());
        self.aadhaar.set(record.aadhaar.clone());
        self.address.set(record.address.clone());
        self.mobile.set(record.mobile.clone());
    }
}

impl Default for ReviewViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_draft_trims_and_keeps_folder() {
        let original = CustomerRecord {
            name: "Ramesh".into(),
            aadhaar: "123412341234".into(),
            address: "Gaya".into(),
            mobile: "9000000000".into(),
            folder: "003 Ramesh".into(),
        };
        let draft = CustomerRecord {
            name: "  Ramesh Kumar ".into(),
            aadhaar: " 1234 1234 1234".into(),
            address: "Station Road, Gaya\n".into(),
            mobile: "9000000001 ".into(),
            folder: "tampered".into(),
        };
        let saved = apply_draft(&original, &draft);
        assert_eq!(saved.name, "Ramesh Kumar");
        assert_eq!(saved.aadhaar, "1234 1234 1234");
        assert_eq!(saved.address, "Station Road, Gaya");
        assert_eq!(saved.mobile, "9000000001");
        assert_eq!(saved.folder, "003 Ramesh");
    }
}
