//! Draft validation before issues enter the store.
//!
//! Only presence is checked. Status, effort and due are defaulted by the
//! store and never cause a rejection.

use crate::config::ValidationConfig;
use crate::domain::IssueDraft;
use crate::error::{RequiredField, ValidationError};

/// Checks that a draft carries a title and an owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftValidator {
    reject_blank: bool,
}

impl DraftValidator {
    /// Create a validator from the `[validation]` config section.
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            reject_blank: config.reject_blank(),
        }
    }

    /// Treat whitespace-only title or owner as missing.
    pub fn rejecting_blank() -> Self {
        Self { reject_blank: true }
    }

    /// Validate a draft, reporting every missing field at once.
    pub fn validate(&self, draft: &IssueDraft) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Title, draft.title.as_str()),
            (RequiredField::Owner, draft.owner.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| self.is_missing(value))
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }

    fn is_missing(&self, value: &str) -> bool {
        if self.reject_blank {
            value.trim().is_empty()
        } else {
            value.is_empty()
        }
    }
}

/// Validate a draft with default rules (empty title or owner is rejected).
pub fn validate_draft(draft: &IssueDraft) -> Result<(), ValidationError> {
    DraftValidator::default().validate(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;

    #[test]
    fn test_complete_draft_passes() {
        assert!(validate_draft(&IssueDraft::new("Bug X", "Dan")).is_ok());
    }

    #[test]
    fn test_missing_title() {
        let err = validate_draft(&IssueDraft::new("", "Dan")).unwrap_err();
        assert_eq!(err.missing(), &[RequiredField::Title]);
    }

    #[test]
    fn test_missing_owner() {
        let err = validate_draft(&IssueDraft::new("Bug X", "")).unwrap_err();
        assert_eq!(err.missing(), &[RequiredField::Owner]);
    }

    #[test]
    fn test_missing_both_reports_both() {
        let err = validate_draft(&IssueDraft::default()).unwrap_err();
        assert_eq!(err.missing(), &[RequiredField::Title, RequiredField::Owner]);
    }

    #[test]
    fn test_optional_fields_never_rejected() {
        let draft = IssueDraft::new("Bug X", "Dan")
            .status(Status::Closed)
            .effort("not a number")
            .due("someday");
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_whitespace_accepted_by_default() {
        assert!(validate_draft(&IssueDraft::new("  ", "Dan")).is_ok());
    }

    #[test]
    fn test_reject_blank_treats_whitespace_as_missing() {
        let validator = DraftValidator::rejecting_blank();
        let err = validator
            .validate(&IssueDraft::new("  ", "\t"))
            .unwrap_err();
        assert_eq!(err.missing(), &[RequiredField::Title, RequiredField::Owner]);
        assert!(validator.validate(&IssueDraft::new(" Bug ", "Dan")).is_ok());
    }

    #[test]
    fn test_validator_from_config() {
        let config = ValidationConfig {
            reject_blank: Some(true),
        };
        assert_eq!(DraftValidator::new(&config), DraftValidator::rejecting_blank());
        assert_eq!(
            DraftValidator::new(&ValidationConfig::default()),
            DraftValidator::default()
        );
    }
}
