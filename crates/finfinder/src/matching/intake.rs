use super::form::QualificationForm;

/// Validation errors raised before a qualification form reaches scoring.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("contact email {0:?} is not deliverable")]
    InvalidEmail(String),
    #[error("matching consent was not given")]
    MissingMatchingConsent,
}

/// Guard that keeps incomplete or unconsented submissions out of matching
/// and out of the submissions store.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn validate(&self, form: &QualificationForm) -> Result<(), IntakeViolation> {
        required(&form.business_name, "business_name")?;
        required(&form.country_of_operation, "country_of_operation")?;
        required(&form.contact_name, "contact_name")?;
        required(&form.contact_email, "contact_email")?;

        let email = form.contact_email.trim();
        let deliverable = matches!(
            email.split_once('@'),
            Some((local, domain)) if !local.is_empty() && domain.contains('.')
        );
        if !deliverable {
            return Err(IntakeViolation::InvalidEmail(form.contact_email.clone()));
        }

        if !form.consent_matching {
            return Err(IntakeViolation::MissingMatchingConsent);
        }

        Ok(())
    }
}

fn required(value: &str, field: &'static str) -> Result<(), IntakeViolation> {
    if value.trim().is_empty() {
        Err(IntakeViolation::MissingField(field))
    } else {
        Ok(())
    }
}
