//! # Adoption and Donation Forms
//!
//! Field models, required-field validation and the simulated submission
//! lifecycle shared by both modals.
//!
//! Submissions never fail: once the fields validate, a pending ticket is
//! issued and the caller schedules [`Submission::complete`] after the
//! configured delay. A completion for a ticket that is no longer pending
//! (modal closed, form reset) is ignored.

use crate::animal::AnimalId;
use crate::i18n::FormStrings;
use crate::locale::Locale;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
    CardNumber,
}

impl FormField {
    pub fn label<'a>(&self, strings: &'a FormStrings) -> &'a str {
        match self {
            FormField::Name => &strings.name_label,
            FormField::Email => &strings.email_label,
            FormField::Phone => &strings.phone_label,
            FormField::Message => &strings.message_label,
            FormField::CardNumber => &strings.card_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0:?} is required")]
    Missing(FormField),
    #[error("email address is not valid")]
    InvalidEmail,
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidEmail => FormField::Email,
        }
    }

    /// Inline message in the active locale
    pub fn message(&self, strings: &FormStrings) -> String {
        match self {
            FormError::Missing(field) => format!("{} {}", strings.error_required, field.label(strings)),
            FormError::InvalidEmail => strings.error_email.clone(),
        }
    }
}

fn require(value: &str, field: FormField) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

const LOCAL_PUNCTUATION: &str = ".!#$%&'*+/=?^_`{|}~-";

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c)
}

/// A domain label: 1 to 63 letters, digits or hyphens, no hyphen at either end
fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// The browser's `type="email"` rule: `local@domain` where the domain is a
/// dot-separated list of labels. Surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && local.chars().all(is_local_char) && domain.split('.').all(is_domain_label)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdoptForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// An adoption application as it would be sent to the shelter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionInquiry {
    pub animal_id: AnimalId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl AdoptForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, FormField::Name)?;
        require(&self.email, FormField::Email)?;
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        require(&self.phone, FormField::Phone)?;
        require(&self.message, FormField::Message)?;
        Ok(())
    }

    pub fn to_inquiry(&self, animal_id: AnimalId) -> Result<AdoptionInquiry, FormError> {
        self.validate()?;
        Ok(AdoptionInquiry {
            animal_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// Quick-pick donation values shown above the amount field
pub const PRESET_VALUES: [u32; 3] = [10, 50, 100];

/// Amount string a quick-pick button writes into the field.
///
/// Turkish amounts are shown in lira at ten times the dollar value.
pub fn preset_amount(locale: Locale, value: u32) -> String {
    match locale {
        Locale::En => format!("${}", value),
        Locale::Tr => format!("{}0₺", value),
    }
}

/// A quick pick is highlighted while the amount mentions its value
pub fn is_preset_selected(amount: &str, value: u32) -> bool {
    amount.contains(&value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DonateForm {
    pub amount: String,
    pub name: String,
    pub card_number: String,
}

/// A completed donation. The card number is deliberately not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationRecord {
    pub amount: String,
    pub name: String,
}

impl DonateForm {
    pub fn with_prefill(prefill: Option<&str>) -> Self {
        Self {
            amount: prefill.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn pick_preset(&mut self, locale: Locale, value: u32) {
        self.amount = preset_amount(locale, value);
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, FormField::Name)?;
        require(&self.card_number, FormField::CardNumber)?;
        Ok(())
    }

    pub fn to_record(&self) -> Result<DonationRecord, FormError> {
        self.validate()?;
        Ok(DonationRecord {
            amount: self.amount.trim().to_string(),
            name: self.name.trim().to_string(),
        })
    }
}

pub type Ticket = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    Pending(Ticket),
    Submitted,
}

/// Lifecycle of one modal's simulated submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Submission {
    state: SubmissionState,
    issued: Ticket,
}

impl Submission {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending(_))
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Start a submission. Returns `None` while one is already pending or
    /// after the form was submitted.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.state != SubmissionState::Editing {
            return None;
        }
        self.issued = self.issued.wrapping_add(1);
        self.state = SubmissionState::Pending(self.issued);
        Some(self.issued)
    }

    /// Flip to the submitted display if `ticket` is the pending one
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.state == SubmissionState::Pending(ticket) {
            self.state = SubmissionState::Submitted;
            true
        } else {
            false
        }
    }

    /// Drop any pending ticket and return to editing
    pub fn reset(&mut self) {
        self.state = SubmissionState::Editing;
    }
}
