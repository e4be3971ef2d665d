//! Contact form and its submission boundary.
//!
//! The form only validates and tracks whether it was sent. Where an
//! inquiry goes is decided by the injected [`SubmissionService`]: the
//! default logs it locally, `[contact].endpoint` posts it as JSON.

use crate::log;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Inquiry
// ============================================================================

/// Industry choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryIndustry {
    Healthcare,
    Banking,
    SupplyChain,
    Energy,
    Manufacturing,
    Other,
}

impl fmt::Display for InquiryIndustry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Healthcare => "Healthcare",
            Self::Banking => "Banking & Finance",
            Self::SupplyChain => "Supply Chain & Logistics",
            Self::Energy => "Energy",
            Self::Manufacturing => "Manufacturing",
            Self::Other => "Other",
        })
    }
}

/// What a visitor tells us about their problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub industry: Option<InquiryIndustry>,
    pub problem: String,
    /// Whether the visitor already has data for a pilot.
    #[serde(default)]
    pub data_ready: bool,
}

/// A field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Inquiry {
    /// Check the required fields. Returns every failing field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut require = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                errors.push(FieldError { field, message });
            }
        };

        require(!self.name.trim().is_empty(), "name", "is required");
        require(is_email(&self.email), "email", "must be an email address");
        require(self.industry.is_some(), "industry", "is required");
        require(!self.problem.trim().is_empty(), "problem", "is required");

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_email(s: &str) -> bool {
    let s = s.trim();
    match s.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && !domain.is_empty() && !domain.contains('@') && !s.contains(' ')
        }
        None => false,
    }
}

// ============================================================================
// Submission
// ============================================================================

/// Acknowledgement of an accepted inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Where the inquiry went (`log` or the endpoint URL).
    pub destination: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid inquiry: {}", join_fields(.0))]
    Invalid(Vec<FieldError>),

    #[error("failed to reach `{endpoint}`: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("`{endpoint}` rejected the inquiry with status {status}")]
    Rejected { endpoint: String, status: u16 },
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Destination of contact-form submissions.
pub trait SubmissionService {
    fn submit(&self, inquiry: &Inquiry) -> Result<Receipt, SubmitError>;
}

/// Logs the inquiry locally and accepts it.
#[derive(Debug, Default)]
pub struct LogSubmission;

impl SubmissionService for LogSubmission {
    fn submit(&self, inquiry: &Inquiry) -> Result<Receipt, SubmitError> {
        let industry = inquiry
            .industry
            .map(|i| i.to_string())
            .unwrap_or_default();
        log!("contact"; "inquiry from {} <{}> [{}]", inquiry.name, inquiry.email, industry);
        log!("contact"; "{}", inquiry.problem.trim());
        Ok(Receipt {
            destination: "log".to_owned(),
        })
    }
}

/// Posts the inquiry as JSON to a form-processing endpoint.
pub struct HttpSubmission {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpSubmission {
    pub fn new(endpoint: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.to_owned(),
        }
    }
}

impl SubmissionService for HttpSubmission {
    fn submit(&self, inquiry: &Inquiry) -> Result<Receipt, SubmitError> {
        let transport = |reason: String| SubmitError::Transport {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let body = serde_json::to_string(inquiry).map_err(|err| transport(err.to_string()))?;
        let response = self
            .agent
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .send(body)
            .map_err(|err| transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        log!("contact"; "inquiry sent to {}", self.endpoint);
        Ok(Receipt {
            destination: self.endpoint.clone(),
        })
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted(Receipt),
}

/// Contact form: `Editing` until a submission is accepted.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub inquiry: Inquiry,
    state: FormState,
}

impl ContactForm {
    pub const fn new(inquiry: Inquiry) -> Self {
        Self {
            inquiry,
            state: FormState::Editing,
        }
    }

    #[allow(dead_code)]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Validate and hand the inquiry to `service`.
    ///
    /// On failure the form stays editable with its input intact. A form
    /// that was already accepted returns its receipt without resending.
    pub fn submit(&mut self, service: &dyn SubmissionService) -> Result<Receipt, SubmitError> {
        if let FormState::Submitted(receipt) = &self.state {
            return Ok(receipt.clone());
        }
        self.inquiry.validate().map_err(SubmitError::Invalid)?;
        let receipt = service.submit(&self.inquiry)?;
        self.state = FormState::Submitted(receipt.clone());
        Ok(receipt)
    }

    /// Clear the form for another inquiry.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.inquiry = Inquiry::default();
        self.state = FormState::Editing;
    }
}
