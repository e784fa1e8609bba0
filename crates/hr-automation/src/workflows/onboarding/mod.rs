//! TeamTailor "Hired" webhooks mapped onto BambooHR employee records.
//!
//! Fetching the requisition, department and list metadata, and posting the
//! result, happen upstream; this module only shapes the documents.

pub mod context;
pub mod employee;
mod meta;
pub mod router;
pub mod webhook;

pub use context::{DepartmentDocument, HiringAnswers, RequisitionDocument};
pub use employee::{EmployeeAssembler, EmployeePayload, Onboarding, OnboardingError};
pub use meta::{missing_list_options, ListField, MissingOption};
pub use router::{onboarding_router, OnboardingRequest};
pub use webhook::{ApplicationWebhook, Candidate, HIRED_STAGE, HIRE_EVENT};
