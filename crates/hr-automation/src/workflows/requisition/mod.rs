//! Requisition request bodies for the applicant-tracking API, built from
//! Notion requisition pages.

mod country;
pub mod payload;
pub mod router;
pub mod salary;
pub mod source;

pub use country::iso_country;
pub use payload::{
    CustomFormAnswers, Relationship, Relationships, RequisitionAssembler, RequisitionAttributes,
    RequisitionData, RequisitionPayload, RequisitionRequest, ResourceRef,
};
pub use router::{requisition_router, RequisitionPayloadRequest};
pub use salary::{parse_salary, Amount, SalaryInput};
pub use source::{DateProperty, ReasonProperty, RequisitionLookups, RequisitionSource};
