//! Core data models for the staff payroll system.
//!
//! This module contains the staff record, its category-specific pay terms,
//! and the field deltas used to modify stored records.

mod staff;
mod terms;
mod update;

pub use staff::{Staff, StaffCategory, StaffTerms};
pub use terms::{
    HourlyTerms, InternTerms, MAX_AMOUNT, MAX_INTERN_MONTHS, MIN_INTERN_MONTHS, SalariedTerms,
};
pub use update::{StaffUpdate, TermsUpdate};
