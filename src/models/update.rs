//! Field deltas applied by [`StaffStore::modify`](crate::store::StaffStore::modify).
//!
//! Every field is optional; `None` means "keep the current value".

use rust_decimal::Decimal;

use super::staff::StaffCategory;

/// Changes to the category-specific fields of one record.
///
/// The variant must match the category of the record it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermsUpdate {
    /// Changes for an hourly record.
    Hourly {
        /// New hourly rate.
        rate: Option<Decimal>,
        /// New hours worked.
        hours_worked: Option<Decimal>,
    },
    /// Changes for a salaried record.
    Salaried {
        /// New annual salary.
        annual_salary: Option<Decimal>,
        /// New bonus.
        bonus: Option<Decimal>,
    },
    /// Changes for an intern record.
    Intern {
        /// New monthly stipend.
        stipend: Option<Decimal>,
        /// New internship length.
        duration_months: Option<u32>,
    },
}

impl TermsUpdate {
    /// The category this update was written for.
    pub fn category(&self) -> StaffCategory {
        match self {
            Self::Hourly { .. } => StaffCategory::Hourly,
            Self::Salaried { .. } => StaffCategory::Salaried,
            Self::Intern { .. } => StaffCategory::Intern,
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Hourly { rate, hours_worked } => rate.is_none() && hours_worked.is_none(),
            Self::Salaried {
                annual_salary,
                bonus,
            } => annual_salary.is_none() && bonus.is_none(),
            Self::Intern {
                stipend,
                duration_months,
            } => stipend.is_none() && duration_months.is_none(),
        }
    }
}

/// A set of field changes for one staff record.
///
/// # Example
///
/// ```
/// use staff_payroll::models::{StaffUpdate, TermsUpdate};
/// use rust_decimal::Decimal;
///
/// let update = StaffUpdate::new()
///     .with_name("Alice Smith")
///     .with_terms(TermsUpdate::Hourly {
///         rate: Some(Decimal::from(22)),
///         hours_worked: None,
///     });
/// assert!(!update.is_empty());
/// assert!(StaffUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New staff id.
    pub id: Option<String>,
    /// New category-specific values.
    pub terms: Option<TermsUpdate>,
}

impl StaffUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the category-specific changes.
    pub fn with_terms(mut self, terms: TermsUpdate) -> Self {
        self.terms = Some(terms);
        self
    }

    /// Returns true if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.id.is_none()
            && self.terms.as_ref().is_none_or(TermsUpdate::is_empty)
    }
}
