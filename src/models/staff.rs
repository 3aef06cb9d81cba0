//! Staff record model and related types.
//!
//! This module defines the [`Staff`] struct, the [`StaffTerms`] sum type
//! holding the category-specific pay terms, and the [`StaffCategory`] tag.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::error::{PayrollError, PayrollResult};

use super::terms::{HourlyTerms, InternTerms, SalariedTerms};
use super::update::{StaffUpdate, TermsUpdate};

/// The employment category of a staff record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// Paid per hour worked.
    Hourly,
    /// Paid an annual salary plus optional bonus.
    Salaried,
    /// Paid a monthly stipend for a fixed term.
    Intern,
}

impl StaffCategory {
    /// All categories, in menu order.
    pub const ALL: [StaffCategory; 3] = [Self::Hourly, Self::Salaried, Self::Intern];

    /// Human readable label for listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly Staff",
            Self::Salaried => "Salaried Staff",
            Self::Intern => "Intern",
        }
    }
}

impl fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category-specific pay terms of a staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum StaffTerms {
    /// Hourly rate and hours worked.
    Hourly(HourlyTerms),
    /// Annual salary and bonus.
    Salaried(SalariedTerms),
    /// Monthly stipend and duration.
    Intern(InternTerms),
}

impl StaffTerms {
    /// Returns the category tag of these terms.
    pub fn category(&self) -> StaffCategory {
        match self {
            Self::Hourly(_) => StaffCategory::Hourly,
            Self::Salaried(_) => StaffCategory::Salaried,
            Self::Intern(_) => StaffCategory::Intern,
        }
    }

    /// Computes compensation using the category's formula.
    pub fn compensation(&self) -> Decimal {
        match self {
            Self::Hourly(terms) => terms.compensation(),
            Self::Salaried(terms) => terms.compensation(),
            Self::Intern(terms) => terms.compensation(),
        }
    }

    /// Applies each present field through its validating setter.
    ///
    /// An update for another category fails with
    /// [`PayrollError::CategoryMismatch`] and changes nothing. Otherwise this
    /// stops at the first rejected value. Fields set before that point keep
    /// their new values; callers that need atomicity snapshot beforehand.
    fn apply(&mut self, id: &str, update: &TermsUpdate) -> PayrollResult<()> {
        match (self, update) {
            (Self::Hourly(terms), TermsUpdate::Hourly { rate, hours_worked }) => {
                if let Some(rate) = rate {
                    terms.set_rate(*rate)?;
                }
                if let Some(hours) = hours_worked {
                    terms.set_hours_worked(*hours)?;
                }
            }
            (
                Self::Salaried(terms),
                TermsUpdate::Salaried {
                    annual_salary,
                    bonus,
                },
            ) => {
                if let Some(salary) = annual_salary {
                    terms.set_annual_salary(*salary)?;
                }
                if let Some(bonus) = bonus {
                    terms.set_bonus(*bonus)?;
                }
            }
            (
                Self::Intern(terms),
                TermsUpdate::Intern {
                    stipend,
                    duration_months,
                },
            ) => {
                if let Some(stipend) = stipend {
                    terms.set_stipend(*stipend)?;
                }
                if let Some(months) = duration_months {
                    terms.set_duration_months(*months)?;
                }
            }
            (terms, update) => {
                return Err(PayrollError::CategoryMismatch {
                    id: id.to_string(),
                    expected: update.category().to_string(),
                    actual: terms.category().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<HourlyTerms> for StaffTerms {
    fn from(terms: HourlyTerms) -> Self {
        Self::Hourly(terms)
    }
}

impl From<SalariedTerms> for StaffTerms {
    fn from(terms: SalariedTerms) -> Self {
        Self::Salaried(terms)
    }
}

impl From<InternTerms> for StaffTerms {
    fn from(terms: InternTerms) -> Self {
        Self::Intern(terms)
    }
}

/// One staff member: identity plus category-specific pay terms.
///
/// # Examples
///
/// ```
/// use staff_payroll::models::{Staff, StaffCategory};
/// use rust_decimal::Decimal;
///
/// let staff = Staff::hourly("Alice", "E1", Decimal::from(15), Decimal::from(40)).unwrap();
/// assert_eq!(staff.category(), StaffCategory::Hourly);
/// assert_eq!(staff.compensation(), Decimal::from(600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staff {
    name: String,
    id: String,
    #[serde(flatten)]
    terms: StaffTerms,
}

impl Staff {
    /// Creates a record, rejecting an empty name or id.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        terms: impl Into<StaffTerms>,
    ) -> PayrollResult<Self> {
        Ok(Self {
            name: check_name(name.into())?,
            id: check_id(id.into())?,
            terms: terms.into(),
        })
    }

    /// Creates an hourly record.
    pub fn hourly(
        name: impl Into<String>,
        id: impl Into<String>,
        rate: Decimal,
        hours_worked: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(name, id, HourlyTerms::new(rate, hours_worked)?)
    }

    /// Creates a salaried record.
    pub fn salaried(
        name: impl Into<String>,
        id: impl Into<String>,
        annual_salary: Decimal,
        bonus: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(name, id, SalariedTerms::new(annual_salary, bonus)?)
    }

    /// Creates an intern record.
    pub fn intern(
        name: impl Into<String>,
        id: impl Into<String>,
        stipend: Decimal,
        duration_months: u32,
    ) -> PayrollResult<Self> {
        Self::new(name, id, InternTerms::new(stipend, duration_months)?)
    }

    /// Returns the staff member's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the staff id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the category-specific terms.
    pub fn terms(&self) -> &StaffTerms {
        &self.terms
    }

    /// Returns the category tag.
    pub fn category(&self) -> StaffCategory {
        self.terms.category()
    }

    /// Sets the name, rejecting blank values.
    pub fn set_name(&mut self, name: impl Into<String>) -> PayrollResult<()> {
        self.name = check_name(name.into())?;
        Ok(())
    }

    /// Sets the id, rejecting blank values.
    ///
    /// Uniqueness is the store's concern; this only checks the value itself.
    pub fn set_id(&mut self, id: impl Into<String>) -> PayrollResult<()> {
        self.id = check_id(id.into())?;
        Ok(())
    }

    /// Computes compensation using the record's category formula.
    pub fn compensation(&self) -> Decimal {
        self.terms.compensation()
    }

    /// Applies an update field by field, in the order terms, name, id.
    ///
    /// A terms update for another category is rejected before anything
    /// changes. Otherwise this stops at the first rejected value and earlier
    /// fields keep their new values.
    pub fn apply(&mut self, update: &StaffUpdate) -> PayrollResult<()> {
        if let Some(terms) = &update.terms {
            self.terms.apply(&self.id, terms)?;
        }
        if let Some(name) = &update.name {
            self.set_name(name.as_str())?;
        }
        if let Some(id) = &update.id {
            self.set_id(id.as_str())?;
        }
        Ok(())
    }
}

// Commas separate fields in the stored line format and are not escaped.
const FORBIDDEN_CHAR: char = ',';

fn check_name(name: String) -> PayrollResult<String> {
    if name.trim().is_empty() {
        return Err(PayrollError::invalid_field("name", "Name cannot be empty"));
    }
    if name.contains(FORBIDDEN_CHAR) {
        return Err(PayrollError::invalid_field("name", "Name cannot contain commas"));
    }
    Ok(name)
}

fn check_id(id: String) -> PayrollResult<String> {
    if id.trim().is_empty() {
        return Err(PayrollError::invalid_field("id", "Staff ID cannot be empty"));
    }
    if id.contains(FORBIDDEN_CHAR) {
        return Err(PayrollError::invalid_field("id", "Staff ID cannot contain commas"));
    }
    Ok(id)
}
