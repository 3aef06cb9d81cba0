//! Category-specific pay terms.
//!
//! Each employment category carries two numeric fields and its own
//! compensation formula. Fields are private and only change through the
//! validating setters, so a constructed value always satisfies its
//! category's constraints.
//!
//! Every amount and hour count is capped at [`MAX_AMOUNT`], which keeps each
//! compensation formula well inside `Decimal`'s range.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};

/// The shortest internship, in months.
pub const MIN_INTERN_MONTHS: u32 = 1;

/// The longest internship, in months.
pub const MAX_INTERN_MONTHS: u32 = 6;

/// The largest rate, hour count, salary, bonus or stipend accepted.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn require_positive(field: &str, value: Decimal, message: &str) -> PayrollResult<Decimal> {
    if value > Decimal::ZERO {
        require_within_limit(field, value)
    } else {
        Err(PayrollError::invalid_field(field, message))
    }
}

fn require_non_negative(field: &str, value: Decimal, message: &str) -> PayrollResult<Decimal> {
    if value >= Decimal::ZERO {
        require_within_limit(field, value)
    } else {
        Err(PayrollError::invalid_field(field, message))
    }
}

fn require_within_limit(field: &str, value: Decimal) -> PayrollResult<Decimal> {
    if value <= MAX_AMOUNT {
        Ok(value)
    } else {
        Err(PayrollError::invalid_field(
            field,
            format!("Value cannot exceed {}", MAX_AMOUNT),
        ))
    }
}

/// Pay terms for staff paid by the hour.
///
/// # Example
///
/// ```
/// use staff_payroll::models::HourlyTerms;
/// use rust_decimal::Decimal;
///
/// let terms = HourlyTerms::new(Decimal::from(20), Decimal::from(10)).unwrap();
/// assert_eq!(terms.compensation(), Decimal::from(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyTerms {
    rate: Decimal,
    hours_worked: Decimal,
}

impl HourlyTerms {
    /// Creates hourly terms, rejecting a non-positive rate or negative hours.
    pub fn new(rate: Decimal, hours_worked: Decimal) -> PayrollResult<Self> {
        Ok(Self {
            rate: Self::check_rate(rate)?,
            hours_worked: Self::check_hours_worked(hours_worked)?,
        })
    }

    fn check_rate(rate: Decimal) -> PayrollResult<Decimal> {
        require_positive("rate", rate, "Hourly rate must be positive")
    }

    fn check_hours_worked(hours: Decimal) -> PayrollResult<Decimal> {
        require_non_negative("hours_worked", hours, "Hours worked cannot be negative")
    }

    /// Returns the hourly rate.
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the hours worked.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Sets the hourly rate. Leaves the terms untouched on failure.
    pub fn set_rate(&mut self, rate: Decimal) -> PayrollResult<()> {
        self.rate = Self::check_rate(rate)?;
        Ok(())
    }

    /// Sets the hours worked. Leaves the terms untouched on failure.
    pub fn set_hours_worked(&mut self, hours: Decimal) -> PayrollResult<()> {
        self.hours_worked = Self::check_hours_worked(hours)?;
        Ok(())
    }

    /// Rate multiplied by hours worked.
    pub fn compensation(&self) -> Decimal {
        self.rate * self.hours_worked
    }
}

/// Pay terms for staff on an annual salary.
///
/// # Example
///
/// ```
/// use staff_payroll::models::SalariedTerms;
/// use rust_decimal::Decimal;
///
/// let terms = SalariedTerms::new(Decimal::from(50000), Decimal::from(1000)).unwrap();
/// assert_eq!(terms.compensation(), Decimal::from(51000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalariedTerms {
    annual_salary: Decimal,
    bonus: Decimal,
}

impl SalariedTerms {
    /// Creates salaried terms, rejecting a non-positive salary or negative bonus.
    pub fn new(annual_salary: Decimal, bonus: Decimal) -> PayrollResult<Self> {
        Ok(Self {
            annual_salary: Self::check_annual_salary(annual_salary)?,
            bonus: Self::check_bonus(bonus)?,
        })
    }

    /// Creates salaried terms with no bonus.
    pub fn without_bonus(annual_salary: Decimal) -> PayrollResult<Self> {
        Self::new(annual_salary, Decimal::ZERO)
    }

    fn check_annual_salary(salary: Decimal) -> PayrollResult<Decimal> {
        require_positive("annual_salary", salary, "Annual salary must be positive")
    }

    fn check_bonus(bonus: Decimal) -> PayrollResult<Decimal> {
        require_non_negative("bonus", bonus, "Bonus cannot be negative")
    }

    /// Returns the annual salary.
    pub fn annual_salary(&self) -> Decimal {
        self.annual_salary
    }

    /// Returns the bonus.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }

    /// Sets the annual salary. Leaves the terms untouched on failure.
    pub fn set_annual_salary(&mut self, salary: Decimal) -> PayrollResult<()> {
        self.annual_salary = Self::check_annual_salary(salary)?;
        Ok(())
    }

    /// Sets the bonus. Leaves the terms untouched on failure.
    pub fn set_bonus(&mut self, bonus: Decimal) -> PayrollResult<()> {
        self.bonus = Self::check_bonus(bonus)?;
        Ok(())
    }

    /// Annual salary plus bonus.
    pub fn compensation(&self) -> Decimal {
        self.annual_salary + self.bonus
    }
}

/// Pay terms for interns, who receive a monthly stipend for a fixed term.
///
/// # Example
///
/// ```
/// use staff_payroll::models::InternTerms;
/// use rust_decimal::Decimal;
///
/// let terms = InternTerms::new(Decimal::from(1200), 6).unwrap();
/// assert_eq!(terms.compensation(), Decimal::from(7200));
/// assert!(InternTerms::new(Decimal::from(1200), 7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternTerms {
    stipend: Decimal,
    duration_months: u32,
}

impl InternTerms {
    /// Creates intern terms, rejecting a non-positive stipend or a duration
    /// outside 1..=6 months.
    pub fn new(stipend: Decimal, duration_months: u32) -> PayrollResult<Self> {
        Ok(Self {
            stipend: Self::check_stipend(stipend)?,
            duration_months: Self::check_duration_months(duration_months)?,
        })
    }

    fn check_stipend(stipend: Decimal) -> PayrollResult<Decimal> {
        require_positive("stipend", stipend, "Stipend must be positive")
    }

    fn check_duration_months(months: u32) -> PayrollResult<u32> {
        if (MIN_INTERN_MONTHS..=MAX_INTERN_MONTHS).contains(&months) {
            Ok(months)
        } else {
            Err(PayrollError::invalid_field(
                "duration_months",
                format!(
                    "Internship duration must be between {} and {} months",
                    MIN_INTERN_MONTHS, MAX_INTERN_MONTHS
                ),
            ))
        }
    }

    /// Returns the monthly stipend.
    pub fn stipend(&self) -> Decimal {
        self.stipend
    }

    /// Returns the internship length in months.
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// Sets the monthly stipend. Leaves the terms untouched on failure.
    pub fn set_stipend(&mut self, stipend: Decimal) -> PayrollResult<()> {
        self.stipend = Self::check_stipend(stipend)?;
        Ok(())
    }

    /// Sets the internship length. Leaves the terms untouched on failure.
    pub fn set_duration_months(&mut self, months: u32) -> PayrollResult<()> {
        self.duration_months = Self::check_duration_months(months)?;
        Ok(())
    }

    /// Stipend multiplied by the number of months.
    pub fn compensation(&self) -> Decimal {
        self.stipend * Decimal::from(self.duration_months)
    }
}
