//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::codec::{category_from_tag, category_tag};
use crate::error::PayrollError;
use crate::models::{
    HourlyTerms, InternTerms, SalariedTerms, Staff, StaffCategory, StaffTerms, StaffUpdate,
    TermsUpdate,
};
use crate::storage::StorageBackend;
use crate::store::StaffStore;

use super::input::{parse_amount, parse_months, parse_optional};
use super::render::render_roster;

const GREETING: &str = "Welcome to Staff Payroll Management System";

/// Why a menu action stopped early.
#[derive(Debug, Error)]
enum Interrupt {
    #[error(transparent)]
    Payroll(#[from] PayrollError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput,
}

type Step<T> = Result<T, Interrupt>;

/// One interactive session driving a store.
///
/// # Example
///
/// ```
/// use staff_payroll::cli::MenuSession;
/// use staff_payroll::storage::MemoryBackend;
/// use staff_payroll::store::StaffStore;
///
/// let mut store = StaffStore::open(MemoryBackend::new())?;
/// let input = "A\nPT\nAlice\nE1\n15\n40\nE\n".as_bytes();
/// let mut output = Vec::new();
///
/// MenuSession::new(&mut store, input, &mut output).run().unwrap();
///
/// assert_eq!(store.len(), 1);
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("Success: Staff member Alice has been added successfully"));
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
pub struct MenuSession<'a, B: StorageBackend, R: BufRead, W: Write> {
    store: &'a mut StaffStore<B>,
    input: R,
    output: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> MenuSession<'a, B, R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(store: &'a mut StaffStore<B>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Store failures are reported to the user and the loop continues. Only
    /// I/O errors on the session's own reader or writer end the session early.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", GREETING)?;

        loop {
            self.print_menu()?;
            let outcome = self
                .prompt("Enter your choice: ")
                .and_then(|choice| self.dispatch(&choice.to_uppercase()));

            match outcome {
                Ok(true) => continue,
                Ok(false) | Err(Interrupt::EndOfInput) => break,
                Err(Interrupt::Payroll(e)) => {
                    debug!(error = %e, "Menu action failed");
                    writeln!(self.output, "Failed: {}", e)?;
                }
                Err(Interrupt::Io(e)) => return Err(e),
            }
        }

        self.output.flush()
    }

    /// Runs one menu choice. Returns `false` when the user asked to exit.
    fn dispatch(&mut self, choice: &str) -> Step<bool> {
        match choice {
            "A" => self.add()?,
            "M" => self.modify()?,
            "D" => self.delete()?,
            "V" => self.view()?,
            "E" => {
                writeln!(
                    self.output,
                    "Success: Thank you for using Staff Payroll Management System"
                )?;
                writeln!(self.output, "Exiting system...")?;
                return Ok(false);
            }
            _ => writeln!(
                self.output,
                "Failed: Invalid choice selected. Please select A/M/D/V/E"
            )?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Options:")?;
        writeln!(self.output, "A --> Add new staff")?;
        writeln!(self.output, "M --> Modify staff")?;
        writeln!(self.output, "D --> Delete staff")?;
        writeln!(self.output, "V --> View all staff")?;
        writeln!(self.output, "E --> Exit")
    }

    /// Writes `label`, then reads one trimmed line.
    fn prompt(&mut self, label: &str) -> Step<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn add(&mut self) -> Step<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Select staff type:")?;
        for category in StaffCategory::ALL {
            writeln!(self.output, "{} --> {}", category_tag(category), category)?;
        }
        let tag = self.prompt("Enter staff type: ")?.to_uppercase();
        let Some(category) = category_from_tag(&tag) else {
            writeln!(self.output, "Failed: Invalid staff type selected")?;
            return Ok(());
        };

        let name = self.prompt("Enter staff name: ")?;
        let id = self.prompt("Enter staff ID: ")?;
        let terms: StaffTerms = match category {
            StaffCategory::Hourly => {
                let rate = parse_amount("rate", &self.prompt("Enter hourly rate: ")?)?;
                let hours = parse_amount("hours_worked", &self.prompt("Enter hours worked: ")?)?;
                HourlyTerms::new(rate, hours)?.into()
            }
            StaffCategory::Salaried => {
                let salary =
                    parse_amount("annual_salary", &self.prompt("Enter annual salary: ")?)?;
                let bonus = parse_amount("bonus", &self.prompt("Enter bonus (0 if none): ")?)?;
                SalariedTerms::new(salary, bonus)?.into()
            }
            StaffCategory::Intern => {
                let stipend = parse_amount("stipend", &self.prompt("Enter monthly stipend: ")?)?;
                let months = parse_months(
                    "duration_months",
                    &self.prompt("Enter duration in months (1-6): ")?,
                )?;
                InternTerms::new(stipend, months)?.into()
            }
        };

        let staff = Staff::new(name, id, terms)?;
        let name = staff.name().to_string();
        self.store.add(staff)?;
        writeln!(
            self.output,
            "Success: Staff member {} has been added successfully",
            name
        )?;
        Ok(())
    }

    fn modify(&mut self) -> Step<()> {
        let id = self.prompt("Enter staff ID to modify: ")?;
        let Some(current) = self.store.get(&id).cloned() else {
            writeln!(self.output, "Failed: Staff member not found")?;
            return Ok(());
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter new values (press Enter to keep current value):"
        )?;

        let mut update = StaffUpdate::new();
        let name = self.prompt(&format!("Name [{}]: ", current.name()))?;
        if !name.is_empty() {
            update = update.with_name(name);
        }
        let new_id = self.prompt(&format!("Staff ID [{}]: ", current.id()))?;
        if !new_id.is_empty() {
            update = update.with_id(new_id);
        }
        update.terms = Some(self.read_terms_update(current.terms())?);

        if update.is_empty() {
            writeln!(self.output, "Failed: No changes were made")?;
            return Ok(());
        }

        self.store.modify(&id, &update)?;
        writeln!(
            self.output,
            "Success: Staff information has been updated successfully"
        )?;
        Ok(())
    }

    fn read_terms_update(&mut self, terms: &StaffTerms) -> Step<TermsUpdate> {
        let update = match terms {
            StaffTerms::Hourly(terms) => {
                let rate = self.prompt(&format!("Hourly Rate [{}]: ", terms.rate()))?;
                let rate = parse_optional("rate", &rate, parse_amount)?;
                let hours = self.prompt(&format!("Hours Worked [{}]: ", terms.hours_worked()))?;
                let hours_worked = parse_optional("hours_worked", &hours, parse_amount)?;
                TermsUpdate::Hourly { rate, hours_worked }
            }
            StaffTerms::Salaried(terms) => {
                let salary =
                    self.prompt(&format!("Annual Salary [{}]: ", terms.annual_salary()))?;
                let annual_salary = parse_optional("annual_salary", &salary, parse_amount)?;
                let bonus = self.prompt(&format!("Bonus [{}]: ", terms.bonus()))?;
                let bonus = parse_optional("bonus", &bonus, parse_amount)?;
                TermsUpdate::Salaried {
                    annual_salary,
                    bonus,
                }
            }
            StaffTerms::Intern(terms) => {
                let stipend = self.prompt(&format!("Monthly Stipend [{}]: ", terms.stipend()))?;
                let stipend = parse_optional("stipend", &stipend, parse_amount)?;
                let months = self.prompt(&format!(
                    "Duration in months [{}]: ",
                    terms.duration_months()
                ))?;
                let duration_months = parse_optional("duration_months", &months, parse_months)?;
                TermsUpdate::Intern {
                    stipend,
                    duration_months,
                }
            }
        };
        Ok(update)
    }

    fn delete(&mut self) -> Step<()> {
        let id = self.prompt("Enter staff ID to delete: ")?;
        self.store.remove(&id)?;
        writeln!(
            self.output,
            "Success: Staff member has been deleted successfully"
        )?;
        Ok(())
    }

    fn view(&mut self) -> Step<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_roster(self.store.list()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use rust_decimal::Decimal;

    fn run_script(store: &mut StaffStore<MemoryBackend>, script: &str) -> String {
        let mut output = Vec::new();
        MenuSession::new(store, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn empty_store() -> StaffStore<MemoryBackend> {
        StaffStore::open(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "e\n");
        assert!(transcript.starts_with(GREETING));
        assert!(transcript.contains("Exiting system..."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "A\nIN\nCarol\n");
        assert!(store.is_empty());
        assert!(!transcript.contains("Failed"));
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "X\nE\n");
        assert!(transcript.contains("Failed: Invalid choice selected. Please select A/M/D/V/E"));
    }

    #[test]
    fn test_add_with_unknown_type() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "A\nCT\nE\n");
        assert!(transcript.contains("Failed: Invalid staff type selected"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_with_bad_number_continues() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "A\nFT\nBob\nE2\nlots\nV\nE\n");
        assert!(transcript.contains("Failed: Invalid field 'annual_salary'"));
        assert!(transcript.contains("No staff members found"));
    }

    #[test]
    fn test_add_intern_out_of_range() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "A\nIN\nCarol\nI1\n900\n7\nE\n");
        assert!(transcript.contains("Internship duration must be between 1 and 6 months"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_name_with_comma_is_rejected() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "A\nPT\nSmith, John\nE1\n15\n40\nE\n");
        assert!(transcript.contains("Failed: Invalid field 'name': Name cannot contain commas"));
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_add_huge_salary_is_rejected_and_view_still_works() {
        let mut store = empty_store();
        let transcript = run_script(
            &mut store,
            "A\nFT\nBig\nE1\n79228162514264337593543950335\n1\nV\nE\n",
        );
        assert!(transcript.contains("Failed: Invalid field 'annual_salary': Value cannot exceed"));
        assert!(transcript.contains("No staff members found"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_duplicate_id_is_reported() {
        let mut store = empty_store();
        let transcript = run_script(
            &mut store,
            "A\nPT\nAlice\nE1\n15\n40\nA\nFT\nBob\nE1\n50000\n0\nE\n",
        );
        assert!(transcript.contains("Failed: Staff ID already exists: E1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_modify_keeps_blank_fields() {
        let mut store = empty_store();
        store
            .add(Staff::intern("Carol", "I1", Decimal::from(900), 3).unwrap())
            .unwrap();

        let transcript = run_script(&mut store, "M\nI1\n\n\n1000\n\nE\n");

        assert!(transcript.contains("Monthly Stipend [900]: "));
        assert!(transcript.contains("Success: Staff information has been updated successfully"));
        let staff = store.get("I1").unwrap();
        assert_eq!(staff.name(), "Carol");
        assert_eq!(staff.compensation(), Decimal::from(3000));
    }

    #[test]
    fn test_modify_without_changes() {
        let mut store = empty_store();
        store
            .add(Staff::hourly("Alice", "E1", Decimal::from(15), Decimal::from(40)).unwrap())
            .unwrap();
        let transcript = run_script(&mut store, "M\nE1\n\n\n\n\nE\n");
        assert!(transcript.contains("Failed: No changes were made"));
    }

    #[test]
    fn test_modify_unknown_id() {
        let mut store = empty_store();
        let transcript = run_script(&mut store, "m\nE9\nE\n");
        assert!(transcript.contains("Failed: Staff member not found"));
    }

    #[test]
    fn test_delete_and_view() {
        let mut store = empty_store();
        store
            .add(Staff::hourly("Alice", "E1", Decimal::from(15), Decimal::from(40)).unwrap())
            .unwrap();

        let transcript = run_script(&mut store, "V\nD\nE1\nV\nD\nE1\nE\n");

        assert!(transcript.contains("1. Hourly Staff - Alice (ID: E1)\n   Salary/Stipend: $600.00"));
        assert!(transcript.contains("Success: Staff member has been deleted successfully"));
        assert!(transcript.contains("No staff members found"));
        assert!(transcript.contains("Failed: Staff not found: E1"));
    }

    #[test]
    fn test_save_failure_is_reported_and_session_continues() {
        let mut store = empty_store();
        store.backend().set_fail_writes(true);

        let transcript = run_script(&mut store, "A\nPT\nAlice\nE1\n15\n40\nV\nE\n");

        assert!(transcript.contains("Failed: Save failed for 'memory://stafflist'"));
        assert!(transcript.contains("No staff members found"));
        assert!(transcript.contains("Exiting system..."));
    }
}
