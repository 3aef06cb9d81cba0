//! Text rendering of store listings.

use crate::store::{Roster, RosterEntry};

/// Message shown when the store holds no records.
pub const EMPTY_ROSTER_MESSAGE: &str = "No staff members found";

/// Renders one listing row as two lines.
///
/// # Example
///
/// ```
/// use staff_payroll::cli::render_entry;
/// use staff_payroll::store::RosterEntry;
/// use rust_decimal::Decimal;
///
/// let entry = RosterEntry {
///     index: 1,
///     label: "Hourly Staff",
///     name: "Alice",
///     id: "E1",
///     compensation: Decimal::from(600),
/// };
/// assert_eq!(
///     render_entry(&entry),
///     "1. Hourly Staff - Alice (ID: E1)\n   Salary/Stipend: $600.00"
/// );
/// ```
pub fn render_entry(entry: &RosterEntry<'_>) -> String {
    format!(
        "{}. {} - {} (ID: {})\n   Salary/Stipend: ${:.2}",
        entry.index, entry.label, entry.name, entry.id, entry.compensation
    )
}

/// Renders a whole listing, or the empty message when there is none.
pub fn render_roster(roster: Option<Roster<'_>>) -> String {
    match roster {
        None => EMPTY_ROSTER_MESSAGE.to_string(),
        Some(roster) => {
            let rows: Vec<String> = roster.iter().map(|entry| render_entry(&entry)).collect();
            format!("Current Staff List:\n{}", rows.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Staff;
    use crate::storage::MemoryBackend;
    use crate::store::StaffStore;
    use rust_decimal::Decimal;

    #[test]
    fn test_render_empty_store() {
        let store = StaffStore::open(MemoryBackend::new()).unwrap();
        assert_eq!(render_roster(store.list()), "No staff members found");
    }

    #[test]
    fn test_render_pads_to_two_decimals() {
        let mut store = StaffStore::open(MemoryBackend::new()).unwrap();
        store
            .add(Staff::salaried("Bob", "E2", Decimal::from(50000), Decimal::new(5, 1)).unwrap())
            .unwrap();
        store
            .add(Staff::intern("Carol", "I1", Decimal::new(8335, 1), 3).unwrap())
            .unwrap();

        assert_eq!(
            render_roster(store.list()),
            "Current Staff List:\n\
             1. Salaried Staff - Bob (ID: E2)\n   Salary/Stipend: $50000.50\n\
             2. Intern - Carol (ID: I1)\n   Salary/Stipend: $2500.50"
        );
    }
}
