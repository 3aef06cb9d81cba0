//! Listing view over the store's records.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Staff;

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry<'a> {
    /// 1-based position in the store.
    pub index: usize,
    /// Category label, e.g. "Hourly Staff".
    pub label: &'static str,
    /// The staff member's name.
    pub name: &'a str,
    /// The staff id.
    pub id: &'a str,
    /// Computed compensation, rounded to cents.
    pub compensation: Decimal,
}

/// A non-empty, restartable listing of the store's records in insertion order.
///
/// Rows are computed lazily each time [`Roster::iter`] is called.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    records: &'a [Staff],
}

impl<'a> Roster<'a> {
    pub(crate) fn new(records: &'a [Staff]) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no rows. The store never hands out an empty roster.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the rows from the start.
    pub fn iter(self) -> impl Iterator<Item = RosterEntry<'a>> + 'a {
        self.records
            .iter()
            .enumerate()
            .map(|(position, staff)| RosterEntry {
                index: position + 1,
                label: staff.category().label(),
                name: staff.name(),
                id: staff.id(),
                compensation: staff.compensation().round_dp(2),
            })
    }
}

impl<'a> IntoIterator for Roster<'a> {
    type Item = RosterEntry<'a>;
    type IntoIter = Box<dyn Iterator<Item = RosterEntry<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_can_be_iterated_twice() {
        let records = vec![
            Staff::hourly("Alice", "E1", Decimal::new(150, 1), Decimal::from(40)).unwrap(),
            Staff::intern("Carol", "I1", Decimal::from(900), 2).unwrap(),
        ];
        let roster = Roster::new(&records);

        let first: Vec<_> = roster.iter().collect();
        let second: Vec<_> = roster.iter().collect();

        assert_eq!(first, second);
        assert_eq!(first[0].index, 1);
        assert_eq!(first[0].label, "Hourly Staff");
        assert_eq!(first[1].index, 2);
        assert_eq!(first[1].compensation, Decimal::from(1800));
    }

    #[test]
    fn test_compensation_rounded_to_cents() {
        let records =
            vec![Staff::hourly("Dana", "E4", Decimal::new(12345, 3), Decimal::from(3)).unwrap()];
        let entry = Roster::new(&records).iter().next().unwrap();
        assert_eq!(entry.compensation, Decimal::new(3704, 2));
    }
}
