//! Line codec for staff records.
//!
//! Each record is stored as one comma-separated line:
//!
//! ```text
//! <TAG>,<name>,<id>,<field3>,<field4>
//! ```
//!
//! | Tag | Category | field3 | field4 |
//! |-----|----------|--------|--------|
//! | `PT` | Hourly | rate | hours worked |
//! | `FT` | Salaried | annual salary | bonus (optional, defaults to 0) |
//! | `IN` | Intern | stipend | duration in months |
//!
//! Commas are not escaped. Names and ids reject them on construction, so
//! every encoded record decodes back to the same fields.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    HourlyTerms, InternTerms, SalariedTerms, Staff, StaffCategory, StaffTerms,
};

/// Tag for hourly records.
pub const HOURLY_TAG: &str = "PT";

/// Tag for salaried records.
pub const SALARIED_TAG: &str = "FT";

/// Tag for intern records.
pub const INTERN_TAG: &str = "IN";

const FIELD_SEPARATOR: char = ',';

/// Returns the stored tag for a category.
pub fn category_tag(category: StaffCategory) -> &'static str {
    match category {
        StaffCategory::Hourly => HOURLY_TAG,
        StaffCategory::Salaried => SALARIED_TAG,
        StaffCategory::Intern => INTERN_TAG,
    }
}

/// Returns the category for a stored tag, or `None` for an unknown tag.
pub fn category_from_tag(tag: &str) -> Option<StaffCategory> {
    match tag {
        HOURLY_TAG => Some(StaffCategory::Hourly),
        SALARIED_TAG => Some(StaffCategory::Salaried),
        INTERN_TAG => Some(StaffCategory::Intern),
        _ => None,
    }
}

/// Encodes a record as a single line without a trailing newline.
///
/// # Example
///
/// ```
/// use staff_payroll::codec::encode_staff;
/// use staff_payroll::models::Staff;
/// use rust_decimal::Decimal;
///
/// let staff = Staff::salaried("Bob", "E2", Decimal::from(50000), Decimal::from(1000)).unwrap();
/// assert_eq!(encode_staff(&staff), "FT,Bob,E2,50000,1000");
/// ```
pub fn encode_staff(staff: &Staff) -> String {
    let (first, second) = match staff.terms() {
        StaffTerms::Hourly(terms) => (terms.rate().to_string(), terms.hours_worked().to_string()),
        StaffTerms::Salaried(terms) => {
            (terms.annual_salary().to_string(), terms.bonus().to_string())
        }
        StaffTerms::Intern(terms) => {
            (terms.stipend().to_string(), terms.duration_months().to_string())
        }
    };

    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}",
        category_tag(staff.category()),
        staff.name(),
        staff.id(),
        first,
        second,
        sep = FIELD_SEPARATOR
    )
}

/// Decodes one stored line.
///
/// Returns `Ok(None)` for lines that are skipped: fewer than two fields
/// (this includes blank lines) or an unknown tag. A recognized tag with
/// missing or malformed fields, or with values that violate the category's
/// constraints, fails with [`PayrollError::MalformedRecord`].
///
/// `line_number` is 1-based and only used in error messages.
///
/// # Example
///
/// ```
/// use staff_payroll::codec::decode_staff;
/// use rust_decimal::Decimal;
///
/// let staff = decode_staff("FT,Bob,E2,50000", 1).unwrap().unwrap();
/// assert_eq!(staff.compensation(), Decimal::from(50000));
///
/// assert!(decode_staff("garbage", 2).unwrap().is_none());
/// assert!(decode_staff("XX,Nobody,E9,1,1", 3).unwrap().is_none());
/// assert!(decode_staff("PT,Alice,E1,abc,40", 4).is_err());
/// ```
pub fn decode_staff(line: &str, line_number: usize) -> PayrollResult<Option<Staff>> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() < 2 {
        return Ok(None);
    }

    let Some(category) = category_from_tag(fields[0]) else {
        return Ok(None);
    };

    let reader = FieldReader {
        fields: &fields,
        line_number,
    };

    let name = reader.text(1, "name")?;
    let id = reader.text(2, "id")?;
    let terms: StaffTerms = match category {
        StaffCategory::Hourly => {
            let rate = reader.decimal(3, "rate")?;
            let hours = reader.decimal(4, "hours_worked")?;
            reader.validated(HourlyTerms::new(rate, hours))?.into()
        }
        StaffCategory::Salaried => {
            let salary = reader.decimal(3, "annual_salary")?;
            let bonus = if fields.len() > 4 {
                reader.decimal(4, "bonus")?
            } else {
                Decimal::ZERO
            };
            reader.validated(SalariedTerms::new(salary, bonus))?.into()
        }
        StaffCategory::Intern => {
            let stipend = reader.decimal(3, "stipend")?;
            let months = reader.integer(4, "duration_months")?;
            reader.validated(InternTerms::new(stipend, months))?.into()
        }
    };

    reader.validated(Staff::new(name, id, terms)).map(Some)
}

/// Positional access to the fields of one line, with line-numbered errors.
struct FieldReader<'a> {
    fields: &'a [&'a str],
    line_number: usize,
}

impl FieldReader<'_> {
    fn malformed(&self, message: String) -> PayrollError {
        PayrollError::MalformedRecord {
            line: self.line_number,
            message,
        }
    }

    fn text(&self, index: usize, field: &str) -> PayrollResult<&str> {
        self.fields
            .get(index)
            .copied()
            .ok_or_else(|| self.malformed(format!("missing field '{}'", field)))
    }

    fn decimal(&self, index: usize, field: &str) -> PayrollResult<Decimal> {
        let raw = self.text(index, field)?.trim();
        Decimal::from_str(raw)
            .map_err(|_| self.malformed(format!("invalid number '{}' for {}", raw, field)))
    }

    fn integer(&self, index: usize, field: &str) -> PayrollResult<u32> {
        let raw = self.text(index, field)?.trim();
        raw.parse::<u32>()
            .map_err(|_| self.malformed(format!("invalid integer '{}' for {}", raw, field)))
    }

    fn validated<T>(&self, result: PayrollResult<T>) -> PayrollResult<T> {
        result.map_err(|e| self.malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn decode_one(line: &str) -> Staff {
        decode_staff(line, 1)
            .expect("decode failed")
            .expect("line was skipped")
    }

    #[test]
    fn test_encode_hourly_keeps_decimal_scale() {
        let staff = Staff::hourly("Alice", "E1", dec("15.0"), dec("40")).unwrap();
        assert_eq!(encode_staff(&staff), "PT,Alice,E1,15.0,40");
    }

    #[test]
    fn test_encode_intern() {
        let staff = Staff::intern("Carol", "I1", dec("850.50"), 4).unwrap();
        assert_eq!(encode_staff(&staff), "IN,Carol,I1,850.50,4");
    }

    #[test]
    fn test_decode_salaried_with_bonus() {
        let staff = decode_one("FT,Bob,E2,50000,1000");
        assert_eq!(staff.category(), StaffCategory::Salaried);
        assert_eq!(staff.name(), "Bob");
        assert_eq!(staff.id(), "E2");
        assert_eq!(staff.compensation(), dec("51000"));
    }

    #[test]
    fn test_decode_salaried_bonus_defaults_to_zero() {
        let staff = decode_one("FT,Bob,E2,50000");
        match staff.terms() {
            StaffTerms::Salaried(terms) => assert_eq!(terms.bonus(), Decimal::ZERO),
            other => panic!("Expected salaried terms, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_trims_line_endings() {
        let staff = decode_one("IN,Carol,I1,900,3\r\n");
        assert_eq!(staff.compensation(), dec("2700"));
    }

    #[test]
    fn test_decode_skips_single_field_lines() {
        assert!(decode_staff("PT", 1).unwrap().is_none());
        assert!(decode_staff("", 2).unwrap().is_none());
        assert!(decode_staff("   ", 3).unwrap().is_none());
    }

    #[test]
    fn test_decode_skips_unknown_tag() {
        assert!(decode_staff("CT,Dave,C1,100,2", 1).unwrap().is_none());
        assert!(decode_staff("pt,Alice,E1,15,40", 2).unwrap().is_none());
    }

    #[test]
    fn test_decode_malformed_number_reports_line() {
        match decode_staff("PT,Alice,E1,fifteen,40", 7) {
            Err(PayrollError::MalformedRecord { line, message }) => {
                assert_eq!(line, 7);
                assert!(message.contains("rate"), "message was: {}", message);
            }
            other => panic!("Expected MalformedRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_fractional_duration_is_malformed() {
        assert!(matches!(
            decode_staff("IN,Carol,I1,900,3.5", 1),
            Err(PayrollError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_decode_missing_fields_is_malformed() {
        assert!(matches!(
            decode_staff("PT,Alice", 1),
            Err(PayrollError::MalformedRecord { .. })
        ));
        assert!(matches!(
            decode_staff("IN,Carol,I1,900", 1),
            Err(PayrollError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_decode_out_of_range_value_is_malformed() {
        match decode_staff("IN,Carol,I1,900,12", 4) {
            Err(PayrollError::MalformedRecord { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("between 1 and 6"));
            }
            other => panic!("Expected MalformedRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_amount_above_limit_is_malformed() {
        match decode_staff("FT,Big,E1,79228162514264337593543950335,1", 2) {
            Err(PayrollError::MalformedRecord { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("cannot exceed"), "message was: {}", message);
            }
            other => panic!("Expected MalformedRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_tags_map_both_ways() {
        for category in StaffCategory::ALL {
            assert_eq!(category_from_tag(category_tag(category)), Some(category));
        }
    }

    fn arb_staff() -> impl Strategy<Value = Staff> {
        let name = "[A-Za-z][A-Za-z ]{0,15}";
        let id = "[A-Z][0-9]{1,4}";
        prop_oneof![
            (name, id, 1i64..1_000_000, 0i64..100_000).prop_map(|(n, i, r, h)| {
                Staff::hourly(n, i, Decimal::new(r, 2), Decimal::new(h, 1)).unwrap()
            }),
            (name, id, 1i64..10_000_000, 0i64..1_000_000).prop_map(|(n, i, s, b)| {
                Staff::salaried(n, i, Decimal::from(s), Decimal::new(b, 2)).unwrap()
            }),
            (name, id, 1i64..500_000, 1u32..=6).prop_map(|(n, i, s, m)| {
                Staff::intern(n, i, Decimal::new(s, 2), m).unwrap()
            }),
        ]
    }

    proptest! {
        #[test]
        fn prop_decode_reverses_encode(staff in arb_staff()) {
            let line = encode_staff(&staff);
            let decoded = decode_staff(&line, 1).unwrap().unwrap();
            prop_assert_eq!(decoded, staff);
        }
    }
}
