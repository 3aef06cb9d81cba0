//! Interactive text menu over a [`StaffStore`](crate::store::StaffStore).
//!
//! The menu is a thin adapter: it collects input, builds records or field
//! updates, calls the store and reports the outcome. It works over any
//! `BufRead`/`Write` pair so sessions can be scripted in tests.

mod input;
mod render;
mod session;

pub use input::{parse_amount, parse_months, parse_optional};
pub use render::{render_entry, render_roster};
pub use session::MenuSession;
