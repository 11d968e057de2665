//! Pipeline tests
//!
//! End-to-end conversions of whole documents and property checks over generated input.

mod end_to_end;
mod properties;
