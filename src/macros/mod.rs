//! Declaration macros
//!
//! `declaration_site!` and `migration!` inject the invoking file at compile
//! time, so no call stack inspection is needed.

mod declare;
