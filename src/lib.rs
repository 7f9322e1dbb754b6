//! Square integer matrices with value semantics, plus the demonstration
//! driver used by the `sqmat` binary.

pub mod driver;
pub mod linalg;
