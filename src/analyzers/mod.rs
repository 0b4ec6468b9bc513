//! Borough grade summary, market counting, and the join between them.
//!
//! Inspection rows are de-duplicated per restaurant and scored on the fixed
//! letter-grade scale. Market records are counted per normalized borough.
//! The correlator joins both mappings on borough name.

pub mod aggregate;
pub mod correlate;
pub mod grade;
pub mod markets;
pub mod types;
pub mod utility;
