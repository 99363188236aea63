//! Payroll concept catalog.
//!
//! The catalog is the immutable, process-wide table of concept definitions
//! every payroll calculation resolves concepts against.
//!
//! # Example
//!
//! ```
//! use finance_engine::catalog::ConceptCatalog;
//!
//! let catalog = ConceptCatalog::global();
//! for definition in catalog.required() {
//!     println!("{} is required", definition.key_name);
//! }
//! ```

mod registry;
mod table;
mod types;

pub use registry::ConceptCatalog;
pub use table::{TRANSPORT_SUBSIDY_MONTHLY, builtin_definitions};
pub use types::{CalculationSubtype, ConceptCode, ConceptDefinition};
