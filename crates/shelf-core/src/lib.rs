pub mod config;
pub mod error;
pub mod pricing;
pub mod section;
pub mod session;
pub mod wizard;

// Re-export common error type
pub use error::ShelfError;

pub use config::RootConfig;

pub use pricing::{BomInput, BillOfMaterials, Pricer, PricingError, Quote};
pub use section::{FIELDS, FieldDescriptor, FieldDomain, FieldKey, FieldValue, Section};
pub use session::{EditPointer, InputMode, SessionSnapshot, SessionStore, UserSession};
pub use wizard::{SubmitOutcome, ValidationError, Wizard, WizardState};
