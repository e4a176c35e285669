//! Fake identity synthesis: locale tables, the record model and the
//! synthesizer that joins them.

pub mod catalog;
pub mod locale;
pub mod model;
pub mod synthesizer;

pub use catalog::{fill_mask, FieldSource, LocaleCatalog, LocaleTables};
pub use locale::Locale;
pub use model::{Gender, ProfileField, ProfileRecord};
pub use synthesizer::{synthesize, synthesize_now, SynthesisOptions};
