//! Mesto form validation
//!
//! Live validation for the gallery's popup forms (profile, new card, avatar).
//! Each form is described by a [`FormSpec`], checked field by field with the
//! rules of its [`FieldKind`], and painted through a [`FormSurface`] so the
//! same logic runs against the browser DOM or an in-memory host.
//!
//! ```
//! use mesto_forms::{FieldKind, FieldSpec, FormSpec, FormValidator, MemorySurface, ValidationConfig};
//!
//! let spec = FormSpec::new("edit-profile", "save")
//!     .field(FieldSpec::new("user-name", FieldKind::ProfileName))
//!     .field(FieldSpec::new("user-description", FieldKind::ProfileDescription));
//!
//! let mut surface = MemorySurface::for_spec(&spec);
//! surface.set_value("user-name", "Jo");
//!
//! let mut validator = FormValidator::attach(&mut surface, spec, ValidationConfig::default());
//! assert!(!validator.evaluate_form(&mut surface));
//! ```

pub mod check;
pub mod config;
pub mod failure;
pub mod kind;
pub mod rule;
pub mod spec;
pub mod surface;
pub mod validator;

pub use check::{check_field, FieldState};
pub use config::{Locale, ValidationConfig};
pub use failure::ValidationFailure;
pub use kind::FieldKind;
pub use rule::FieldRule;
pub use spec::{FieldSpec, FormSpec};
pub use surface::memory::MemorySurface;
pub use surface::{EventKind, FieldEvent, FormSurface, Target};
pub use validator::{FieldStatus, FormValidator};
