// File: src/lib.rs
// Purpose: Clinic forms, predefined schemas, session context and configuration

//! # nhakhoa-forms
//!
//! Typed records for the clinic's account, clinic, service and appointment
//! forms, each carrying its rule table, plus the explicit [`Session`] that
//! replaces ad-hoc "current user" lookups.
//!
//! ```rust
//! use nhakhoa_forms::{FormRecord, ServiceForm};
//! use nhakhoa_validation::Validator;
//!
//! let form = ServiceForm {
//!     ten_dich_vu: "Trám răng".to_string(),
//!     don_gia: "-50".to_string(),
//!     ma_loai_dich_vu: "2".to_string(),
//! };
//! let errors = form.validate(&Validator::default()).unwrap_err();
//! assert_eq!(errors.fields(), vec!["donGia"]);
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod session;

pub use config::AppConfig;
pub use error::{SessionError, SessionResult};
pub use forms::{
    AccountForm, AppointmentForm, ClinicForm, FormRecord, SchemaKind, ServiceForm,
};
pub use session::{
    CurrentUser, FileSessionSource, MemorySessionSource, Role, Session, SessionSource,
};
