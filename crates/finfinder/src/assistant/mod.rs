//! Application drafting: turns a settled lender and product choice into a
//! preparation checklist, an introduction e-mail, and pre-filled form data.

mod draft;

pub use draft::{
    generate_draft, ApplicationDraft, ApplicationFields, DraftChecklistItem, DraftParams,
};
