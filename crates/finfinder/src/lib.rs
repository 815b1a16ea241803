//! Core matching, recommendation, and checklist logic for the FinFinder
//! lender-matching service.
//!
//! The crate is organized around the flows a funding applicant walks through:
//! browsing the lender directory ([`directory`]), submitting a qualification
//! form for ranked matches ([`matching`]), chatting through the guided
//! assistant ([`conversation`]), narrowing a trade-finance scenario to a
//! product ([`trade`]), tracking the resulting document checklist
//! ([`checklist`]), and drafting the first application package
//! ([`assistant`]). All scoring and recommendation functions are pure over
//! in-memory data; persistence sits behind repository traits.

pub mod assistant;
pub mod checklist;
pub mod config;
pub mod conversation;
pub mod directory;
pub mod error;
pub mod matching;
pub mod telemetry;
pub mod trade;
