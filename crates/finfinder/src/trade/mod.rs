//! Trade-finance product recommendation: the scenario state machine, its
//! question catalog, answer parsing, and the static product briefings.

mod parser;
mod products;
mod questions;
mod scenario;


pub use parser::parse_answer;
pub use products::{
    recommend_product, DocumentRequirement, ProductCode, ProductRecommendation,
    RequirementCategory,
};
pub use questions::{next_question, TradeQuestion};
pub use scenario::{ScenarioUpdate, TradeScenario, TradeType};
