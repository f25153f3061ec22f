//! adaptest-core — Rasch (one-parameter logistic) ability estimation for
//! adaptive assessments.
//!
//! The engine is a set of pure, synchronous functions: callers own the
//! session state (response history, question counter) and thread it
//! through every call. Difficulties and abilities cross the engine
//! boundary on the external 0–100 scale; the internal −3..+3 logit scale
//! is reachable only through the [`scale`] mapper.

pub mod config;
pub mod discrimination;
pub mod efficiency;
pub mod error;
pub mod estimator;
pub mod model;
pub mod parser;
pub mod rasch;
pub mod report;
pub mod scale;
pub mod session;
pub mod stopping;

pub use config::EngineConfig;
pub use error::EngineError;
pub use model::{
    AbilityEstimate, DiscriminationResult, EarlyStoppingVerdict, EfficiencyReport, KnowledgeLevel,
    Response,
};
