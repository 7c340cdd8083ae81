pub mod engine;
pub mod format;
pub mod state;

pub use engine::{
    derive, CalculationInput, CalculationResult, ModelSelection,
};
pub use state::SavingsCalculator;
