//! Conversion of solved visit orders into timed, costed routes.

mod evaluator;

pub use evaluator::{ClassSpeeds, EvaluationParams, RouteEvaluator};
