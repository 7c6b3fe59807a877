pub mod builder;
pub mod director;
pub mod request;

pub use builder::{NutritionPlanBuilder, StagedPlan, WeightLossPlanBuilder};
pub use director::NutritionPlanDirector;
pub use request::{load_plan_request, save_plan, MacroRatios, PlanRequest};
