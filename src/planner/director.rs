use tracing::{debug, info};

use crate::error::{DemoError, Result};
use crate::models::NutritionPlan;
use crate::planner::builder::NutritionPlanBuilder;

/// Holds one configured builder and asks it for plans.
#[derive(Default)]
pub struct NutritionPlanDirector {
    builder: Option<Box<dyn NutritionPlanBuilder>>,
}

impl NutritionPlanDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held builder, returning the previous one.
    pub fn set_builder(
        &mut self,
        builder: Box<dyn NutritionPlanBuilder>,
    ) -> Option<Box<dyn NutritionPlanBuilder>> {
        debug!(replacing = self.builder.is_some(), "Setting plan builder");
        self.builder.replace(builder)
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Build a plan with the held builder.
    pub fn create_nutrition_plan(&self) -> Result<NutritionPlan> {
        let builder = self.builder.as_ref().ok_or(DemoError::BuilderNotSet)?;
        let plan = builder.build();
        info!(kcal = plan.daily_caloric_intake(), "Created nutrition plan");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::builder::WeightLossPlanBuilder;

    #[test]
    fn test_missing_builder_is_error() {
        let director = NutritionPlanDirector::new();
        let err = director.create_nutrition_plan().unwrap_err();

        assert!(matches!(err, DemoError::BuilderNotSet));
        assert_eq!(err.to_string(), "NutritionPlanBuilder not set!");
    }

    #[test]
    fn test_set_builder_replaces_previous() {
        let mut director = NutritionPlanDirector::new();
        assert!(director
            .set_builder(Box::new(WeightLossPlanBuilder::new().caloric_intake(1200)))
            .is_none());

        let previous =
            director.set_builder(Box::new(WeightLossPlanBuilder::new().caloric_intake(1900)));
        assert_eq!(previous.map(|b| b.build().daily_caloric_intake()), Some(1200));

        let plan = director.create_nutrition_plan().unwrap();
        assert_eq!(plan.daily_caloric_intake(), 1900);
    }
}
