use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::NutritionPlan;
use crate::planner::builder::NutritionPlanBuilder;

/// Macro-nutrient ratios as written in a plan request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub carbs: i32,
    pub protein: i32,
    pub fat: i32,
}

/// Plan configuration read from JSON. Absent fields leave the builder as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub caloric_intake: Option<i32>,
    pub macronutrients: Option<MacroRatios>,
    pub meal_plans: Option<Vec<String>>,
    pub fitness_goal: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
}

impl PlanRequest {
    /// The configuration the `plan` demo uses when no file is given.
    pub fn demo() -> Self {
        Self {
            caloric_intake: Some(2000),
            macronutrients: Some(MacroRatios {
                carbs: 50,
                protein: 30,
                fat: 20,
            }),
            meal_plans: Some(vec!["Meal 1".to_string(), "Meal 2".to_string()]),
            fitness_goal: Some("Weight Loss".to_string()),
            dietary_restrictions: Some(vec!["Gluten-free".to_string(), "Vegan".to_string()]),
        }
    }

    /// Feed every present field through the builder's setters.
    pub fn apply<B: NutritionPlanBuilder>(&self, mut builder: B) -> B {
        if let Some(kcal) = self.caloric_intake {
            builder = builder.caloric_intake(kcal);
        }
        if let Some(m) = self.macronutrients {
            builder = builder.macronutrient_ratios(m.carbs, m.protein, m.fat);
        }
        if let Some(meals) = &self.meal_plans {
            builder = builder.meal_plans(meals.iter().cloned());
        }
        if let Some(goal) = &self.fitness_goal {
            builder = builder.fitness_goal(goal.clone());
        }
        if let Some(restrictions) = &self.dietary_restrictions {
            builder = builder.dietary_restrictions(restrictions.iter().cloned());
        }
        builder
    }
}

/// Load a plan request from a JSON file.
pub fn load_plan_request<P: AsRef<Path>>(path: P) -> Result<PlanRequest> {
    let content = fs::read_to_string(path.as_ref())?;
    let request: PlanRequest = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), "Loaded plan request");
    Ok(request)
}

/// Save a built plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &NutritionPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
