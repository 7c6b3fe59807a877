use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the three tracked macro-nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Carbs,
    Protein,
    Fat,
}

/// A finished nutrition plan.
///
/// Plans are produced by a builder and never change afterwards. Ratios are
/// percentages and are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPlan {
    daily_caloric_intake: i32,
    macro_nutrients: BTreeMap<Macronutrient, i32>,
    meal_plans: Vec<String>,
    fitness_goal: Option<String>,
    dietary_restrictions: Vec<String>,
}

impl NutritionPlan {
    pub fn new(
        daily_caloric_intake: i32,
        macro_nutrients: BTreeMap<Macronutrient, i32>,
        meal_plans: Vec<String>,
        fitness_goal: Option<String>,
        dietary_restrictions: Vec<String>,
    ) -> Self {
        Self {
            daily_caloric_intake,
            macro_nutrients,
            meal_plans,
            fitness_goal,
            dietary_restrictions,
        }
    }

    pub fn daily_caloric_intake(&self) -> i32 {
        self.daily_caloric_intake
    }

    /// Ratio for one macro-nutrient, if it was set.
    pub fn macro_ratio(&self, nutrient: Macronutrient) -> Option<i32> {
        self.macro_nutrients.get(&nutrient).copied()
    }

    pub fn macro_nutrients(&self) -> &BTreeMap<Macronutrient, i32> {
        &self.macro_nutrients
    }

    pub fn meal_plans(&self) -> &[String] {
        &self.meal_plans
    }

    pub fn fitness_goal(&self) -> Option<&str> {
        self.fitness_goal.as_deref()
    }

    pub fn dietary_restrictions(&self) -> &[String] {
        &self.dietary_restrictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_ratio_lookup() {
        let mut ratios = BTreeMap::new();
        ratios.insert(Macronutrient::Carbs, 40);
        ratios.insert(Macronutrient::Fat, 25);
        let plan = NutritionPlan::new(1800, ratios, vec![], None, vec![]);

        assert_eq!(plan.macro_ratio(Macronutrient::Carbs), Some(40));
        assert_eq!(plan.macro_ratio(Macronutrient::Protein), None);
        assert_eq!(plan.macro_ratio(Macronutrient::Fat), Some(25));
    }

    #[test]
    fn test_macronutrient_serializes_lowercase() {
        let json = serde_json::to_string(&Macronutrient::Protein).unwrap();
        assert_eq!(json, "\"protein\"");
    }
}
