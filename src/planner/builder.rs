use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{Macronutrient, NutritionPlan};

/// Plan fields accumulated by a builder before `build`.
///
/// Every field may be left unset; no relation between fields is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedPlan {
    pub caloric_intake: Option<i32>,
    pub macro_nutrients: Option<BTreeMap<Macronutrient, i32>>,
    pub meal_plans: Option<Vec<String>>,
    pub fitness_goal: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
}

impl StagedPlan {
    /// Snapshot the staged fields into a plan, filling gaps with defaults.
    ///
    /// Collections are cloned, so the plan shares nothing with the builder.
    pub fn snapshot(&self) -> NutritionPlan {
        NutritionPlan::new(
            self.caloric_intake.unwrap_or_default(),
            self.macro_nutrients.clone().unwrap_or_default(),
            self.meal_plans.clone().unwrap_or_default(),
            self.fitness_goal.clone(),
            self.dietary_restrictions.clone().unwrap_or_default(),
        )
    }
}

/// Fluent construction of a [`NutritionPlan`].
///
/// Setters are shared by every plan variant; each variant decides how the
/// staged fields are assembled in [`build`](NutritionPlanBuilder::build).
pub trait NutritionPlanBuilder {
    /// Read access to the staged fields.
    fn staged(&self) -> &StagedPlan;

    /// Write access to the staged fields.
    fn staged_mut(&mut self) -> &mut StagedPlan;

    /// Assemble a plan from the current staged fields.
    fn build(&self) -> NutritionPlan;

    fn caloric_intake(mut self, kcal: i32) -> Self
    where
        Self: Sized,
    {
        self.staged_mut().caloric_intake = Some(kcal);
        self
    }

    fn macronutrient_ratios(mut self, carbs: i32, protein: i32, fat: i32) -> Self
    where
        Self: Sized,
    {
        let ratios = BTreeMap::from([
            (Macronutrient::Carbs, carbs),
            (Macronutrient::Protein, protein),
            (Macronutrient::Fat, fat),
        ]);
        self.staged_mut().macro_nutrients = Some(ratios);
        self
    }

    fn meal_plans<I, S>(mut self, meals: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staged_mut().meal_plans = Some(meals.into_iter().map(Into::into).collect());
        self
    }

    fn fitness_goal(mut self, goal: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.staged_mut().fitness_goal = Some(goal.into());
        self
    }

    fn dietary_restrictions<I, S>(mut self, restrictions: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staged_mut().dietary_restrictions =
            Some(restrictions.into_iter().map(Into::into).collect());
        self
    }
}

/// Builder for weight-loss plans.
#[derive(Debug, Clone, Default)]
pub struct WeightLossPlanBuilder {
    staged: StagedPlan,
}

impl WeightLossPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NutritionPlanBuilder for WeightLossPlanBuilder {
    fn staged(&self) -> &StagedPlan {
        &self.staged
    }

    fn staged_mut(&mut self) -> &mut StagedPlan {
        &mut self.staged
    }

    fn build(&self) -> NutritionPlan {
        debug!(
            kcal = ?self.staged.caloric_intake,
            meals = self.staged.meal_plans.as_ref().map_or(0, Vec::len),
            "Building weight-loss plan"
        );
        self.staged.snapshot()
    }
}
