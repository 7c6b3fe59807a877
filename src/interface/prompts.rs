use dialoguer::{Confirm, Input};

use crate::error::{DemoError, Result};
use crate::planner::{MacroRatios, PlanRequest};

/// Split a comma-separated answer into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn prompt_number(prompt: &str, default: i32) -> Result<i32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DemoError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for the daily caloric intake.
pub fn prompt_caloric_intake(default: i32) -> Result<i32> {
    prompt_number("Daily caloric intake (kcal)", default)
}

/// Prompt for carbs/protein/fat percentages. The sum is not checked.
pub fn prompt_macro_ratios(default: MacroRatios) -> Result<MacroRatios> {
    Ok(MacroRatios {
        carbs: prompt_number("Carbs (%)", default.carbs)?,
        protein: prompt_number("Protein (%)", default.protein)?,
        fat: prompt_number("Fat (%)", default.fat)?,
    })
}

/// Prompt for a comma-separated list.
pub fn prompt_list(prompt: &str, default: &[String]) -> Result<Vec<String>> {
    let input = prompt_text(&format!("{} (comma-separated)", prompt), &default.join(", "))?;
    Ok(split_list(&input))
}

/// Prompt for the fitness goal. An empty answer leaves the goal unset.
pub fn prompt_fitness_goal(default: Option<&str>) -> Result<Option<String>> {
    let input = prompt_text("Fitness goal", default.unwrap_or(""))?;
    let goal = input.trim();
    Ok((!goal.is_empty()).then(|| goal.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every plan field, offering `defaults` as the answers.
pub fn collect_plan_request(defaults: &PlanRequest) -> Result<PlanRequest> {
    let caloric_intake = prompt_caloric_intake(defaults.caloric_intake.unwrap_or(2000))?;

    let macronutrients = if prompt_yes_no("Set macro-nutrient ratios?", true)? {
        let fallback = defaults.macronutrients.unwrap_or(MacroRatios {
            carbs: 50,
            protein: 30,
            fat: 20,
        });
        Some(prompt_macro_ratios(fallback)?)
    } else {
        None
    };

    let meal_plans = prompt_list(
        "Meal plans",
        defaults.meal_plans.as_deref().unwrap_or_default(),
    )?;
    let fitness_goal = prompt_fitness_goal(defaults.fitness_goal.as_deref())?;
    let dietary_restrictions = prompt_list(
        "Dietary restrictions",
        defaults.dietary_restrictions.as_deref().unwrap_or_default(),
    )?;

    Ok(PlanRequest {
        caloric_intake: Some(caloric_intake),
        macronutrients,
        meal_plans: Some(meal_plans),
        fitness_goal,
        dietary_restrictions: Some(dietary_restrictions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" Vegan, ,Gluten-free ,"),
            vec!["Vegan".to_string(), "Gluten-free".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
