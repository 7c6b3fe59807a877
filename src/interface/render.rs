use std::fmt::Write;

use crate::error::{DemoError, Result};
use crate::maze::Maze;
use crate::models::{Macronutrient, NutritionPlan, RoomId, Wall};

const UNSET: &str = "unset";

/// Format a plan as the fixed-layout text report.
pub fn render_plan(plan: &NutritionPlan) -> String {
    let ratio = |m: Macronutrient| {
        plan.macro_ratio(m)
            .map_or_else(|| UNSET.to_string(), |v| v.to_string())
    };

    let mut out = String::new();
    let _ = writeln!(out, "Daily Caloric Intake: {}", plan.daily_caloric_intake());
    let _ = writeln!(
        out,
        "Macro-nutrients: Carbs: {}, Protein: {}, Fat: {}",
        ratio(Macronutrient::Carbs),
        ratio(Macronutrient::Protein),
        ratio(Macronutrient::Fat)
    );
    out.push_str("Meal Plans:\n");
    for meal in plan.meal_plans() {
        let _ = writeln!(out, "- {}", meal);
    }
    let _ = writeln!(out, "Fitness Goal: {}", plan.fitness_goal().unwrap_or(UNSET));
    let _ = writeln!(
        out,
        "Dietary Restrictions: {}",
        plan.dietary_restrictions().join(", ")
    );
    out
}

/// Print a plan report to stdout.
pub fn display_plan(plan: &NutritionPlan) {
    println!("{}", render_plan(plan));
}

/// Describe the four sides of each requested room, in the order given.
///
/// Every id must name a room in the maze.
pub fn render_maze_report<I>(maze: &Maze, ids: I) -> Result<String>
where
    I: IntoIterator<Item = RoomId>,
{
    let mut out = String::new();
    for id in ids {
        let room = maze.room_no(id).ok_or(DemoError::RoomNotFound(id))?;
        let _ = writeln!(out, "Room {} walls:", room.room_no());
        for (direction, wall) in room.sides() {
            let label = maze.wall(wall).map_or("Regular Wall", Wall::kind_label);
            let _ = writeln!(out, "Direction {}: {}", direction, label);
        }
        out.push('\n');
    }
    Ok(out)
}

/// Print a maze report to stdout.
pub fn display_maze_report<I>(maze: &Maze, ids: I) -> Result<()>
where
    I: IntoIterator<Item = RoomId>,
{
    print!("{}", render_maze_report(maze, ids)?);
    Ok(())
}
