pub mod cli;
pub mod error;
pub mod interface;
pub mod maze;
pub mod models;
pub mod planner;

pub use error::{DemoError, Result};
pub use maze::{Maze, MazeBuilder};
pub use models::{Direction, NutritionPlan, Room, Wall, WallId};
pub use planner::{NutritionPlanBuilder, NutritionPlanDirector, WeightLossPlanBuilder};
