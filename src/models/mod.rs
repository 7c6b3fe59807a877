mod maze;
mod plan;

pub use maze::{
    Direction, Room, RoomId, Wall, WallId, DOOR_CLOSED_MESSAGE, DOOR_OPEN_MESSAGE,
};
pub use plan::{Macronutrient, NutritionPlan};
