mod builder;
mod store;

pub use builder::MazeBuilder;
pub use store::Maze;
