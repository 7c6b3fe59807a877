use tracing::debug;

use crate::error::{DemoError, Result};
use crate::maze::store::Maze;
use crate::models::{Direction, Room, RoomId, Wall, WallId};

/// Builds a maze one room or door at a time.
#[derive(Debug, Default)]
pub struct MazeBuilder {
    maze: Maze,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room enclosed by four plain walls.
    ///
    /// An existing room with the same id is replaced without warning.
    pub fn build_room(&mut self, id: RoomId) {
        let sides = Direction::ALL.map(|d| self.maze.add_wall(Wall::plain(d)));
        if self.maze.add_room(Room::new(id, sides)).is_some() {
            debug!(room = id, "Replaced existing room");
        } else {
            debug!(room = id, "Built room");
        }
    }

    /// Connect two rooms with one shared, closed door.
    ///
    /// The door always becomes the first room's north side and the second
    /// room's south side, whatever the rooms' layout. Both rooms must exist;
    /// otherwise the maze is left untouched.
    pub fn build_door_wall(&mut self, first: RoomId, second: RoomId) -> Result<WallId> {
        for id in [first, second] {
            if self.maze.room_no(id).is_none() {
                return Err(DemoError::RoomNotFound(id));
            }
        }

        let door = Wall::door(first, second);
        debug!(%door, "Built door wall");
        let door = self.maze.add_wall(door);

        if let Some(room) = self.maze.room_no_mut(first) {
            room.set_side(Direction::North, door);
        }
        if let Some(room) = self.maze.room_no_mut(second) {
            room.set_side(Direction::South, door);
        }
        Ok(door)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_room_leaves_maze_unchanged() {
        let mut builder = MazeBuilder::new();
        builder.build_room(1);
        let walls_before = builder.maze().wall_count();

        let err = builder.build_door_wall(1, 9).unwrap_err();
        assert!(matches!(err, DemoError::RoomNotFound(9)));
        assert_eq!(builder.maze().wall_count(), walls_before);
        assert!(!builder.maze().side(1, Direction::North).unwrap().is_door());
    }

    #[test]
    fn test_door_to_same_room() {
        let mut builder = MazeBuilder::new();
        builder.build_room(4);
        let door = builder.build_door_wall(4, 4).unwrap();

        let room = builder.maze().room_no(4).unwrap();
        assert_eq!(room.side(Direction::North), door);
        assert_eq!(room.side(Direction::South), door);
    }

    #[test]
    fn test_rebuilt_room_loses_door() {
        let mut builder = MazeBuilder::new();
        builder.build_room(1);
        builder.build_room(2);
        builder.build_door_wall(1, 2).unwrap();
        builder.build_room(1);

        let maze = builder.into_maze();
        assert!(!maze.side(1, Direction::North).unwrap().is_door());
        assert!(maze.side(2, Direction::South).unwrap().is_door());
    }
}
