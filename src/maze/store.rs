use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DemoError, Result};
use crate::models::{Direction, Room, RoomId, Wall, WallId};

/// Rooms keyed by id, plus the arena of walls they point into.
///
/// A door is stored once and referenced by both of its rooms.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Maze {
    rooms: BTreeMap<RoomId, Room>,
    walls: Vec<Wall>,
}

impl Maze {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room under its id, replacing any room already there.
    pub fn add_room(&mut self, room: Room) -> Option<Room> {
        self.rooms.insert(room.room_no(), room)
    }

    /// Store a wall in the arena and return its id.
    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        let id = WallId(self.walls.len());
        self.walls.push(wall);
        id
    }

    pub fn room_no(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_no_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.get(id.0)
    }

    /// The wall on one side of a room.
    pub fn side(&self, room: RoomId, direction: Direction) -> Option<&Wall> {
        self.room_no(room)
            .and_then(|r| self.wall(r.side(direction)))
    }

    /// Try to pass through one side of a room.
    pub fn enter(&self, room: RoomId, direction: Direction) -> Result<&'static str> {
        self.side(room, direction)
            .map(Wall::enter)
            .ok_or(DemoError::RoomNotFound(room))
    }

    /// Room ids in ascending order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    /// Count of rooms in the maze.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check if the maze has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of walls in the arena, including ones no room points at anymore.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_room(maze: &mut Maze, id: RoomId) -> Room {
        let sides = Direction::ALL.map(|d| maze.add_wall(Wall::plain(d)));
        Room::new(id, sides)
    }

    #[test]
    fn test_add_room_replaces_same_id() {
        let mut maze = Maze::new();
        let first = plain_room(&mut maze, 3);
        let second = plain_room(&mut maze, 3);
        let second_north = second.side(Direction::North);

        assert!(maze.add_room(first).is_none());
        assert!(maze.add_room(second).is_some());
        assert_eq!(maze.len(), 1);
        assert_eq!(maze.room_no(3).unwrap().side(Direction::North), second_north);
    }

    #[test]
    fn test_enter_unknown_room() {
        let maze = Maze::new();
        let err = maze.enter(4, Direction::East).unwrap_err();
        assert!(matches!(err, DemoError::RoomNotFound(4)));
    }

    #[test]
    fn test_room_ids_sorted() {
        let mut maze = Maze::new();
        for id in [5, 1, 3] {
            let room = plain_room(&mut maze, id);
            maze.add_room(room);
        }
        assert_eq!(maze.room_ids().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(maze.wall_count(), 12);
    }
}
