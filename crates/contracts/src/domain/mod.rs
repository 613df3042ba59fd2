pub mod a001_item;
pub mod a002_floor;
pub mod a003_room;
