//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::sync_hitbox_shape;
pub(crate) use input::read_input;
pub use input::sample_input;
pub(crate) use movement::drive_motor;
