//! Public library API for reading and writing WebFishing `.sav` files.

/// Godot variant codec, save file envelope, and JSON text form.
pub mod save;
