/// Save to JSON conversion command.
pub mod decode;
/// JSON to save conversion command.
pub mod encode;
/// File and player summary command.
pub mod info;
/// Round-trip check command.
pub mod verify;

mod util;
