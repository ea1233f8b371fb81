// Change navigation
// This crate provides the change-location record and a wrap-around cursor
// for stepping through an ordered list of changes

mod cursor;
mod location;

pub use cursor::ChangeCursor;
pub use location::ChangeLocation;
