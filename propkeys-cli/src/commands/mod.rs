pub mod common;
pub mod decode;
pub mod diff;
pub mod list;
pub mod lookup;
pub mod translate;
