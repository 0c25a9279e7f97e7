//! Domain models for the irrigation engine

mod crop;
mod decision;
mod growth;
mod requirement;
mod weather;

pub use crop::*;
pub use decision::*;
pub use growth::*;
pub use requirement::*;
pub use weather::*;
