//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod itinerary;
pub mod math;
pub mod trigger;

pub use command::Command;
pub use itinerary::ItineraryRequest;
pub use math::{BinaryOp, MathOperation};
pub use trigger::{Trigger, TriggerTable};
