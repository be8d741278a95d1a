//! Small building blocks shared by the timeline components.
pub mod fields;

pub use fields::NumberInput;
