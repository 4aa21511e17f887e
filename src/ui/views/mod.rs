pub mod quiz;
pub mod result;
pub mod theory;
