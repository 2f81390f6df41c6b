//! Form rendering and input handling for the gradtime binary.
pub mod form;
