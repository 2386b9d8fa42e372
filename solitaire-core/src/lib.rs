pub mod prelude;
pub mod rules;
