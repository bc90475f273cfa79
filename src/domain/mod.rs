// Domain layer - value objects and errors for the trim operation

pub mod errors;
pub mod model;
