pub mod cat;
pub mod mmrc;
