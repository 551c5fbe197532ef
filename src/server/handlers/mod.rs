pub mod drivers;
pub mod riders;
