mod driver;
mod rider;
mod status;

pub use driver::Driver;
pub use rider::Rider;
pub use status::Status;
