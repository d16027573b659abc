pub mod params;
pub mod utils;
pub mod value;
