pub mod coordinate;
pub mod forecast;
pub mod geometry;
pub mod level_type;
pub mod parameter_name;
pub mod parameter_value;
pub mod tolerant;
pub mod weather_symbol;
