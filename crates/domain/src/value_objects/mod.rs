//! Domain value objects

mod city_name;

pub use city_name::CityName;
