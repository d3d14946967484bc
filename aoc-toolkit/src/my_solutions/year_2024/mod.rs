pub mod day_5;
pub mod day_9;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_16;
pub mod day_18;
pub mod day_19;
