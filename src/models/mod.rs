mod plant;
mod summary;
mod watered;

pub use plant::{Plant, default_plants};
pub use summary::{Progress, Summary};
pub use watered::{DayStamp, WateredState};
