//! Reusable UI components.

mod carousel;
mod loading;
mod stat_card;
mod toasts;

pub use carousel::Carousel;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use toasts::Toasts;
