//! Page components.

mod account;
mod recipe;

pub use account::AccountPage;
pub use recipe::RecipePage;
