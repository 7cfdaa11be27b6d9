pub mod contact;
pub mod project;
pub mod user;

pub use contact::{ContactInput, ContactMessage};
pub use project::{PortfolioEntry, Project, ProjectInput, ProjectQuery};
pub use user::User;
