mod accounts;
mod galaxy;

pub use accounts::AccountsCommands;
pub use galaxy::GalaxyCommands;
