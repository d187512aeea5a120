mod data_envelope;
mod error_body;
mod oauth_token;
mod resource;
mod user;

pub use data_envelope::AsanaData;
pub use error_body::{AsanaErrorBody, AsanaErrorEntry};
pub use oauth_token::AsanaOAuthToken;
pub use resource::AsanaResource;
pub use user::AsanaUser;
