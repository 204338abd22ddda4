mod overview;
pub use overview::Overview;

mod profiles;
pub use profiles::Profiles;
