mod layout;
pub use layout::{AppLayout, RequireAuth};

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;
