mod home;
pub use home::Home;

mod auth;
pub use auth::AuthPage;

mod chat;
pub use chat::ChatPage;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::AdminDashboard;
