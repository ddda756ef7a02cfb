mod login_view;
mod register_view;

pub use login_view::LoginView;
pub use register_view::RegisterView;
