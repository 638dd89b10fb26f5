//! Form rendering

mod field_renderer;
mod login_form;
mod naver_form;

pub use login_form::draw as draw_login;
pub use naver_form::draw as draw_naver_create;

/// Rows used by one field: bordered input plus an error line
pub const FIELD_HEIGHT: u16 = 4;
