mod button;
mod input;
mod spinner;
mod status_banner;

pub(crate) use button::Button;
pub(crate) use input::{PasswordInput, TextInput};
pub(crate) use spinner::Spinner;
pub(crate) use status_banner::StatusBanner;
