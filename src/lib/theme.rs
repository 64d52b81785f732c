//! Tailwind class sets shared by the auth components, kept in one place so the
//! forms and the 404 page stay visually consistent.

pub struct Theme;

impl Theme {
    /// Text and password fields; the validity border is applied as an inline style.
    pub const INPUT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700";
}

/// Visual weight of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Full-width brand button that submits a form.
    #[default]
    Primary,
    /// Borderless icon button laid over the right edge of a field.
    Inline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "w-full rounded-xl bg-red-700 px-5 py-2.5 text-center text-sm font-medium text-white hover:bg-red-800 focus:outline-none focus:ring-4 focus:ring-red-300",
            ButtonVariant::Inline => "absolute right-3 top-1/2 -translate-y-1/2 select-none text-slate-400 hover:text-slate-600",
        }
    }

    /// Opacity while disabled; only the submit button signals the in-flight state.
    pub fn disabled_opacity(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "0.7",
            ButtonVariant::Inline => "1",
        }
    }
}
