//! Theme-dependent class strings shared by the sections.

use crate::utils::ThemeState;

pub fn page_background(theme: ThemeState) -> &'static str {
    theme.pick(
        "bg-gradient-to-br from-slate-50 via-blue-50 to-teal-50",
        "bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900"
    )
}

pub fn heading_text(theme: ThemeState) -> &'static str {
    theme.pick("text-slate-900", "text-slate-100")
}

pub fn body_text(theme: ThemeState) -> &'static str {
    theme.pick("text-slate-600", "text-slate-300")
}

pub fn muted_text(theme: ThemeState) -> &'static str {
    theme.pick("text-slate-500", "text-slate-400")
}

pub fn glass_panel(theme: ThemeState) -> &'static str {
    theme.pick("glass", "glass glass-dark")
}

pub fn outline_button(theme: ThemeState) -> &'static str {
    theme.pick(
        "border border-slate-200 text-slate-700 hover:bg-white/60",
        "border border-slate-600 text-slate-200 hover:bg-slate-700/60"
    )
}

/// Delay of the `index`th item of a staggered list, clamped at `u32::MAX`.
pub fn delay_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

/// Stagger for the entrance animation of the `index`th item of a list.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> String {
    format!("animation-delay: {}ms;", delay_ms(base_ms, step_ms, index))
}
