pub mod palette;
mod badge;
mod in_view;
mod section_heading;
mod theme_toggle;

pub use badge::Badge;
pub use in_view::{ reveal_class, use_in_view, watch_visibility, InView, PENDING_CLASS };
pub use section_heading::SectionHeading;
pub use theme_toggle::ThemeToggle;
