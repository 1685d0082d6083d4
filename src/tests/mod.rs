// Make common test utilities available
#[cfg(test)]
mod common;
#[cfg(test)]
mod preference;
#[cfg(test)]
mod content;
#[cfg(test)]
mod configs;
#[cfg(test)]
mod theme_context;
#[cfg(test)]
mod palette;
