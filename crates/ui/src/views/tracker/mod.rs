mod actions;
mod components;
mod icons;
pub(crate) mod state;
mod view;

pub use actions::TrackerIntent;
pub use components::TrackerBoard;
pub use view::TrackerView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
