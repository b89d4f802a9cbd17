//! Reusable dashboard widgets.

mod hospital_list;
mod info_panel;
mod map_panel;
mod search_bar;
mod status_line;

pub use hospital_list::HospitalListWidget;
pub use info_panel::InfoPanelWidget;
pub use map_panel::MapPanelWidget;
pub use search_bar::SearchBarWidget;
pub use status_line::StatusLineWidget;
