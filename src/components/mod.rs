// ABOUTME: UI components for the guide TUI: header, step list, detail pane, help

pub mod header;
pub mod help;
pub mod layout;
pub mod resources;
pub mod step_detail;
pub mod step_list;

pub use header::HeaderComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use resources::ResourcesComponent;
pub use step_detail::StepDetailComponent;
pub use step_list::StepListComponent;

use ratatui::style::Color;

// Color palette shared across components
pub(crate) const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub(crate) const GOLD: Color = Color::Rgb(255, 215, 0);
pub(crate) const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub(crate) const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub(crate) const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub(crate) const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub(crate) const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub(crate) const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub(crate) const ERROR_RED: Color = Color::Rgb(220, 80, 80);
