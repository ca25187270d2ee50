//! Dashboard assembly: each statistic is aggregated, charted and described in isolation, then
//! arranged into five two-panel tabs between the sidebar and the footer.

mod html;
mod layout;
mod panel;
mod router;
mod statistic;
pub mod summary;

pub use html::{render_page, PageView};
pub use layout::{tab_label, Dashboard, Tab, DASHBOARD_TITLE, TAB_COUNT};
pub use panel::{build_panel, Panel, PanelError, PanelOutcome};
pub use router::{dashboard_router, DashboardState, TabQuery};
pub use statistic::Statistic;
