pub mod chart_ui;
pub mod location_ui;
pub mod panel_trait;
pub mod sensors_ui;
pub mod terrain_ui;
pub mod video_ui;

pub use chart_ui::ChartView;
pub use location_ui::LocationPanel;
pub use panel_trait::{Panel, PanelState};
pub use sensors_ui::SensorsPanel;
pub use terrain_ui::TerrainPanel;
pub use video_ui::VideoPanel;
