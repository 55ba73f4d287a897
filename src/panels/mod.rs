pub mod panel_trait;
pub mod plot_ui;
pub mod table_ui;

pub use panel_trait::Panel;
pub use plot_ui::PlotPanel;
pub use table_ui::TablePanel;
