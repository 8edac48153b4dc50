pub mod labels;
pub mod mapping;
pub mod range;
pub mod series;
pub mod types;
pub mod viewport;

pub use labels::{
    HORIZONTAL_LABEL_TARGET_WIDTH, LabelFormatter, VERTICAL_LABEL_TARGET_HEIGHT,
    horizontal_labels, label_count, vertical_labels,
};
pub use mapping::{flip_y, map_x, map_y};
pub use range::{AxisBounds, max_x, min_x, x_extent, y_bounds};
pub use series::{DataSeries, ObserverHandle, SeriesEvent, SeriesStyle, canonicalize_points};
pub use types::{PlotRect, Point};
pub use viewport::Viewport;
