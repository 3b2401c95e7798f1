//! DOM element ids shared with `index.html`, plus input tuning for the page.

pub const CANVAS_ID: &str = "pack-canvas";

// form fields, in the order the form lists them
pub const PARAM_INPUT_IDS: [&str; 6] = [
    "rollDiameter",
    "coreDiameter",
    "rollHeight",
    "rows",
    "rollsPerRow",
    "layers",
];

pub const TOTAL_ROLLS_ID: &str = "totalRolls";
pub const PACK_DIMENSIONS_ID: &str = "packDimensions";
pub const FOOTPRINT_ID: &str = "footprint";

/// (slider id, readout id)
pub const PACK_ROT_X: (&str, &str) = ("packRotX", "packRotXVal");
pub const PACK_ROT_Y: (&str, &str) = ("packRotY", "packRotYVal");

pub const CAM_ANGLE_X: (&str, &str) = ("camAngleX", "camAngleXVal");
pub const CAM_ANGLE_Y: (&str, &str) = ("camAngleY", "camAngleYVal");
pub const CAM_DISTANCE: (&str, &str) = ("camDistance", "camDistanceVal");
pub const CAM_PAN_X: (&str, &str) = ("camPanX", "camPanXVal");
pub const CAM_PAN_Y: (&str, &str) = ("camPanY", "camPanYVal");

pub const ORIENTATION_SLIDERS: [(&str, &str); 2] = [PACK_ROT_X, PACK_ROT_Y];
pub const CAMERA_SLIDERS: [(&str, &str); 5] =
    [CAM_ANGLE_X, CAM_ANGLE_Y, CAM_DISTANCE, CAM_PAN_X, CAM_PAN_Y];

pub const GENERATE_BUTTON_ID: &str = "generateBtn";
pub const EXPORT_BUTTON_ID: &str = "exportPngBtn";

// WheelEvent.deltaMode conversions to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

pub const SIGNAL_QUEUE_INLINE: usize = 8; // signals per frame before the queue spills to the heap
