// Shared tuning constants used by both web and native frontends.

// Default form values (mm and counts)
pub const DEFAULT_ROLL_DIAMETER: f32 = 120.0;
pub const DEFAULT_CORE_DIAMETER: f32 = 40.0;
pub const DEFAULT_ROLL_HEIGHT: f32 = 100.0;
pub const DEFAULT_ROWS: f32 = 2.0;
pub const DEFAULT_ROLLS_PER_ROW: f32 = 4.0;
pub const DEFAULT_LAYERS: f32 = 3.0;

// Camera controls
pub const DEFAULT_CAMERA_DISTANCE: f32 = 400.0; // fallback when the distance field is empty or <= 0
pub const INITIAL_AZIMUTH_DEG: f32 = 45.0;
pub const INITIAL_ELEVATION_DEG: f32 = 30.0;
pub const INITIAL_DISTANCE: f32 = 900.0;
pub const MIN_DISTANCE: f32 = 50.0; // orbit zoom limits; sliders are not clamped
pub const MAX_DISTANCE: f32 = 4000.0;

// Projection
pub const FOVY_DEG: f32 = 45.0;
pub const ZNEAR: f32 = 1.0;
pub const ZFAR: f32 = 5000.0;

// Orbit input
pub const ORBIT_ROTATE_DEG_PER_PX: f32 = 0.3;
pub const ORBIT_PAN_PER_PX: f32 = 0.0015; // multiplied by distance
pub const ORBIT_ZOOM_PER_WHEEL_UNIT: f32 = 0.001; // exp(delta * k) zoom factor
pub const ORBIT_DAMPING_FACTOR: f32 = 0.08; // velocity fraction lost per 60 Hz frame
pub const ORBIT_REST_VELOCITY: f32 = 0.01; // deg per frame below which inertia stops

// Geometry
pub const ROLL_RADIAL_SEGMENTS: u32 = 32;
pub const CORE_RADIAL_SEGMENTS: u32 = 24;
pub const CORE_HEIGHT_EXTRA: f32 = 1.0; // core pokes through both roll caps
pub const GRID_SIZE: f32 = 2000.0;
pub const GRID_DIVISIONS: u32 = 40;
pub const GRID_Y: f32 = -0.1;

// Palette (linear-ish sRGB 0..1)
pub const BACKGROUND_COLOR: [f32; 3] = [0.941, 0.953, 0.965]; // #f0f3f6
pub const ROLL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // #ffffff
pub const CORE_COLOR: [f32; 4] = [0.816, 0.816, 0.816, 1.0]; // #d0d0d0
pub const BOX_FILL_COLOR: [f32; 4] = [0.6, 0.769, 1.0, 0.1]; // #99c4ff @ 10%
pub const BOX_EDGE_COLOR: [f32; 4] = [0.0, 0.4, 0.8, 1.0]; // #0066cc
pub const GRID_CENTER_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0]; // #cccccc
pub const GRID_LINE_COLOR: [f32; 4] = [0.933, 0.933, 0.933, 1.0]; // #eeeeee

// Lighting
pub const HEMI_SKY_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const HEMI_GROUND_COLOR: [f32; 3] = [0.267, 0.267, 0.267]; // #444444
pub const HEMI_INTENSITY: f32 = 0.8;
pub const DIR_LIGHT_POSITION: [f32; 3] = [200.0, 300.0, 200.0];
pub const DIR_LIGHT_INTENSITY: f32 = 0.7;
pub const SPECULAR_SHININESS: f32 = 30.0;

// Rebuild
pub const MAX_RENDERED_ROLLS: u64 = 20_000; // instance cap per materialization

// Export
pub const EXPORT_FILE_NAME: &str = "toilet-paper-pack.png";

// Readout text
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter valid positive numbers for all fields.";
pub const CORE_TOO_LARGE_MESSAGE: &str = "Error: Core diameter must be smaller than roll diameter.";
pub const READOUT_PLACEHOLDER: &str = "–";
