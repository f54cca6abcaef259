// DOM hooks and render palette for the web frontend

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const TITLE_ID: &str = "title";
pub const ARTIST_ID: &str = "artist";

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Linear RGB surface colors
pub const BORDER_COLOR: [f32; 3] = [0.051, 0.051, 0.051]; // 0x404040 in linear space
pub const FLOOR_COLOR: [f32; 3] = [0.030, 0.030, 0.030]; // 0x303030 in linear space
pub const ARROW_COLOR: [f32; 3] = [0.9, 0.9, 0.9];

// Flat stand-ins for the artwork images, cycled by index
pub const ARTWORK_PALETTE: [[f32; 3]; 5] = [
    [0.60, 0.10, 0.08], // warm red
    [0.08, 0.30, 0.55], // deep blue
    [0.55, 0.45, 0.10], // ochre
    [0.15, 0.45, 0.20], // green
    [0.40, 0.15, 0.45], // violet
];

// Shading
pub const AMBIENT_LIGHT: f32 = 0.06;
pub const FLOOR_THICKNESS: f32 = 0.01;
