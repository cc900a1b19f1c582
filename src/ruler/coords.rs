//! Conversions between device (viewport) pixels and logical canvas units.

/// A 2D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Zoom and pan state of a canvas, as reported by the canvas.
///
/// `transform` is the 2D affine viewport matrix `[zoom, 0, 0, zoom, panX, panY]`;
/// only the zoom (entry 0) and the translation (entries 4 and 5) are read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub transform: [f64; 6],
    /// Visible canvas width in device pixels
    pub width: f64,
    /// Visible canvas height in device pixels
    pub height: f64,
    /// Page scroll offset in device pixels
    pub scroll: Point,
}

impl Viewport {
    pub fn new(zoom: f64, pan: Point, width: f64, height: f64) -> Self {
        Self {
            transform: [zoom, 0.0, 0.0, zoom, pan.x, pan.y],
            width,
            height,
            scroll: Point::default(),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.transform[0]
    }

    pub fn pan(&self) -> Point {
        Point::new(self.transform[4], self.transform[5])
    }

    /// True when layout can be computed from this viewport.
    ///
    /// A zero, negative, or non-finite zoom would only yield NaN or infinite
    /// geometry, so callers skip rendering instead.
    pub fn is_renderable(&self) -> bool {
        let zoom = self.zoom();
        zoom.is_finite() && zoom > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Logical coordinates of the top-left corner of the visible region.
    pub fn visible_top_left(&self) -> Point {
        visible_top_left(self.zoom(), self.pan(), self.scroll)
    }

    /// Maps a device-space point to logical canvas units.
    pub fn to_logical(&self, device: Point) -> Point {
        let zoom = self.zoom();
        let pan = self.pan();
        Point::new((device.x - pan.x) / zoom, (device.y - pan.y) / zoom)
    }

    /// Maps a logical point to device pixels.
    pub fn to_device(&self, logical: Point) -> Point {
        let zoom = self.zoom();
        let pan = self.pan();
        Point::new(logical.x * zoom + pan.x, logical.y * zoom + pan.y)
    }

    /// Logical offset of a distance given in device pixels measured from the
    /// viewport edge, e.g. `edge_offset(pan.y, 20.0)` is the bottom of the top
    /// ruler bar in canvas units.
    pub(crate) fn edge_offset(&self, pan: f64, device: f64) -> f64 {
        (-pan + device) / self.zoom()
    }
}

/// Computes the logical top-left corner of the visible canvas region.
///
/// `visibleLeft = -panX/zoom + scrollLeft/zoom`, and likewise for the top.
/// A non-positive zoom produces NaN or infinite coordinates.
pub fn visible_top_left(zoom: f64, pan: Point, scroll: Point) -> Point {
    Point::new(
        -pan.x / zoom + scroll.x / zoom,
        -pan.y / zoom + scroll.y / zoom,
    )
}
