#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, stored as origin plus dimension.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Rect {
    pub pos: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }

    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn left(&self) -> i32 {
        self.pos.x
    }

    pub const fn top(&self) -> i32 {
        self.pos.y
    }

    pub const fn right(&self) -> i32 {
        self.pos.x + self.size.width
    }

    pub const fn bottom(&self) -> i32 {
        self.pos.y + self.size.height
    }

    /// Half-open containment: `[pos, pos + size)` on both axes.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}
