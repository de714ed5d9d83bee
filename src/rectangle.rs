use crate::Coordinate;

/// An axis-aligned bounding rectangle.
///
/// The empty rectangle has NaN bounds; it contains nothing.
#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max
        }
    }
}

impl Rectangle {
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    pub fn new_empty() -> Self {
        Rectangle {
            x_min: f64::NAN,
            y_min: f64::NAN,
            x_max: f64::NAN,
            y_max: f64::NAN,
        }
    }

    pub fn of(rects: &[Rectangle]) -> Self {
        rects.iter().fold(Rectangle::new_empty(), |mut s, r| {
            s.expand(*r);
            s
        })
    }

    pub fn of_coords(coords: &[Coordinate]) -> Self {
        coords.iter().fold(Rectangle::new_empty(), |mut s, c| {
            s.expand(Rectangle::new(*c, *c));
            s
        })
    }

    /// The square with sides of length `side`, centred on `center`.
    pub fn square_around(center: Coordinate, side: f64) -> Self {
        let half = Coordinate::new(side / 2., side / 2.);
        Rectangle::new(center - half, center + half)
    }

    pub fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.y_min.is_nan() || self.x_max.is_nan() || self.y_max.is_nan()
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.x_max + self.x_min) / 2.,
            y: (self.y_max + self.y_min) / 2.,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.x_min <= point.x
            && point.x <= self.x_max
            && self.y_min <= point.y
            && point.y <= self.y_max
    }

    // f64::min/max ignore a NaN operand, so expanding the empty rectangle works.
    pub fn expand(&mut self, other: Rectangle) {
        self.x_min = self.x_min.min(other.x_min);
        self.y_min = self.y_min.min(other.y_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_max = self.y_max.max(other.y_max);
    }
}
