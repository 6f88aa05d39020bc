//! Planar 2-D vector type and geometry used throughout the simulator.
//!
//! The simulated world is a bounded 2-D plane (screen/arena scale, not
//! geographic), so `Vec2` is plain double-precision Euclidean arithmetic —
//! no great-circle correction is needed.

/// A 2-D vector used both as a position and as a displacement/velocity.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector in the direction of `self`, or `Vec2::ZERO`
    /// if `self` is (numerically) the zero vector. Callers that would
    /// otherwise divide by a near-zero length should go through this method
    /// rather than normalizing by hand.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len <= f64::EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    /// Returns a copy of `self` scaled so its length does not exceed `max_len`.
    /// Vectors already shorter than `max_len` are returned unchanged.
    #[inline]
    pub fn clamp_length(self, max_len: f64) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq <= max_len * max_len {
            self
        } else {
            self.normalized() * max_len
        }
    }

    #[inline]
    pub fn distance_to(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn distance_squared_to(self, other: Vec2) -> f64 {
        (self - other).length_squared()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
