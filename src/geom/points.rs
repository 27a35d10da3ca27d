use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use eframe::egui::Pos2;

/// A point or displacement in canvas pixel space.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub(crate) struct Pos {
    pub x: f32,
    pub y: f32,
}
impl From<Pos2> for Pos {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}
impl Pos {
    pub const ORIGIN: Self = Pos { x: 0., y: 0. };
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    pub fn dist_sq(self, other: &Pos) -> f32 {
        (*other - self).length_sq()
    }
    pub fn dist(self, other: &Pos) -> f32 {
        self.dist_sq(other).sqrt()
    }
}
impl Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Pos {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Mul<Pos> for f32 {
    type Output = Pos;

    fn mul(self, rhs: Pos) -> Self::Output {
        Pos {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl Mul<f32> for Pos {
    type Output = Pos;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Neg for Pos {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Pos {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Sub for Pos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Pos {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign for Pos {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
