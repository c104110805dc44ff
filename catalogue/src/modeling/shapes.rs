use std::f64::consts::PI;

use crate::error::{CatalogueError, Result};

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
    fn name(&self) -> &'static str;

    fn describe(&self) -> String {
        format!("{}: area={:.2}, perimeter={:.2}", self.name(), self.area(), self.perimeter())
    }
}

fn positive(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CatalogueError::InvalidShape(format!("{what} must be positive, got {value}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self { width: positive("width", width)?, height: positive("height", height)? })
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64           { self.width * self.height }
    fn perimeter(&self) -> f64      { 2.0 * (self.width + self.height) }
    fn name(&self) -> &'static str  { "Rectangle" }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self { radius: positive("radius", radius)? })
    }
}

impl Shape for Circle {
    fn area(&self) -> f64           { PI * self.radius * self.radius }
    fn perimeter(&self) -> f64      { 2.0 * PI * self.radius }
    fn name(&self) -> &'static str  { "Circle" }
}

/// A rectangle with equal sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square(Rectangle);

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        let side = positive("side", side)?;
        Ok(Self(Rectangle { width: side, height: side }))
    }
}

impl Shape for Square {
    fn area(&self) -> f64           { self.0.area() }
    fn perimeter(&self) -> f64      { self.0.perimeter() }
    fn name(&self) -> &'static str  { "Square" }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}
