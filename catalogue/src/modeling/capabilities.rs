//! One type carrying several independent capabilities, each a small trait
//! with its behaviour supplied by default methods.

pub trait Flyer {
    fn fly(&self) -> String { "Flying in the sky".to_owned() }
}

pub trait Swimmer {
    fn swim(&self) -> String { "Swimming in water".to_owned() }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duck;

impl Duck {
    pub fn quack(&self) -> &'static str { "Quack quack!" }
}

impl Flyer for Duck {}
impl Swimmer for Duck {}

/// Every swimmer in `group` swims once, in order.
pub fn swim_all(group: &[&dyn Swimmer]) -> Vec<String> {
    group.iter().map(|s| s.swim()).collect()
}
