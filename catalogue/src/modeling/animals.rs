pub trait Animal {
    fn name(&self) -> &str;
    fn sound(&self) -> &'static str;

    fn speak(&self) -> String {
        format!("{} says: {}", self.name(), self.sound())
    }

    fn sleep(&self) -> String {
        format!("{} is sleeping", self.name())
    }
}

macro_rules! animal {
    ($ty:ident, $sound:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            name: String,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }
        }

        impl Animal for $ty {
            fn name(&self) -> &str           { &self.name }
            fn sound(&self) -> &'static str  { $sound }
        }
    };
}

animal!(Dog, "Woof!");
animal!(Cat, "Meow!");
animal!(Cow, "Moo!");

/// Every animal speaks once, in order.
pub fn chorus(animals: &[Box<dyn Animal>]) -> Vec<String> {
    animals.iter().map(|a| a.speak()).collect()
}
