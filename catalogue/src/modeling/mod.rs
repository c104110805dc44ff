//! Object modelling with structs and traits: encapsulated state behind
//! validating methods, composition in place of inheritance, and trait
//! objects for polymorphism.

pub mod account;
pub mod animals;
pub mod capabilities;
pub mod database;
pub mod employee;
pub mod shapes;
pub mod user;

pub use account::BankAccount;
pub use animals::{chorus, Animal, Cat, Cow, Dog};
pub use capabilities::{swim_all, Duck, Flyer, Swimmer};
pub use database::{Database, MySql, PostgreSql};
pub use employee::{Employee, Manager, Worker};
pub use shapes::{Circle, Rectangle, Shape, Square};
pub use user::User;
