// Entity module
// Document types, their schemas and the stored record wrapper

pub mod department;
pub mod employee;
pub mod product;
pub mod record;

// Re-export main types for convenience
pub use department::Department;
pub use employee::{DepartmentField, Employee, PopulatedEmployee};
pub use product::Product;
pub use record::{Entity, Record};
