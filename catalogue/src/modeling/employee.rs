use crate::error::{CatalogueError, Result};

/// Anything that can describe the work it does.
pub trait Worker {
    fn name(&self) -> &str;
    fn work(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    id: u32,
    salary: i64,
}

impl Employee {
    pub fn new(name: impl Into<String>, id: u32, salary: i64) -> Result<Self> {
        let mut employee = Self { name: name.into(), id, salary: 0 };
        employee.set_salary(salary)?;
        Ok(employee)
    }

    pub fn id(&self) -> u32     { self.id }
    pub fn salary(&self) -> i64 { self.salary }

    /// Negative salaries are rejected and leave the old value in place.
    pub fn set_salary(&mut self, salary: i64) -> Result<()> {
        if salary < 0 {
            return Err(CatalogueError::NegativeSalary(salary));
        }
        self.salary = salary;
        Ok(())
    }

    pub fn annual_salary(&self) -> Result<i64> {
        self.salary.checked_mul(12).ok_or(CatalogueError::Overflow)
    }
}

impl Worker for Employee {
    fn name(&self) -> &str { &self.name }

    fn work(&self) -> String {
        format!("{} is working", self.name)
    }
}

/// An employee who also runs a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    employee: Employee,
    department: String,
}

impl Manager {
    pub fn new(employee: Employee, department: impl Into<String>) -> Self {
        Self { employee, department: department.into() }
    }

    pub fn employee(&self) -> &Employee { &self.employee }
    pub fn department(&self) -> &str     { &self.department }
}

impl Worker for Manager {
    fn name(&self) -> &str { self.employee.name() }

    fn work(&self) -> String {
        format!("{} and managing the {} department", self.employee.work(), self.department)
    }
}
