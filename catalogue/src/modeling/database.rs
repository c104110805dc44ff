//! Callers program against [`Database`]; each backend decides how a
//! connection, a query and a close are carried out.

pub trait Database {
    fn connect(&self) -> String;
    fn execute_query(&self, query: &str) -> String;
    fn close(&self) -> String;

    /// Connect, run every query, close; one line per step.
    fn session(&self, queries: &[&str]) -> Vec<String> {
        let mut log = vec![self.connect()];
        log.extend(queries.iter().map(|q| self.execute_query(q)));
        log.push(self.close());
        log
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySql;

impl Database for MySql {
    fn connect(&self) -> String                  { "Connecting to MySQL".to_owned() }
    fn execute_query(&self, query: &str) -> String { format!("MySQL executing: {query}") }
    fn close(&self) -> String                    { "Closing MySQL connection".to_owned() }
}

/// Backend that prefixes every step with its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgreSql {
    host: String,
}

impl PostgreSql {
    pub fn new(host: impl Into<String>) -> Self { Self { host: host.into() } }

    pub fn host(&self) -> &str { &self.host }

    fn log(&self, message: &str) -> String { format!("[{}] {message}", self.host) }
}

impl Database for PostgreSql {
    fn connect(&self) -> String                  { self.log("Connecting to PostgreSQL") }
    fn execute_query(&self, query: &str) -> String { self.log(&format!("Executing: {query}")) }
    fn close(&self) -> String                    { self.log("Closing PostgreSQL connection") }
}
