//! The execution collaborator boundary
//!
//! The client produces statement text; an [`Executor`] sends it to the
//! server. Connection management, transactions, and the wire protocol all
//! live behind this trait.

use oarfish_core::{Result, Row};
use std::collections::{BTreeSet, VecDeque};

/// Executes rendered statements against a SQL-speaking connection.
///
/// Implementations wrap a concrete driver. The existence checks back the
/// client's check-first policy: create operations are skipped when the
/// target already exists, and operations against a missing table fail
/// early instead of surfacing a server error.
pub trait Executor {
    /// Execute a statement that returns no rows; returns affected row count.
    fn execute(&mut self, sql: &str) -> Result<u64>;

    /// Execute a query and return its result rows.
    fn query(&mut self, sql: &str) -> Result<Vec<Row>>;

    fn table_exists(&mut self, table: &str) -> Result<bool>;

    fn index_exists(&mut self, table: &str, index: &str) -> Result<bool>;
}

/// In-memory executor that records statements instead of running them.
///
/// Tracks table and index names from the DDL it sees, and replays queued
/// result rows for queries. Used by the test suite; also handy for
/// asserting on the exact SQL an application would issue.
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    statements: Vec<String>,
    tables: BTreeSet<String>,
    indexes: BTreeSet<(String, String)>,
    responses: VecDeque<Vec<Row>>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an existing table.
    pub fn with_table(mut self, name: impl Into<String>) -> Self {
        self.tables.insert(name.into());
        self
    }

    /// Queue rows to be returned by the next query, FIFO.
    pub fn push_response(&mut self, rows: Vec<Row>) {
        self.responses.push_back(rows);
    }

    /// Every statement seen so far, in order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    fn record_ddl(&mut self, sql: &str) {
        if let Some(rest) = sql.strip_prefix("CREATE TABLE ") {
            if let Some(name) = rest.split_whitespace().next() {
                self.tables.insert(name.to_string());
            }
        } else if let Some(rest) = sql
            .strip_prefix("CREATE VECTOR INDEX ")
            .or_else(|| sql.strip_prefix("CREATE INDEX "))
        {
            let mut words = rest.split_whitespace();
            let index = words.next().unwrap_or_default().to_string();
            if let Some(table) = rest.split(" ON ").nth(1) {
                let table = table.split_whitespace().next().unwrap_or_default();
                self.indexes.insert((table.to_string(), index));
            }
        }
    }
}

impl Executor for MemoryExecutor {
    fn execute(&mut self, sql: &str) -> Result<u64> {
        self.record_ddl(sql);
        self.statements.push(sql.to_string());
        Ok(0)
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        self.statements.push(sql.to_string());
        Ok(self.responses.pop_front().unwrap_or_default())
    }

    fn table_exists(&mut self, table: &str) -> Result<bool> {
        Ok(self.tables.contains(table))
    }

    fn index_exists(&mut self, table: &str, index: &str) -> Result<bool> {
        Ok(self
            .indexes
            .contains(&(table.to_string(), index.to_string())))
    }
}
