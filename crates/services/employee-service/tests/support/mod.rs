//! Shared fixtures for integration tests.
//!
//! `InMemoryEmployeeRepository` mirrors the storage contract of the SeaORM
//! store: sequence identifiers, unique email and employee number, newest
//! first ordering and NotFound on missing rows.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use common::{AppError, AppResult};
use domain::{ConflictKind, CreateEmployee, Employee, EmployeeFilter, EmployeeRecord};
use employee_service_lib::build_router;
use employee_service_lib::infra::Database;
use employee_service_lib::repository::EmployeeRepository;

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: Vec<Employee>,
    referenced: HashSet<i64>,
    last_tick: Option<DateTime<Utc>>,
}

impl Store {
    /// Strictly increasing clock, like a sequence of storage timestamps
    fn tick(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_tick {
            if now <= last {
                now = last + chrono::Duration::microseconds(1);
            }
        }
        self.last_tick = Some(now);
        now
    }

    fn check_unique(&self, record: &EmployeeRecord, except: Option<i64>) -> AppResult<()> {
        let others = self.rows.iter().filter(|e| Some(e.id) != except);
        for other in others {
            if other.email == record.email {
                return Err(AppError::conflict(ConflictKind::EmailExists));
            }
            if other.employee_number == record.employee_number {
                return Err(AppError::conflict(ConflictKind::EmployeeNumberExists));
            }
        }
        Ok(())
    }

    fn matching<'a>(&'a self, filter: &'a EmployeeFilter) -> impl Iterator<Item = &'a Employee> {
        self.rows.iter().filter(move |e| {
            filter.department().map_or(true, |d| e.department == d)
                && filter.status().map_or(true, |s| e.status == s)
                && filter.position().map_or(true, |p| e.position == p)
        })
    }
}

/// In-memory stand-in for the employees table.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<Store>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a row referenced by another table
    pub fn mark_referenced(&self, id: i64) {
        self.store.lock().unwrap().referenced.insert(id);
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, record: EmployeeRecord) -> AppResult<Employee> {
        let mut store = self.store.lock().unwrap();
        store.check_unique(&record, None)?;

        store.next_id += 1;
        let now = store.tick();
        let employee = Employee {
            id: store.next_id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            employee_number: record.employee_number,
            position: record.position,
            department: record.department,
            status: record.status,
            hire_date: record.hire_date,
            created_at: now,
            updated_at: now,
        };
        store.rows.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Employee> {
        let store = self.store.lock().unwrap();
        store
            .rows
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn find_all(
        &self,
        filter: &EmployeeFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Employee>> {
        let store = self.store.lock().unwrap();
        let mut rows: Vec<Employee> = store.matching(filter).cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &EmployeeFilter) -> AppResult<u64> {
        let store = self.store.lock().unwrap();
        Ok(store.matching(filter).count() as u64)
    }

    async fn update(&self, id: i64, record: EmployeeRecord) -> AppResult<Employee> {
        let mut store = self.store.lock().unwrap();
        if !store.rows.iter().any(|e| e.id == id) {
            return Err(AppError::NotFound);
        }
        store.check_unique(&record, Some(id))?;

        let now = store.tick();
        let row = store
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound)?;
        row.first_name = record.first_name;
        row.last_name = record.last_name;
        row.email = record.email;
        row.employee_number = record.employee_number;
        row.position = record.position;
        row.department = record.department;
        row.status = record.status;
        row.hire_date = record.hire_date;
        row.updated_at = now;

        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut store = self.store.lock().unwrap();
        if store.referenced.contains(&id) {
            return Err(AppError::ReferencedCannotDelete);
        }
        let before = store.rows.len();
        store.rows.retain(|e| e.id != id);
        if store.rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Router wired to the given repository, with no reachable database.
pub fn test_app(repo: Arc<InMemoryEmployeeRepository>) -> Router {
    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
    build_router(repo, database, Duration::from_secs(5))
}

/// Valid creation payload with distinct identity fields
pub fn new_employee(n: u32, department: &str) -> CreateEmployee {
    CreateEmployee {
        email: format!("employee{n}@example.com"),
        employee_number: format!("EMP-{n:04}"),
        first_name: "Test".to_string(),
        last_name: format!("Employee{n}"),
        position: "Engineer".to_string(),
        department: department.to_string(),
    }
}
