use crate::model::employee::Employee;
use crate::store::{AttendanceStore, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Current set of employees, read from the store on every call.
#[derive(Clone)]
pub struct EmployeeDirectory {
    store: Arc<dyn AttendanceStore>,
}

impl EmployeeDirectory {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Employees keyed by id in store order. A repeated id keeps its first
    /// position and takes the later record's data.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = self.store.list_employees().await?;

        let mut positions: HashMap<String, usize> = HashMap::with_capacity(rows.len());
        let mut employees: Vec<Employee> = Vec::with_capacity(rows.len());
        for employee in rows {
            match positions.get(&employee.id) {
                Some(&i) => employees[i] = employee,
                None => {
                    positions.insert(employee.id.clone(), employees.len());
                    employees.push(employee);
                }
            }
        }

        debug!(count = employees.len(), "Loaded employee directory");
        Ok(employees)
    }
}

#[cfg(test)]
mod test {
    use super::EmployeeDirectory;
    use crate::model::employee::Employee;
    use crate::store::memory::MemoryStore;
    use std::sync::Arc;

    #[actix_web::test]
    async fn keeps_store_order() {
        let store = MemoryStore::default()
            .with_employee(Employee::new("b", "Beatriz"))
            .with_employee(Employee::new("a", "Alberto"));
        let directory = EmployeeDirectory::new(Arc::new(store));

        let ids: Vec<String> = directory
            .list_employees()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(vec!["b", "a"], ids);
    }

    #[actix_web::test]
    async fn same_name_different_ids_are_both_listed() {
        let store = MemoryStore::default()
            .with_employee(Employee::new("x1", "Luis Carrillo"))
            .with_employee(Employee::new("x2", "Luis Carrillo"));
        let directory = EmployeeDirectory::new(Arc::new(store));

        assert_eq!(2, directory.list_employees().await.unwrap().len());
    }

    #[actix_web::test]
    async fn repeated_id_takes_later_record() {
        let store = MemoryStore::default()
            .with_employee(Employee::new("x1", "Old Name"))
            .with_employee(Employee::new("x2", "Other"))
            .with_employee(Employee::new("x1", "New Name"));
        let directory = EmployeeDirectory::new(Arc::new(store));

        let employees = directory.list_employees().await.unwrap();
        assert_eq!(
            vec![Employee::new("x1", "New Name"), Employee::new("x2", "Other")],
            employees
        );
    }

    #[actix_web::test]
    async fn empty_store_is_empty_directory() {
        let directory = EmployeeDirectory::new(Arc::new(MemoryStore::default()));
        assert!(directory.list_employees().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn store_failure_propagates() {
        let store = Arc::new(MemoryStore::default());
        store.fail_next(1);
        let directory = EmployeeDirectory::new(store);
        assert!(directory.list_employees().await.is_err());
    }
}
