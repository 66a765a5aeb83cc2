use crate::domain::entities::{
    Department, DepartmentField, Employee, PopulatedEmployee, Record,
};
use crate::domain::repositories::{CrudRepository, RepositoryResult};

/// Resolves an employee's department reference against the departments collection
///
/// When `department` holds the id of a stored department the full record is
/// embedded; free text and dangling ids are returned unchanged.
pub async fn populate_department(
    employee: Record<Employee>,
    departments: &dyn CrudRepository<Department>,
) -> RepositoryResult<Record<PopulatedEmployee>> {
    let resolved = match employee.fields.department_id() {
        Some(id) => departments.get_by_id(id).await?,
        None => None,
    };

    Ok(employee.map(|fields| PopulatedEmployee {
        first_name: fields.first_name,
        last_name: fields.last_name,
        department: match resolved {
            Some(department) => DepartmentField::Populated(department),
            None => DepartmentField::Reference(fields.department),
        },
    }))
}

/// Populates every employee in `employees`, preserving order
pub async fn populate_all(
    employees: Vec<Record<Employee>>,
    departments: &dyn CrudRepository<Department>,
) -> RepositoryResult<Vec<Record<PopulatedEmployee>>> {
    let mut populated = Vec::with_capacity(employees.len());
    for employee in employees {
        populated.push(populate_department(employee, departments).await?);
    }
    Ok(populated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryRepository;
    use uuid::Uuid;

    #[tokio::test]
    async fn resolves_stored_department_reference() {
        let departments = InMemoryRepository::<Department>::new();
        let it = departments
            .create(Department::new("ITDepartment"))
            .await
            .unwrap();

        let employee = Record::new(
            Uuid::new_v4(),
            Employee::new("FirstName #3", "LastName #3", it.id.to_string()),
        );
        let populated = populate_department(employee, &departments).await.unwrap();

        match populated.fields.department {
            DepartmentField::Populated(department) => {
                assert_eq!(department.id, it.id);
                assert_eq!(department.fields.name, "ITDepartment");
            }
            other => panic!("Expected populated department, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn leaves_free_text_untouched() {
        let departments = InMemoryRepository::<Department>::new();
        let employee = Record::new(
            Uuid::new_v4(),
            Employee::new("FirstName #1", "LastName #1", "Department #1"),
        );

        let populated = populate_department(employee, &departments).await.unwrap();
        assert_eq!(
            populated.fields.department,
            DepartmentField::Reference("Department #1".to_string())
        );
    }

    #[tokio::test]
    async fn leaves_dangling_reference_untouched() {
        let departments = InMemoryRepository::<Department>::new();
        let missing = Uuid::new_v4().to_string();
        let employee = Record::new(Uuid::new_v4(), Employee::new("A", "B", missing.clone()));

        let populated = populate_department(employee, &departments).await.unwrap();
        assert_eq!(populated.fields.department, DepartmentField::Reference(missing));
    }

    #[tokio::test]
    async fn populate_all_preserves_order() {
        let departments = InMemoryRepository::<Department>::new();
        let sales = departments.create(Department::new("Sales")).await.unwrap();

        let employees = vec![
            Record::new(Uuid::new_v4(), Employee::new("One", "A", "Marketing")),
            Record::new(Uuid::new_v4(), Employee::new("Two", "B", sales.id.to_string())),
        ];
        let populated = populate_all(employees, &departments).await.unwrap();

        assert_eq!(populated.len(), 2);
        assert_eq!(populated[0].fields.first_name, "One");
        assert!(matches!(
            populated[1].fields.department,
            DepartmentField::Populated(_)
        ));
    }
}
