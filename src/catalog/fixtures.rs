//! Record builders shared by the catalog unit tests.

use crate::catalog::dataset::Dataset;
use crate::catalog::model::{Category, FeeRange, Region, University};

/// A minimal public Cairo university with the given id.
pub fn university(id: &str) -> University {
    University {
        id: id.to_string(),
        name: format!("جامعة {id}"),
        name_en: format!("University {id}"),
        category: Category::Public,
        location: "القاهرة".to_string(),
        location_en: "Cairo".to_string(),
        region: Region::Cairo,
        established: 1950,
        rating: 4.0,
        fees: FeeRange { min: 1000, max: 2000 },
        faculties: Vec::new(),
        faculties_en: Vec::new(),
        specialties: Vec::new(),
        description: String::new(),
        description_en: String::new(),
        image: None,
        min_grade: 75,
        max_grade: None,
        students: 1000,
        acceptance_rate: 0,
        employment_rate: 0,
        detailed_faculties: None,
    }
}

fn build(
    id: &str,
    category: Category,
    region: Region,
    rating: f64,
    fees: (u64, u64),
    students: u64,
    faculties: &[&str],
) -> University {
    University {
        category,
        region,
        rating,
        fees: FeeRange { min: fees.0, max: fees.1 },
        students,
        faculties_en: faculties.iter().map(|f| f.to_string()).collect(),
        ..university(id)
    }
}

/// Seven records, three of them in Cairo.
pub fn sample() -> Dataset {
    use Category::*;
    use Region::*;

    Dataset::new(vec![
        build("a", Public, Cairo, 4.5, (1000, 5000), 100, &["Medicine", "Computer Science"]),
        build("b", Private, Cairo, 4.0, (20000, 40000), 200, &["Engineering"]),
        build("c", Public, Alexandria, 3.5, (1000, 3000), 300, &["Medicine"]),
        build("d", National, Delta, 3.0, (5000, 9000), 400, &[]),
        build("e", Azhar, Cairo, 5.0, (500, 1500), 500, &["Islamic Studies"]),
        build("f", Private, SuezCanal, 2.5, (60000, 80000), 600, &["Engineering", "Business"]),
        build("g", Public, UpperEgypt, 2.0, (800, 1200), 700, &["Agriculture"]),
    ])
    .expect("sample dataset is valid")
}
