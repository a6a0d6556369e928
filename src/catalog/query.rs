//! Read-only queries over the dataset.

use std::sync::Arc;

use crate::catalog::dataset::Dataset;
use crate::catalog::faculty;
use crate::catalog::model::{Category, Region, University};
use crate::catalog::search::{paginate, Page, PageRequest, SearchFilter, Sort};
use crate::catalog::stats::{self, RegionStats, Stats};

/// Query engine over a shared, immutable dataset.
///
/// Cloning is cheap; every clone reads the same records.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
}

impl QueryEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// All universities in insertion order.
    pub fn all(&self) -> &[University] {
        self.dataset.universities()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&University> {
        self.all().iter().find(|u| u.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&University> {
        self.all().iter().filter(|u| u.category == category).collect()
    }

    /// Every university matching `filter`, optionally sorted.
    pub fn search(&self, filter: &SearchFilter, sort: Option<Sort>) -> Vec<&University> {
        let mut results: Vec<&University> =
            self.all().iter().filter(|u| filter.matches(u)).collect();
        if let Some(sort) = sort {
            sort.apply(&mut results);
        }
        results
    }

    /// Search, then cut the result set down to one page.
    pub fn search_page(
        &self,
        filter: &SearchFilter,
        sort: Option<Sort>,
        page: PageRequest,
    ) -> Page<&University> {
        paginate(self.search(filter, sort), page)
    }

    pub fn stats(&self) -> Stats {
        stats::overall(self.all())
    }

    pub fn region_stats(&self, region: Region) -> RegionStats {
        stats::for_region(self.all(), region)
    }

    pub fn faculties(&self) -> Vec<&str> {
        faculty::distinct(self.all())
    }

    pub fn faculty_by_slug(&self, slug: &str) -> Option<&str> {
        faculty::find_by_slug(self.all(), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample;
    use crate::catalog::search::{SortKey, SortOrder};

    fn engine() -> QueryEngine {
        QueryEngine::new(Arc::new(sample()))
    }

    fn ids<'a>(items: impl IntoIterator<Item = &'a University>) -> Vec<&'a str> {
        items.into_iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_get_by_id() {
        let engine = engine();
        for uni in engine.all() {
            let found = engine.get_by_id(&uni.id).expect("known id");
            assert_eq!(found.id, uni.id);
        }
        assert!(engine.get_by_id("missing").is_none());
        assert!(engine.get_by_id("").is_none());
    }

    #[test]
    fn test_by_category() {
        let engine = engine();
        assert_eq!(ids(engine.by_category(Category::Private)), vec!["b", "f"]);
        assert_eq!(ids(engine.by_category(Category::Azhar)), vec!["e"]);

        let empty = QueryEngine::new(Arc::new(Dataset::default()));
        assert!(empty.by_category(Category::Public).is_empty());
    }

    #[test]
    fn test_pages_reassemble_full_result() {
        let engine = engine();
        let filter = SearchFilter::default();

        for page_size in 1..=8i64 {
            let first =
                engine.search_page(&filter, None, PageRequest::new(Some(1), Some(page_size)));
            assert_eq!(first.total_pages, 7usize.div_ceil(page_size as usize));

            let mut collected = Vec::new();
            for page in 1..=first.total_pages as i64 {
                let request = PageRequest::new(Some(page), Some(page_size));
                let p = engine.search_page(&filter, None, request);
                collected.extend(p.items);
            }
            assert_eq!(ids(collected), ids(engine.all()));
        }
    }

    #[test]
    fn test_combined_filter_is_intersection() {
        let engine = engine();
        let by = |filter: SearchFilter| ids(engine.search(&filter, None));

        let category = by(SearchFilter {
            category: Some(Category::Public.into()),
            ..Default::default()
        });
        let region = by(SearchFilter {
            region: Some(Region::Cairo.into()),
            ..Default::default()
        });
        let fees = by(SearchFilter {
            max_fees: Some(5000),
            ..Default::default()
        });
        let combined = by(SearchFilter {
            category: Some(Category::Public.into()),
            region: Some(Region::Cairo.into()),
            max_fees: Some(5000),
            ..Default::default()
        });

        let intersection: Vec<&str> = category
            .into_iter()
            .filter(|id| region.contains(id) && fees.contains(id))
            .collect();
        assert_eq!(combined, intersection);
        assert_eq!(combined, vec!["a"]);
    }

    #[test]
    fn test_search_sorted() {
        let engine = engine();
        let sort = Sort {
            key: SortKey::Fees,
            order: SortOrder::Asc,
        };
        let results = engine.search(&SearchFilter::default(), Some(sort));
        assert_eq!(ids(results), vec!["e", "g", "c", "a", "d", "b", "f"]);
    }

    #[test]
    fn test_faculty_queries() {
        let engine = engine();
        assert_eq!(engine.faculties().len(), 6);
        assert_eq!(engine.faculty_by_slug("islamic-studies"), Some("Islamic Studies"));
        assert_eq!(engine.faculty_by_slug("law"), None);
    }

    #[test]
    fn test_seed_private_search() {
        let engine = QueryEngine::new(Arc::new(Dataset::seed().unwrap()));
        let filter = SearchFilter {
            category: Some(Category::Private.into()),
            ..Default::default()
        };
        let results = engine.search(&filter, None);
        assert_eq!(
            results.iter().map(|u| u.name_en.as_str()).collect::<Vec<_>>(),
            vec!["American University in Cairo", "German University in Cairo"]
        );
    }

    #[test]
    fn test_seed_text_search() {
        let engine = QueryEngine::new(Arc::new(Dataset::seed().unwrap()));
        let filter = SearchFilter {
            query: Some("GERMAN".into()),
            ..Default::default()
        };
        assert_eq!(ids(engine.search(&filter, None)), vec!["5"]);
    }

    #[test]
    fn test_seed_description_en_not_searched() {
        let engine = QueryEngine::new(Arc::new(Dataset::seed().unwrap()));
        let filter = SearchFilter {
            query: Some("mediterranean".into()),
            ..Default::default()
        };
        assert!(engine.search(&filter, None).is_empty());
    }

    #[test]
    fn test_seed_trailing_space_is_literal() {
        let engine = QueryEngine::new(Arc::new(Dataset::seed().unwrap()));
        let filter = SearchFilter {
            query: Some("cairo".into()),
            ..Default::default()
        };
        assert_eq!(ids(engine.search(&filter, None)), vec!["1", "2", "4", "5", "6"]);

        // Only "Cairo University" has a space right after the word.
        let filter = SearchFilter {
            query: Some("cairo ".into()),
            ..Default::default()
        };
        assert_eq!(ids(engine.search(&filter, None)), vec!["1"]);
    }

    #[test]
    fn test_seed_computer_science_slug() {
        let engine = QueryEngine::new(Arc::new(Dataset::seed().unwrap()));
        assert_eq!(engine.faculty_by_slug("computer-science"), Some("Computer Science"));
    }
}
