//! Breed aggregation service.

use std::sync::Arc;

use crate::domain::entities::{BreedRecord, GroupedBreeds, group_by_country};
use crate::domain::repositories::BreedRepository;
use crate::error::UpstreamError;

/// Service that walks every upstream page and regroups the result by country.
pub struct BreedService<R: BreedRepository> {
    breed_repository: Arc<R>,
}

impl<R: BreedRepository> BreedService<R> {
    /// Creates a new breed service.
    pub fn new(breed_repository: Arc<R>) -> Self {
        Self { breed_repository }
    }

    /// Fetches every upstream page and returns the records in arrival order.
    ///
    /// Page 1 doubles as the probe for the total page count and is not
    /// requested a second time. Pages are fetched one after another in
    /// increasing order.
    ///
    /// # Errors
    ///
    /// Returns the first [`UpstreamError`] encountered. Records from earlier
    /// pages are discarded.
    pub async fn fetch_all_breeds(&self) -> Result<Vec<BreedRecord>, UpstreamError> {
        let first = self.breed_repository.fetch_page(1).await?;
        let last_page = first.last_page.max(1);
        tracing::info!(last_page, "Total upstream pages");

        let mut breeds = first.data;
        for page in 2..=last_page {
            tracing::debug!(page, "Fetching breed page");
            let next = self.breed_repository.fetch_page(page).await?;
            breeds.extend(next.data);
        }

        Ok(breeds)
    }

    /// Fetches every breed and groups it by country.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_all_breeds`].
    pub async fn breeds_by_country(&self) -> Result<GroupedBreeds, UpstreamError> {
        let breeds = self.fetch_all_breeds().await?;
        Ok(group_by_country(breeds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BreedPage;
    use crate::domain::repositories::MockBreedRepository;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn page(breeds: &[(&str, &str)], last_page: u32) -> BreedPage {
        BreedPage {
            data: breeds
                .iter()
                .map(|(breed, country)| BreedRecord {
                    breed: breed.to_string(),
                    country: country.to_string(),
                    ..Default::default()
                })
                .collect(),
            last_page,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_breeds_walks_pages_in_order() {
        let mut mock_repo = MockBreedRepository::new();
        let mut seq = Sequence::new();

        for (n, name) in [(1, "A"), (2, "B"), (3, "C")] {
            mock_repo
                .expect_fetch_page()
                .with(eq(n))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(page(&[(name, "US")], 3)));
        }

        let service = BreedService::new(Arc::new(mock_repo));

        let breeds = service.fetch_all_breeds().await.unwrap();

        let names: Vec<_> = breeds.iter().map(|b| b.breed.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_fetch_all_breeds_single_page() {
        let mut mock_repo = MockBreedRepository::new();
        mock_repo
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(page(&[("A", "US"), ("B", "UK")], 1)));

        let service = BreedService::new(Arc::new(mock_repo));

        let breeds = service.fetch_all_breeds().await.unwrap();
        assert_eq!(breeds.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_breeds_zero_last_page_stops_after_probe() {
        let mut mock_repo = MockBreedRepository::new();
        mock_repo
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(page(&[], 0)));

        let service = BreedService::new(Arc::new(mock_repo));

        assert!(service.fetch_all_breeds().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_breeds_aborts_on_first_failure() {
        let mut mock_repo = MockBreedRepository::new();
        mock_repo
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(page(&[("A", "US")], 4)));
        mock_repo
            .expect_fetch_page()
            .with(eq(2))
            .times(1)
            .returning(|_| Err(UpstreamError::Status { status: 502 }));
        mock_repo.expect_fetch_page().with(eq(3)).times(0);
        mock_repo.expect_fetch_page().with(eq(4)).times(0);

        let service = BreedService::new(Arc::new(mock_repo));

        let result = service.fetch_all_breeds().await;
        assert!(matches!(result, Err(UpstreamError::Status { status: 502 })));
    }

    #[tokio::test]
    async fn test_breeds_by_country_groups_across_pages() {
        let mut mock_repo = MockBreedRepository::new();
        mock_repo
            .expect_fetch_page()
            .with(eq(1))
            .returning(|_| Ok(page(&[("A", "US"), ("C", "UK")], 2)));
        mock_repo
            .expect_fetch_page()
            .with(eq(2))
            .returning(|_| Ok(page(&[("B", "US")], 2)));

        let service = BreedService::new(Arc::new(mock_repo));

        let grouped = service.breeds_by_country().await.unwrap();

        let us: Vec<_> = grouped["US"].iter().map(|b| b.breed.as_str()).collect();
        assert_eq!(us, ["A", "B"]);
        assert_eq!(grouped["UK"].len(), 1);
        assert!(grouped.values().flatten().all(|b| b.country.is_empty()));
    }
}
