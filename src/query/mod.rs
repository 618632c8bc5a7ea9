pub mod criteria;
pub mod error;

use serde_derive::Serialize;

use crate::model::TestResult;
use crate::query::error::Error;

pub use self::criteria::{RangeFilter, StringFilter, TestResultCriteria};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total_elements / self.size + (self.total_elements % self.size != 0) as usize
        }
    }
}

/// Criteria queries over a fixed set of test results.
pub struct TestResultQueryService<'a> {
    results: Vec<&'a TestResult>,
}

impl<'a> TestResultQueryService<'a> {
    pub fn new<I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a TestResult>,
    {
        Self {
            results: results.into_iter().collect(),
        }
    }

    fn matching<'s>(
        &'s self,
        criteria: &'s TestResultCriteria,
    ) -> impl Iterator<Item = &'a TestResult> + 's {
        self.results
            .iter()
            .copied()
            .filter(move |result| criteria.matches(result))
    }

    pub fn find_by_criteria(&self, criteria: &TestResultCriteria) -> Vec<&'a TestResult> {
        debug!("find by criteria : {:?}", criteria);
        self.matching(criteria).collect()
    }

    pub fn find_page_by_criteria(
        &self,
        criteria: &TestResultCriteria,
        page: &PageRequest,
    ) -> Result<Page<&'a TestResult>, Error> {
        debug!("find by criteria : {:?}, page: {:?}", criteria, page);
        if page.size == 0 {
            return Err(Error::InvalidPageSize);
        }
        let total_elements = self.matching(criteria).count();
        let content = self
            .matching(criteria)
            .skip(page.page.saturating_mul(page.size))
            .take(page.size)
            .collect();
        Ok(Page {
            content,
            number: page.page,
            size: page.size,
            total_elements,
        })
    }

    pub fn count_by_criteria(&self, criteria: &TestResultCriteria) -> usize {
        debug!("count by criteria : {:?}", criteria);
        self.matching(criteria).count()
    }
}
