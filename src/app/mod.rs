pub(crate) mod error;

use crate::app::error::Error;
use crate::configuration::command_line::{Opt, SampleKind};
use crate::configuration::constants::output;
use crate::configuration::criteria;
use sample_results::query::{
    PageRequest, TestResultCriteria, TestResultQueryService, DEFAULT_PAGE_SIZE,
};
use sample_results::samples::{
    persisted_samples, SAMPLE_WITH_FULL_DATA, SAMPLE_WITH_NEW_DATA, SAMPLE_WITH_PARTIAL_DATA,
    SAMPLE_WITH_REQUIRED_DATA,
};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub struct App {
    sample: Option<SampleKind>,
    criteria: Option<PathBuf>,
    page: Option<PageRequest>,
    count: bool,
}

impl App {
    pub fn new(options: Opt) -> Self {
        let page = match (options.page, options.size) {
            (None, None) => None,
            (page, size) => Some(PageRequest::new(
                page.unwrap_or(0),
                size.unwrap_or(DEFAULT_PAGE_SIZE),
            )),
        };
        App {
            sample: options.sample,
            criteria: options.criteria,
            page,
            count: options.count,
        }
    }

    /// Renders the requested samples as pretty-printed JSON.
    pub fn run(&self) -> Result<String, Error> {
        if let Some(kind) = self.sample {
            info!("Rendering {} sample", kind);
            return Ok(serde_json::to_string_pretty(&sample_value(kind)?)?);
        }
        if self.criteria.is_none() && self.page.is_none() && !self.count {
            info!("Rendering all samples");
            let mut all = Map::new();
            for (name, kind) in &[
                (output::SAMPLE_WITH_REQUIRED_DATA, SampleKind::Required),
                (output::SAMPLE_WITH_PARTIAL_DATA, SampleKind::Partial),
                (output::SAMPLE_WITH_FULL_DATA, SampleKind::Full),
                (output::SAMPLE_WITH_NEW_DATA, SampleKind::New),
            ] {
                all.insert((*name).to_owned(), sample_value(*kind)?);
            }
            return Ok(serde_json::to_string_pretty(&Value::Object(all))?);
        }

        let criteria = match &self.criteria {
            Some(path) => {
                info!("Loading criteria from {}", path.display());
                criteria::load(path.clone())?
            }
            None => TestResultCriteria::default(),
        };
        debug!("Loaded criteria {:#?}", criteria);
        let service = TestResultQueryService::new(persisted_samples());

        if self.count {
            return Ok(service.count_by_criteria(&criteria).to_string());
        }
        let rendered = match &self.page {
            Some(page) => {
                serde_json::to_string_pretty(&service.find_page_by_criteria(&criteria, page)?)?
            }
            None => serde_json::to_string_pretty(&service.find_by_criteria(&criteria))?,
        };
        Ok(rendered)
    }
}

fn sample_value(kind: SampleKind) -> Result<Value, serde_json::Error> {
    match kind {
        SampleKind::Required => serde_json::to_value(&*SAMPLE_WITH_REQUIRED_DATA),
        SampleKind::Partial => serde_json::to_value(&*SAMPLE_WITH_PARTIAL_DATA),
        SampleKind::Full => serde_json::to_value(&*SAMPLE_WITH_FULL_DATA),
        SampleKind::New => serde_json::to_value(&*SAMPLE_WITH_NEW_DATA),
    }
}
