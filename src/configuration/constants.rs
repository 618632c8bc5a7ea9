pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod output {
    pub const SAMPLE_WITH_REQUIRED_DATA: &'static str = "sampleWithRequiredData";
    pub const SAMPLE_WITH_PARTIAL_DATA: &'static str = "sampleWithPartialData";
    pub const SAMPLE_WITH_FULL_DATA: &'static str = "sampleWithFullData";
    pub const SAMPLE_WITH_NEW_DATA: &'static str = "sampleWithNewData";
}
