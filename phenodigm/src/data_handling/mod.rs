use crate::error::PhenodigmResult;

pub mod analysis_input;

/// Source of input data for a scoring run.
pub trait Dataset {
    type Output;

    fn load(&self) -> PhenodigmResult<Self::Output>;
}
