pub(crate) mod amount;
pub(crate) mod assembler;
pub(crate) mod date_resolver;
pub(crate) mod extraction;
pub(crate) mod intent_classifier;
pub(crate) mod report;

pub(crate) use assembler::ActionAssembler;
pub(crate) use date_resolver::DateResolver;
pub(crate) use extraction::ExtractionRequester;
pub(crate) use intent_classifier::IntentClassifier;
pub(crate) use report::ReportUseCase;
