pub mod data_sampler;
pub mod field_extractor;
pub mod form_filler;
pub mod record_generator;
pub mod table_writer;

pub use data_sampler::DataSampler;
pub use field_extractor::FieldExtractor;
pub use form_filler::FormFiller;
pub use record_generator::{RecordGenerator, TaxParams};
pub use table_writer::{BatchEntry, TableWriter, COLUMN_LABELS};
