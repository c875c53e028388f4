//! Domain types for screening outcomes: decision rule, batch records,
//! report rendering.

pub mod batch;
pub mod decision;
pub mod report;

pub use batch::{BatchRecord, BatchStatus, BatchSummary};
pub use decision::{decide, DrLabel, Prediction};
pub use report::{render_batch_csv, render_report, report_filename, BATCH_EXPORT_FILENAME};
