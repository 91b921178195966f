//! Outbound ports - Interfaces the engine requires from external systems

mod credit_port;
mod narrative_port;
mod summarizer_port;

pub use credit_port::{CreditLedgerPort, CreditReceipt};
pub use narrative_port::NarrativePort;
pub use summarizer_port::SummarizerPort;
