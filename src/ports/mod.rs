//! Ports Layer - Boundaries to External Collaborators
//!
//! Traits the use cases require from the host. The engine never fetches
//! anything itself; hosts supply snapshots through these interfaces.
//!
//! Port categories:
//! - `StockQuotes`: Ticker-keyed quote lookup from the price service
//! - `Clock`: Current time for the resolution timer

pub mod clock;
pub mod quotes;

pub use clock::{Clock, FixedClock, SystemClock};
pub use quotes::StockQuotes;
