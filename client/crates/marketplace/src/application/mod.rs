//! Application Layer - Use Cases
//!
//! Each use case wraps the resource gateway with the query shapes and
//! request bodies one group of screens needs.

pub mod bids;
pub mod catalogue;
pub mod config;
pub mod opinions;
pub mod orders;
pub mod requests;

pub use bids::BidsUseCase;
pub use catalogue::CatalogueUseCase;
pub use opinions::{NewOpinion, OpinionsUseCase};
pub use orders::{AcceptBidUseCase, AcceptedBid};
pub use requests::{NewServiceRequest, RequestsUseCase};
