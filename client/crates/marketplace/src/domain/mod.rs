//! Domain Layer - Marketplace records and the gateway seam
//!
//! This layer contains:
//! - Entities (Category, Service, ServiceRequest, Bid, Opinion, Media, Order)
//! - Value objects (Money, statuses)
//! - The search query builder
//! - Domain services (order totals)
//! - The resource gateway trait

pub mod entities;
pub mod query;
pub mod repository;
pub mod services;
pub mod value_objects;
