// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod entities;
pub mod population;
pub mod repositories;
pub mod validation;
