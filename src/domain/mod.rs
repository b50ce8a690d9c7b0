// Domain layer - Per-request value types
pub mod city;
pub mod dashboard;
pub mod news;
pub mod weather;
