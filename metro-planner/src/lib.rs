//! Metro route planner.
//!
//! Models a multi-line transit network as a graph of stations and answers
//! two queries: the route with the fewest transfers and the route with the
//! least total travel time.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod sample;
pub mod web;
