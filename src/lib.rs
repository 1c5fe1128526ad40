//! Indoor-climate dashboards: HVAC energy and PMV comfort by day and by year
//!
//! Pipeline: CSV rows ([`data`]) are grouped by day ([`aggregate`]), turned
//! into layered chart models ([`chart`]) and driven by view controllers
//! ([`view`]) that push them through a [`view::Render`] collaborator.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod data;
pub mod date;
pub mod error;
pub mod scenario;
pub mod view;
